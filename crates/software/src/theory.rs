mod interval;
pub use interval::*;

mod quality;
pub use quality::*;

mod scale;
pub use scale::*;

use crate::configuration::ConfigError;
use wmidi::Note;

/// Number of semitones in an octave.
pub const NOTES_PER_OCTAVE: u8 = 12;

/// Number of degrees in each of the supported scales.
pub const SCALE_DEGREES: u8 = 7;

/// Names of the twelve pitch classes, starting at C.
pub const NOTE_NAMES: [&str; NOTES_PER_OCTAVE as usize] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Upper-case roman numerals for scale degrees I through VII.
pub const ROMAN_NUMERALS: [&str; SCALE_DEGREES as usize] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Suffix appended to the roman numeral of a diminished chord.
pub const DIMINISHED_MARKER: &str = "°";

/// Returns the name of a [`Note`]'s pitch class, e.g. "C#" for any C#/Db.
pub fn note_name(note: Note) -> &'static str {
    pitch_class_name(u8::from(note))
}

/// Returns the name of the pitch class of a raw pitch number.
pub fn pitch_class_name(pitch: u8) -> &'static str {
    NOTE_NAMES[usize::from(pitch % NOTES_PER_OCTAVE)]
}

/// Returns the semitone offsets of the scale with the given identifier (e.g. `"natural_minor"`).
///
/// Unknown identifiers fall back to the major scale; this lookup never fails.
pub fn scale_degrees(scale_id: &str) -> &'static [u8; 7] {
    Scale::from_name(scale_id).unwrap_or_default().degrees()
}

/// Classifies the triad built on `degree` of a scale, or returns `None` when its third and fifth don't form one of
/// the four triad qualities.
///
/// `degree` is reduced modulo 7. Thirds and fifths which wrap past the octave are raised by 12 semitones before
/// measuring them against the root.
pub fn triad_quality(degrees: &[u8; 7], degree: u8) -> Option<ChordQuality> {
    let degree = usize::from(degree % SCALE_DEGREES);
    let root = degrees[degree];
    let mut third = degrees[(degree + 2) % 7];
    let mut fifth = degrees[(degree + 4) % 7];

    if third < root {
        third += NOTES_PER_OCTAVE;
    }
    if fifth < root {
        fifth += NOTES_PER_OCTAVE;
    }

    match (
        Interval::from_semitones(third - root)?,
        Interval::from_semitones(fifth - root)?,
    ) {
        (Interval::MajorThird, Interval::PerfectFifth) => Some(ChordQuality::Major),
        (Interval::MinorThird, Interval::PerfectFifth) => Some(ChordQuality::Minor),
        (Interval::MinorThird, Interval::Tritone) => Some(ChordQuality::Diminished),
        (Interval::MajorThird, Interval::MinorSixth) => Some(ChordQuality::Augmented),
        _ => None,
    }
}

/// Determines the quality of the diatonic triad on `degree` (reduced modulo 7) of `scale`.
///
/// Triads that don't classify fall back to [`ChordQuality::Major`]. None of the built-in scales reach that branch
/// ([`validate_scale_tables`] checks this); a warning is logged if it ever happens.
pub fn chord_quality_for_degree(scale: Scale, degree: u8) -> ChordQuality {
    triad_quality(scale.degrees(), degree).unwrap_or_else(|| {
        warn!(
            "Triad on degree {} of {} has no known quality; treating it as major",
            degree % SCALE_DEGREES,
            scale.name()
        );
        ChordQuality::Major
    })
}

/// Checks a scale's offsets: they must start at 0, strictly increase, stay within one octave, and every triad must
/// classify as major, minor, diminished, or augmented.
pub fn validate_degrees(scale: Scale, degrees: &[u8; 7]) -> Result<(), ConfigError> {
    let ascending = degrees.windows(2).all(|pair| pair[0] < pair[1]);
    if degrees[0] != 0 || !ascending || degrees[6] >= NOTES_PER_OCTAVE {
        return Err(ConfigError::MalformedScale(scale));
    }

    match (0..SCALE_DEGREES).find(|&degree| triad_quality(degrees, degree).is_none()) {
        Some(degree) => Err(ConfigError::UnclassifiedTriad { scale, degree }),
        None => Ok(()),
    }
}

/// Runs [`validate_degrees`] over every built-in scale. Intended to run once, before the application loop starts.
pub fn validate_scale_tables() -> Result<(), ConfigError> {
    Scale::ALL
        .iter()
        .try_for_each(|&scale| validate_degrees(scale, scale.degrees()))
}
