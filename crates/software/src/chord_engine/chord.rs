use crate::{
    Label,
    theory::{ChordQuality, DIMINISHED_MARKER, ROMAN_NUMERALS, note_name},
};
use core::fmt::Write;
use tinyvec::{ArrayVec, array_vec};
use wmidi::{Note, U7};

/// The largest chords in the quality table are seventh chords.
pub const MAX_CHORD_NOTES: usize = 4;

/// The pitches of a chord, lowest first.
///
/// Internally, this struct uses the [`U7`] type because [`tinyvec`] requires that `Items` implement [`Default`].
/// Public interfaces deal with the related [`Note`] type instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChordNotes {
    data: ArrayVec<[U7; MAX_CHORD_NOTES]>,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChordNotes {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ChordNotes {{ data: [");
        for (i, &note) in self.data.iter().enumerate() {
            if i == 0 {
                defmt::write!(fmt, " ");
            } else {
                defmt::write!(fmt, ", ");
            }
            defmt::write!(fmt, "{}", u8::from(note));
        }
        defmt::write!(fmt, " ] }}");
    }
}

impl ChordNotes {
    /// Construct an empty `ChordNotes`.
    pub fn new() -> Self {
        Self { data: array_vec!() }
    }

    /// Append a [`Note`]. Notes beyond [`MAX_CHORD_NOTES`] are ignored.
    pub fn push(&mut self, note: Note) {
        if self.data.len() != self.data.capacity() {
            self.data.push(U7::from_u8_lossy(note as u8));
        }
    }

    /// Number of notes in the chord.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Determine if the chord has no notes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns an [`Iterator`] over the chord's [`Note`]s, lowest first.
    pub fn iter(&self) -> impl Iterator<Item = Note> + '_ {
        self.data.iter().map(|&n| Note::from(n))
    }

    /// Returns an [`Iterator`] over the chord's raw MIDI note numbers, lowest first.
    pub fn pitches(&self) -> impl Iterator<Item = u8> + '_ {
        self.data.iter().map(|&n| u8::from(n))
    }
}

impl FromIterator<Note> for ChordNotes {
    fn from_iter<I: IntoIterator<Item = Note>>(iter: I) -> Self {
        let mut notes = Self::new();
        iter.into_iter().for_each(|note| notes.push(note));
        notes
    }
}

/// A diatonic chord, as computed by the [`ChordEngine`](super::ChordEngine) at a particular moment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Chord {
    degree: u8,
    root: Note,
    quality: ChordQuality,
    notes: ChordNotes,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Chord {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Chord {{ degree: {}, root: {}, quality: {}, notes: {} }}",
            self.degree,
            u8::from(self.root),
            self.quality,
            self.notes
        );
    }
}

impl Chord {
    pub(crate) fn new(degree: u8, root: Note, quality: ChordQuality, notes: ChordNotes) -> Self {
        Self {
            degree,
            root,
            quality,
            notes,
        }
    }

    /// Zero-based scale degree the chord is built on.
    pub fn degree(&self) -> u8 {
        self.degree
    }

    /// The chord's root.
    pub fn root(&self) -> Note {
        self.root
    }

    /// The chord's quality.
    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    /// The chord's pitches, lowest first.
    pub fn notes(&self) -> &ChordNotes {
        &self.notes
    }

    /// Name of the chord: its root's name followed by the quality suffix, e.g. `"C"`, `"Dm"`, `"Bdim"`.
    pub fn name(&self) -> Label {
        let mut label = Label::new();
        let _ = write!(label, "{}{}", note_name(self.root), self.quality.suffix());
        label
    }

    /// Roman numeral of the chord's degree, lower case for minor and diminished chords, with the diminished marker
    /// appended where applicable, e.g. `"I"`, `"ii"`, `"vii°"`.
    pub fn numeral(&self) -> Label {
        let mut label = Label::new();
        let numeral = ROMAN_NUMERALS[usize::from(self.degree % 7)];
        for c in numeral.chars() {
            let c = if self.quality.is_lower_case() {
                c.to_ascii_lowercase()
            } else {
                c
            };
            let _ = label.write_char(c);
        }
        if self.quality.is_diminished() {
            let _ = label.write_str(DIMINISHED_MARKER);
        }
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    const C_NOTE: U7 = U7::from_u8_lossy(60);
    const E_NOTE: U7 = U7::from_u8_lossy(64);
    const G_NOTE: U7 = U7::from_u8_lossy(67);
    const B_NOTE: U7 = U7::from_u8_lossy(71);

    fn triad() -> ChordNotes {
        ChordNotes {
            data: array_vec!([U7; MAX_CHORD_NOTES] => C_NOTE, E_NOTE, G_NOTE),
        }
    }

    #[test]
    fn push_ignores_rather_than_overflow() {
        let mut notes = triad();
        notes.push(B_NOTE.into());
        notes.push(Note::C5);
        assert_eq!(MAX_CHORD_NOTES, notes.len(), "Expected chord to be full");
        assert_eq!(
            vec![60, 64, 67, 71],
            notes.pitches().collect::<Vec<_>>(),
            "Expected left but got right"
        );
    }

    #[test]
    fn iter() {
        let chord = triad();
        let mut iter = chord.iter();
        assert_eq!(Some(Note::C4), iter.next());
        assert_eq!(Some(Note::E4), iter.next());
        assert_eq!(Some(Note::G4), iter.next());
        assert_eq!(None, iter.next());
    }

    #[test]
    fn collect() {
        let collected: ChordNotes = [Note::C4, Note::E4, Note::G4].into_iter().collect();
        assert_eq!(triad(), collected, "Expected left but got right");
        assert!(ChordNotes::new().is_empty());
    }

    #[test]
    fn names_and_numerals() {
        let chord = Chord::new(1, Note::D4, ChordQuality::Minor, ChordNotes::new());
        assert_eq!("Dm", chord.name());
        assert_eq!("ii", chord.numeral());

        let chord = Chord::new(6, Note::B4, ChordQuality::Diminished, ChordNotes::new());
        assert_eq!("Bdim", chord.name());
        assert_eq!("vii°", chord.numeral());

        let chord = Chord::new(2, Note::E4, ChordQuality::Augmented, ChordNotes::new());
        assert_eq!("Eaug", chord.name());
        assert_eq!("III", chord.numeral());
    }
}
