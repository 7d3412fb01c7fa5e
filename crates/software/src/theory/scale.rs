use crate::configuration::CycleConfig;
use num_derive::{FromPrimitive, ToPrimitive};

/// The seven-note scales the instrument can play chords from.
///
/// Variant order is the order in which the encoder cycles through them; a scale's index is its discriminant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ToPrimitive, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scale {
    /// Ionian mode; W-W-H-W-W-W-H.
    #[default]
    Major,
    /// Aeolian mode; W-H-W-W-H-W-W.
    NaturalMinor,
    /// Natural minor with a raised seventh.
    HarmonicMinor,
    /// Natural minor with raised sixth and seventh (ascending form).
    MelodicMinor,
    /// Second mode of the major scale.
    Dorian,
    /// Third mode of the major scale.
    Phrygian,
    /// Fourth mode of the major scale.
    Lydian,
    /// Fifth mode of the major scale.
    Mixolydian,
    /// Seventh mode of the major scale.
    Locrian,
}

impl CycleConfig for Scale {
    const COUNT: u8 = 9;
}

impl Scale {
    /// Every scale, in cycling order.
    pub const ALL: [Scale; Self::COUNT as usize] = [
        Self::Major,
        Self::NaturalMinor,
        Self::HarmonicMinor,
        Self::MelodicMinor,
        Self::Dorian,
        Self::Phrygian,
        Self::Lydian,
        Self::Mixolydian,
        Self::Locrian,
    ];

    /// Semitone offsets of degrees 0 through 6 from the scale's root.
    pub fn degrees(self) -> &'static [u8; 7] {
        match self {
            Self::Major => &[0, 2, 4, 5, 7, 9, 11],
            Self::NaturalMinor => &[0, 2, 3, 5, 7, 8, 10],
            Self::HarmonicMinor => &[0, 2, 3, 5, 7, 8, 11],
            Self::MelodicMinor => &[0, 2, 3, 5, 7, 9, 11],
            Self::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            Self::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            Self::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            Self::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            Self::Locrian => &[0, 1, 3, 5, 6, 8, 10],
        }
    }

    /// The scale's identifier, e.g. `"harmonic_minor"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::NaturalMinor => "natural_minor",
            Self::HarmonicMinor => "harmonic_minor",
            Self::MelodicMinor => "melodic_minor",
            Self::Dorian => "dorian",
            Self::Phrygian => "phrygian",
            Self::Lydian => "lydian",
            Self::Mixolydian => "mixolydian",
            Self::Locrian => "locrian",
        }
    }

    /// The scale's name as shown to the performer, e.g. `"Harmonic Minor"`.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Major => "Major",
            Self::NaturalMinor => "Natural Minor",
            Self::HarmonicMinor => "Harmonic Minor",
            Self::MelodicMinor => "Melodic Minor",
            Self::Dorian => "Dorian",
            Self::Phrygian => "Phrygian",
            Self::Lydian => "Lydian",
            Self::Mixolydian => "Mixolydian",
            Self::Locrian => "Locrian",
        }
    }

    /// Looks up a scale by its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scale| scale.name() == name)
    }
}
