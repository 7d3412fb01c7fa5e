use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;

/// Named intervals from the unison up to the octave. Each variant's discriminant is its size in semitones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive, ToPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Interval {
    /// 0 semitones
    Unison = 0,
    /// 1 semitone
    MinorSecond,
    /// 2 semitones
    MajorSecond,
    /// 3 semitones
    MinorThird,
    /// 4 semitones
    MajorThird,
    /// 5 semitones
    PerfectFourth,
    /// 6 semitones; also the diminished fifth
    Tritone,
    /// 7 semitones
    PerfectFifth,
    /// 8 semitones; also the augmented fifth
    MinorSixth,
    /// 9 semitones
    MajorSixth,
    /// 10 semitones
    MinorSeventh,
    /// 11 semitones
    MajorSeventh,
    /// 12 semitones
    Octave,
}

impl Interval {
    /// Returns the `Interval` spanning `semitones`, or `None` for anything wider than an octave.
    pub fn from_semitones(semitones: u8) -> Option<Self> {
        <Self as FromPrimitive>::from_u8(semitones)
    }

    /// Size of the interval in semitones.
    pub fn semitones(self) -> u8 {
        self as u8
    }
}
