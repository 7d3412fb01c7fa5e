/// Chord qualities and the semitone offsets of their members, measured from the chord's root.
///
/// Diatonic chord generation only produces the four triads. The seventh chords are listed so they can be voiced
/// once chord extensions are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChordQuality {
    /// Root, major third, perfect fifth.
    Major,
    /// Root, minor third, perfect fifth.
    Minor,
    /// Root, minor third, diminished fifth.
    Diminished,
    /// Root, major third, augmented fifth.
    Augmented,
    /// Major triad plus a major seventh.
    Major7,
    /// Minor triad plus a minor seventh.
    Minor7,
    /// Major triad plus a minor seventh.
    Dominant7,
    /// Diminished triad plus a diminished seventh.
    Diminished7,
    /// Diminished triad plus a minor seventh.
    HalfDiminished7,
}

impl ChordQuality {
    /// Semitone offsets of each chord member from the root, in ascending order.
    pub fn offsets(self) -> &'static [u8] {
        match self {
            Self::Major => &[0, 4, 7],
            Self::Minor => &[0, 3, 7],
            Self::Diminished => &[0, 3, 6],
            Self::Augmented => &[0, 4, 8],
            Self::Major7 => &[0, 4, 7, 11],
            Self::Minor7 => &[0, 3, 7, 10],
            Self::Dominant7 => &[0, 4, 7, 10],
            Self::Diminished7 => &[0, 3, 6, 9],
            Self::HalfDiminished7 => &[0, 3, 6, 10],
        }
    }

    /// Suffix appended to the root's name when naming a chord, e.g. the "m" in "Dm".
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Major => "",
            Self::Minor => "m",
            Self::Diminished => "dim",
            Self::Augmented => "aug",
            Self::Major7 => "maj7",
            Self::Minor7 => "m7",
            Self::Dominant7 => "7",
            Self::Diminished7 => "dim7",
            Self::HalfDiminished7 => "m7b5",
        }
    }

    /// Whether the chord's roman numeral is written in lower case.
    pub fn is_lower_case(self) -> bool {
        matches!(
            self,
            Self::Minor | Self::Diminished | Self::Minor7 | Self::Diminished7 | Self::HalfDiminished7
        )
    }

    /// Whether the chord's roman numeral carries the diminished marker.
    pub fn is_diminished(self) -> bool {
        matches!(self, Self::Diminished | Self::Diminished7)
    }
}
