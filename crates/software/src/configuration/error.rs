use crate::theory::Scale;
use core::fmt;

/// Problems which can only arise while the instrument is being assembled.
///
/// Once the application loop is running, the core is total: out-of-range degrees, indices, and encoder input are
/// wrapped or ignored rather than reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A zero-based MIDI channel outside 0-15.
    InvalidChannel(u8),
    /// A velocity outside 0-127.
    InvalidVelocity(u8),
    /// A root note outside the octaves the chord engine plays in (24-119, C2 to B8).
    InvalidRootNote(u8),
    /// A scale identifier that matches none of the built-in scales.
    UnknownScale,
    /// A scale table that doesn't start at 0, isn't strictly ascending, or leaves the octave.
    MalformedScale(Scale),
    /// A scale degree whose triad is neither major, minor, diminished, nor augmented.
    UnclassifiedTriad {
        /// Scale containing the triad.
        scale: Scale,
        /// Zero-based degree of the triad's root.
        degree: u8,
    },
    /// More event listeners were registered than the event bus has room for.
    TooManySubscriptions,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChannel(channel) => write!(f, "MIDI channel index {channel} is not within 0-15"),
            Self::InvalidVelocity(velocity) => write!(f, "velocity {velocity} is not within 0-127"),
            Self::InvalidRootNote(note) => write!(f, "root note {note} is not within 24-119"),
            Self::UnknownScale => f.write_str("unknown scale"),
            Self::MalformedScale(scale) => write!(f, "scale table for {} is malformed", scale.name()),
            Self::UnclassifiedTriad { scale, degree } => write!(
                f,
                "triad on degree {degree} of {} is not a major, minor, diminished, or augmented triad",
                scale.name()
            ),
            Self::TooManySubscriptions => f.write_str("event bus subscription capacity exceeded"),
        }
    }
}

impl core::error::Error for ConfigError {}
