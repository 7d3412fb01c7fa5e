use super::CycleConfig;
use num_derive::{FromPrimitive, ToPrimitive};

/// Determines what the rotary encoder controls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ToPrimitive, FromPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Turning the encoder steps through the scales, one scale per detent regardless of how fast it is turned.
    #[default]
    Play,
    /// Turning the encoder moves the root note up or down by semitones within its octave.
    Settings,
}

impl CycleConfig for Mode {
    const COUNT: u8 = 2;
}

impl Mode {
    /// Single character shown in a corner of the display to indicate the mode.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Play => ">",
            Self::Settings => "*",
        }
    }
}
