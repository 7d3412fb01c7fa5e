//! This module contains the performer- and platform-configurable settings of the instrument, along with a trait that
//! makes enum-valued settings easy to step through from a rotary encoder or pushbutton.

mod error;
pub use error::*;

mod mode;
pub use mode::*;

use crate::{
    chord_engine::{OCTAVE_MAX, OCTAVE_MIN},
    theory::{NOTES_PER_OCTAVE, Scale},
};
use num_traits::{FromPrimitive, ToPrimitive};
use wmidi::{Channel, Note, U7, Velocity};

/// A trait which allows infinite cycling of an enum's variants, in both directions.
///
/// Useful for encoder and pushbutton user interfaces, allowing each detent or press to advance from the current to the
/// next (or previous) variant, wrapping around when all variants have been exhausted. Variants must be fieldless and
/// numbered contiguously from zero.
pub trait CycleConfig: FromPrimitive + ToPrimitive + Sized {
    /// Number of variants.
    const COUNT: u8;

    /// Position of the variant, counting from zero.
    fn index(self) -> usize {
        self.to_usize().expect("enum variants should be castable to usize")
    }

    /// Return the variant at `index`, wrapping indices past the last variant back around to the beginning.
    fn nth(index: usize) -> Self {
        <Self as FromPrimitive>::from_usize(index % usize::from(Self::COUNT))
            .expect("COUNT should match the number of variants")
    }

    /// Return the next variant, cycling back to the beginning as needed.
    fn cycle(self) -> Self {
        Self::nth(self.index() + 1)
    }

    /// Return the previous variant, cycling back to the end as needed.
    fn cycle_back(self) -> Self {
        Self::nth(self.index() + usize::from(Self::COUNT) - 1)
    }
}

/// Default velocity for chord notes.
pub const DEFAULT_VELOCITY: u8 = 100;

/// Settings fixed for the lifetime of the application loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config {
    /// Channel on which all MIDI messages are sent.
    pub midi_channel: Channel,
    /// Velocity of every NoteOn.
    pub velocity: Velocity,
    /// Root of the key the chords are built in; also the target of a reset. Must lie within
    /// [`OCTAVE_MIN`]..=[`OCTAVE_MAX`].
    pub root_note: Note,
    /// Scale selected at start-up; also the target of a reset.
    pub scale: Scale,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            midi_channel: Channel::Ch1,
            velocity: U7::from_u8_lossy(DEFAULT_VELOCITY),
            root_note: Note::C4,
            scale: Scale::default(),
        }
    }
}

impl Config {
    /// Builds a `Config` from raw values, e.g. ones read from build-time settings.
    ///
    /// `midi_channel` is zero-based (0-15). Unlike the runtime controls, which clamp or wrap out-of-range input, raw
    /// configuration is rejected so that mistakes surface before the instrument starts playing.
    pub fn from_raw(
        midi_channel: u8,
        velocity: u8,
        root_note: u8,
        scale: &str,
    ) -> Result<Self, ConfigError> {
        let midi_channel =
            Channel::from_index(midi_channel).map_err(|_| ConfigError::InvalidChannel(midi_channel))?;
        if velocity > 127 {
            return Err(ConfigError::InvalidVelocity(velocity));
        }
        check_root_note(root_note)?;
        let scale = Scale::from_name(scale).ok_or(ConfigError::UnknownScale)?;

        Ok(Self {
            midi_channel,
            velocity: U7::from_u8_lossy(velocity),
            root_note: Note::from(U7::from_u8_lossy(root_note)),
            scale,
        })
    }

    /// Checks the settings against each other and the static tables they depend on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_root_note(u8::from(self.root_note))?;
        crate::theory::validate_degrees(self.scale, self.scale.degrees())
    }
}

/// A root note is only accepted if every chord button can play above it without running off the top of the MIDI
/// range.
fn check_root_note(root_note: u8) -> Result<(), ConfigError> {
    let octave = root_note / NOTES_PER_OCTAVE;
    if root_note > 127 || !(OCTAVE_MIN..=OCTAVE_MAX).contains(&octave) {
        return Err(ConfigError::InvalidRootNote(root_note));
    }
    Ok(())
}
