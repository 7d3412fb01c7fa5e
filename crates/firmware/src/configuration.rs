//! Settings baked into the firmware at build time.

use chord_machine_lib::configuration::{Config, ConfigError, DEFAULT_VELOCITY};

/// Zero-based MIDI channel; 0 is what most gear calls channel 1.
const MIDI_CHANNEL: u8 = 0;

/// Middle C.
const ROOT_NOTE: u8 = 60;

/// Scale selected at power-on unless overridden by the `CHORD_MACHINE_SCALE` environment variable at build time,
/// e.g. `CHORD_MACHINE_SCALE=dorian`.
const DEFAULT_SCALE: &str = "major";

/// Validates and returns the build-time settings.
pub fn config() -> Result<Config, ConfigError> {
    let scale = option_env!("CHORD_MACHINE_SCALE").unwrap_or(DEFAULT_SCALE);
    Config::from_raw(MIDI_CHANNEL, DEFAULT_VELOCITY, ROOT_NOTE, scale)
}
