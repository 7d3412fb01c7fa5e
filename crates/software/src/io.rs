//! This module defines the contract between the Chord Machine's core and its peripherals: one trait per group of
//! peripherals, plus the [`HardwarePort`] bundle in which a platform hands its implementations to the
//! [`ChordMachine`](crate::app::ChordMachine).
//!
//! Input and its expression are kept apart. Inputs ([`Buttons`], [`Encoder`]) are polled once per loop iteration and
//! their edges are consumed by the reader; outputs ([`Display`], [`LedMatrix`], [`MidiOutput`]) may buffer their
//! changes until they are flushed. Every call is expected to return promptly; a transport that can fail or block is
//! responsible for its own queueing and retries.
//!
//! The submodules also carry platform-independent helpers ([`ButtonTracker`], [`QuadratureDecoder`],
//! [`matrix_position`], [`usb_midi_packet`]) which drivers can reuse.

mod buttons;
pub use buttons::*;

mod display;
pub use display::*;

mod encoder;
pub use encoder::*;

mod led_matrix;
pub use led_matrix::*;

mod midi;
pub use midi::*;

#[cfg(test)]
pub(crate) mod mock;

/// The set of peripherals the application loop runs against.
///
/// Assembled once by platform-specific code and moved into the [`ChordMachine`](crate::app::ChordMachine); the core
/// never constructs hardware itself.
pub struct HardwarePort<B, E, D, L, M> {
    /// Chord buttons 0-6 and the function button 7.
    pub buttons: B,
    /// Rotary encoder with a push switch.
    pub encoder: E,
    /// Text display.
    pub display: D,
    /// Indicator lights.
    pub led_matrix: L,
    /// Destination of every MIDI message the instrument produces.
    pub midi_output: M,
}

impl<B, E, D, L, M> HardwarePort<B, E, D, L, M>
where
    B: Buttons,
    E: Encoder,
    D: Display,
    L: LedMatrix,
    M: MidiOutput,
{
    /// Bundles the given peripherals.
    pub fn new(buttons: B, encoder: E, display: D, led_matrix: L, midi_output: M) -> Self {
        Self {
            buttons,
            encoder,
            display,
            led_matrix,
            midi_output,
        }
    }
}
