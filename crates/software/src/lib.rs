//! This crate contains architecture-agnostic logic for the Chord Machine, a hand-held instrument whose seven buttons
//! play the diatonic chords (I-VII) of a selectable scale over [MIDI](https://midi.org/midi-1-0), while a rotary
//! encoder changes the scale or the root note and an LED matrix and small text display mirror what is being played.
//!
//! Nothing here touches a peripheral directly. The [`app::ChordMachine`] drives whatever implements the traits in
//! [`io`], so the same core runs on a microcontroller, in a simulator, or against the mocks used by the tests.

#![deny(missing_docs)]
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

#[macro_use]
mod fmt;

/// Static music theory data (scales, intervals, chord qualities) and pure functions over it.
pub mod theory;

pub mod chord_engine;

pub mod configuration;

pub mod event_bus;

pub mod ui_state;

pub mod io;

/// Bookkeeping for the notes which have been sent to the MIDI output and still await their NoteOff.
pub mod active_notes;

pub mod app;

mod label;
pub use label::Label;
