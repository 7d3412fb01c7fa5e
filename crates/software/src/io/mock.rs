//! In-memory peripherals for tests. Inputs are scripted with the `simulate_*` methods; outputs record what they
//! were asked to do.

use super::*;
use crate::configuration::Mode;
use core::cell::RefCell;
use std::{rc::Rc, string::String, vec::Vec};
use wmidi::MidiMessage;

const BUTTON_COUNT: usize = crate::ui_state::BUTTON_COUNT;

#[derive(Debug, Default)]
pub struct MockButtons {
    held: [bool; BUTTON_COUNT],
    pressed: [bool; BUTTON_COUNT],
    released: [bool; BUTTON_COUNT],
    long_pressed: [bool; BUTTON_COUNT],
    pub polls: usize,
}

impl MockButtons {
    pub fn simulate_press(&mut self, index: usize) {
        self.held[index] = true;
        self.pressed[index] = true;
    }

    pub fn simulate_release(&mut self, index: usize) {
        self.held[index] = false;
        self.released[index] = true;
    }

    pub fn simulate_long_press(&mut self, index: usize) {
        self.long_pressed[index] = true;
    }
}

fn take(flags: &mut [bool; BUTTON_COUNT], index: usize) -> bool {
    flags
        .get_mut(index)
        .is_some_and(core::mem::take)
}

impl Buttons for MockButtons {
    fn poll(&mut self) {
        self.polls += 1;
    }

    fn was_pressed(&mut self, index: usize) -> bool {
        take(&mut self.pressed, index)
    }

    fn was_released(&mut self, index: usize) -> bool {
        take(&mut self.released, index)
    }

    fn was_long_pressed(&mut self, index: usize) -> bool {
        take(&mut self.long_pressed, index)
    }

    fn is_pressed(&self, index: usize) -> bool {
        self.held.get(index).copied().unwrap_or_default()
    }
}

#[derive(Debug, Default)]
pub struct MockEncoder {
    value: i32,
    unread: i32,
    button_pressed: bool,
}

impl MockEncoder {
    pub fn simulate_turn(&mut self, delta: i32) {
        self.value += delta;
        self.unread += delta;
    }

    pub fn simulate_button_press(&mut self) {
        self.button_pressed = true;
    }
}

impl Encoder for MockEncoder {
    fn delta(&mut self) -> i32 {
        core::mem::take(&mut self.unread)
    }

    fn was_button_pressed(&mut self) -> bool {
        core::mem::take(&mut self.button_pressed)
    }

    fn value(&self) -> i32 {
        self.value
    }

    fn set_value(&mut self, value: i32) {
        self.value = value;
        self.unread = 0;
    }
}

/// What a [`MockDisplay`] currently shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Screen {
    pub scale: Option<String>,
    pub chord: Option<(String, String)>,
    pub message: Option<String>,
    pub mode: Option<Mode>,
}

#[derive(Debug, Default)]
pub struct MockDisplay {
    /// Contents as of the last flush
    pub shown: Screen,
    buffer: Screen,
    pub flushes: usize,
}

impl Display for MockDisplay {
    fn show_scale(&mut self, text: &str) {
        self.buffer.scale = Some(text.into());
    }

    fn show_chord(&mut self, name: &str, numeral: &str) {
        self.buffer.chord = Some((name.into(), numeral.into()));
    }

    fn show_message(&mut self, text: &str) {
        self.buffer.message = Some(text.into());
    }

    fn show_mode(&mut self, mode: Mode) {
        self.buffer.mode = Some(mode);
    }

    fn clear(&mut self) {
        self.buffer = Screen::default();
    }

    fn flush(&mut self) {
        self.shown = self.buffer.clone();
        self.flushes += 1;
    }
}

/// Records LED state without buffering; `flushes` counts how often it would have been pushed out.
#[derive(Debug, Default)]
pub struct MockLedMatrix {
    pub button_leds: [Rgb; BUTTON_COUNT],
    /// Indexed `[y][x]`
    pub pixels: [[Rgb; MATRIX_WIDTH as usize]; MATRIX_HEIGHT as usize],
    pub flushes: usize,
}

impl MockLedMatrix {
    pub fn lit_pixels(&self) -> usize {
        self.pixels
            .iter()
            .flatten()
            .filter(|&&pixel| pixel != Rgb::OFF)
            .count()
    }
}

impl LedMatrix for MockLedMatrix {
    fn clear(&mut self) {
        self.button_leds = Default::default();
        self.pixels = Default::default();
    }

    fn set_button_led(&mut self, index: usize, color: Rgb) {
        if let Some(led) = self.button_leds.get_mut(index) {
            *led = color;
        }
    }

    fn set_pixel(&mut self, x: u8, y: u8, color: Rgb) {
        if let Some(pixel) = self
            .pixels
            .get_mut(usize::from(y))
            .and_then(|row| row.get_mut(usize::from(x)))
        {
            *pixel = color;
        }
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

#[derive(Debug, Default)]
pub struct MockMidiOutput {
    /// Shared, so that it can still be read after the output has been dropped
    pub sent: Rc<RefCell<Vec<MidiMessage<'static>>>>,
}

impl MockMidiOutput {
    pub fn messages(&self) -> Vec<MidiMessage<'static>> {
        self.sent.borrow().clone()
    }
}

impl MidiOutput for MockMidiOutput {
    fn send(&mut self, message: MidiMessage<'static>) {
        self.sent.borrow_mut().push(message);
    }
}

pub type MockPort = HardwarePort<MockButtons, MockEncoder, MockDisplay, MockLedMatrix, MockMidiOutput>;

pub fn mock_port() -> MockPort {
    HardwarePort::new(
        MockButtons::default(),
        MockEncoder::default(),
        MockDisplay::default(),
        MockLedMatrix::default(),
        MockMidiOutput::default(),
    )
}
