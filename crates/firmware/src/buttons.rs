//! Pushbuttons wired between a GPIO and ground, relying on the internal pull-ups.

use chord_machine_lib::{
    io::{ButtonTracker, Buttons},
    ui_state::BUTTON_COUNT,
};
use embassy_stm32::gpio::Input;
use embassy_time::Instant;

/// The eight buttons, debounced in software.
pub struct GpioButtons {
    pins: [Input<'static>; BUTTON_COUNT],
    trackers: [ButtonTracker; BUTTON_COUNT],
}

impl GpioButtons {
    /// Constructs a [`GpioButtons`]; `pins` are given in button order, chord I first.
    pub fn new(pins: [Input<'static>; BUTTON_COUNT]) -> Self {
        Self {
            pins,
            trackers: [ButtonTracker::new(Instant::now()); BUTTON_COUNT],
        }
    }
}

impl Buttons for GpioButtons {
    fn poll(&mut self) {
        let now = Instant::now();
        for (pin, tracker) in self.pins.iter().zip(self.trackers.iter_mut()) {
            // pulled up, so a held button reads low
            tracker.update(pin.is_low(), now);
        }
    }

    fn was_pressed(&mut self, index: usize) -> bool {
        self.trackers
            .get_mut(index)
            .is_some_and(ButtonTracker::was_pressed)
    }

    fn was_released(&mut self, index: usize) -> bool {
        self.trackers
            .get_mut(index)
            .is_some_and(ButtonTracker::was_released)
    }

    fn was_long_pressed(&mut self, index: usize) -> bool {
        self.trackers
            .get_mut(index)
            .is_some_and(ButtonTracker::was_long_pressed)
    }

    fn is_pressed(&self, index: usize) -> bool {
        self.trackers
            .get(index)
            .is_some_and(ButtonTracker::is_pressed)
    }
}
