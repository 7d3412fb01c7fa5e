//! A mechanical rotary encoder (e.g. a PEC11) whose phases and push switch short to ground.

use chord_machine_lib::io::{ButtonTracker, Encoder, QuadratureDecoder};
use embassy_stm32::gpio::Input;
use embassy_time::Instant;

/// Encoder read by polling. The phases are sampled whenever the application loop asks for a delta, which at a 1 ms
/// loop period keeps up with hand-turned knobs.
pub struct GpioEncoder {
    a: Input<'static>,
    b: Input<'static>,
    switch: Input<'static>,
    decoder: QuadratureDecoder,
    switch_tracker: ButtonTracker,
}

impl GpioEncoder {
    /// Constructs a [`GpioEncoder`] from its two phase pins and its switch pin, all pulled up.
    pub fn new(a: Input<'static>, b: Input<'static>, switch: Input<'static>) -> Self {
        let decoder = QuadratureDecoder::new(a.is_low(), b.is_low());
        Self {
            a,
            b,
            switch,
            decoder,
            switch_tracker: ButtonTracker::new(Instant::now()),
        }
    }
}

impl Encoder for GpioEncoder {
    fn delta(&mut self) -> i32 {
        self.decoder.update(self.a.is_low(), self.b.is_low());
        self.decoder.take_delta()
    }

    fn was_button_pressed(&mut self) -> bool {
        self.switch_tracker
            .update(self.switch.is_low(), Instant::now());
        self.switch_tracker.was_pressed()
    }

    fn value(&self) -> i32 {
        self.decoder.value()
    }

    fn set_value(&mut self, value: i32) {
        self.decoder.set_value(value);
    }
}
