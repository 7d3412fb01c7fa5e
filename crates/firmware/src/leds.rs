//! Stands in for the LED matrix with the Nucleo board's three user LEDs.
//!
//! The full matrix state is kept in memory so that the core can treat this like any other [`LedMatrix`]; on flush,
//! it's summarized: green (LD1) lights while any chord note is drawn on the matrix, blue (LD2) and red (LD3) follow the
//! blue and red channels of the function button's LED, i.e. blue in Play mode and red in Settings mode.

use chord_machine_lib::{
    app::FUNCTION_BUTTON,
    io::{LedMatrix, MATRIX_HEIGHT, MATRIX_WIDTH, Rgb},
    ui_state::BUTTON_COUNT,
};
use embassy_stm32::gpio::{Level, Output};

/// The board's user LEDs backing a [`LedMatrix`].
pub struct BoardLeds {
    green: Output<'static>,
    blue: Output<'static>,
    red: Output<'static>,
    button_leds: [Rgb; BUTTON_COUNT],
    pixels: [[Rgb; MATRIX_WIDTH as usize]; MATRIX_HEIGHT as usize],
}

impl BoardLeds {
    /// Constructs a [`BoardLeds`] from LD1 (green), LD2 (blue), and LD3 (red).
    pub fn new(green: Output<'static>, blue: Output<'static>, red: Output<'static>) -> Self {
        Self {
            green,
            blue,
            red,
            button_leds: [Rgb::OFF; BUTTON_COUNT],
            pixels: [[Rgb::OFF; MATRIX_WIDTH as usize]; MATRIX_HEIGHT as usize],
        }
    }
}

impl LedMatrix for BoardLeds {
    fn clear(&mut self) {
        self.button_leds = [Rgb::OFF; BUTTON_COUNT];
        self.pixels = [[Rgb::OFF; MATRIX_WIDTH as usize]; MATRIX_HEIGHT as usize];
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
        // the scale marker does not count
        let chord_drawn = self
            .pixels
            .iter()
            .flatten()
            .any(|&pixel| pixel != Rgb::OFF && pixel != Rgb::SCALE_INDICATOR);
        let mode = self.button_leds[FUNCTION_BUTTON];

        self.green.set_level(Level::from(chord_drawn));
        self.blue.set_level(Level::from(mode.b > 0));
        self.red.set_level(Level::from(mode.r > 0));
    }
}
