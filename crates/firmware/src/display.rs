//! Stands in for a character display by logging what it would show.

use chord_machine_lib::{Label, configuration::Mode, io::Display};
use defmt::info;

/// Characters per line of the small OLEDs this instrument is designed around.
const DISPLAY_WIDTH: usize = 16;

/// Truncates `text` to [`DISPLAY_WIDTH`] characters, as a physical display would.
fn fit(text: &str) -> Label {
    let end = text
        .char_indices()
        .nth(DISPLAY_WIDTH)
        .map_or(text.len(), |(index, _)| index);
    Label::from(&text[..end])
}

/// A [`Display`] whose "screen" is the RTT log. Each flush that follows a change logs one line.
#[derive(Default)]
pub struct LogDisplay {
    scale: Label,
    chord: Option<(Label, Label)>,
    message: Label,
    mode: Mode,
    dirty: bool,
}

impl Display for LogDisplay {
    fn show_scale(&mut self, text: &str) {
        self.scale = fit(text);
        self.dirty = true;
    }

    fn show_chord(&mut self, name: &str, numeral: &str) {
        self.chord = Some((fit(name), fit(numeral)));
        self.dirty = true;
    }

    fn show_message(&mut self, text: &str) {
        self.message = fit(text);
        self.dirty = true;
    }

    fn show_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.dirty = true;
    }

    fn clear(&mut self) {
        *self = Self {
            dirty: true,
            ..Self::default()
        };
    }

    fn flush(&mut self) {
        if !core::mem::take(&mut self.dirty) {
            return;
        }
        match &self.chord {
            Some((name, numeral)) => info!(
                "[display] {} {} | {} {} | {}",
                self.mode.indicator(),
                self.scale,
                name,
                numeral,
                self.message
            ),
            None => info!(
                "[display] {} {} | {}",
                self.mode.indicator(),
                self.scale,
                self.message
            ),
        }
    }
}
