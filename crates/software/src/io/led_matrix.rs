use crate::{
    chord_engine::ChordNotes,
    theory::NOTES_PER_OCTAVE,
};
use wmidi::Note;

/// Width of the LED matrix in pixels.
pub const MATRIX_WIDTH: u8 = 8;

/// Height of the LED matrix in pixels.
pub const MATRIX_HEIGHT: u8 = 8;

/// An LED colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Unlit.
    pub const OFF: Self = Self::new(0, 0, 0);
    /// Button LED of a held chord.
    pub const CHORD_ACTIVE: Self = Self::new(0, 255, 0);
    /// Pixels of a held chord's notes.
    pub const CHORD_NOTE: Self = Self::new(0, 255, 255);
    /// Pixels of held notes sharing the key's root pitch class.
    pub const TONIC: Self = Self::new(255, 0, 255);
    /// Function button LED in [`Mode::Play`](crate::configuration::Mode::Play).
    pub const MODE_PLAY: Self = Self::new(0, 0, 50);
    /// Function button LED in [`Mode::Settings`](crate::configuration::Mode::Settings).
    pub const MODE_SETTINGS: Self = Self::new(50, 50, 0);
    /// Marker of the selected scale.
    pub const SCALE_INDICATOR: Self = Self::new(255, 255, 0);

    /// Constructs an [`Rgb`] colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scales every channel by `brightness`/255, for LEDs which are too bright at full power.
    pub fn dimmed(self, brightness: u8) -> Self {
        let scale = |channel: u8| (u16::from(channel) * u16::from(brightness) / 255) as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }
}

/// Maps a note to its `(x, y)` pixel: the octave selects the row (wrapping past the bottom) and the pitch class is
/// spread across the columns, so neighbouring semitones can share a pixel.
pub fn matrix_position(note: Note) -> (u8, u8) {
    let pitch = u8::from(note);
    let y = (pitch / NOTES_PER_OCTAVE) % MATRIX_HEIGHT;
    let x = pitch % NOTES_PER_OCTAVE * MATRIX_WIDTH / NOTES_PER_OCTAVE;
    (x, y)
}

/// Returns the column of the bottom row which marks scale `index` of `total`, or `None` if `total` is zero.
pub fn scale_indicator_column(index: usize, total: usize) -> Option<u8> {
    if total == 0 {
        return None;
    }
    let column = index.min(total - 1) * usize::from(MATRIX_WIDTH) / total;
    Some(column as u8)
}

/// Indicator lights: one LED per button plus an 8x8 pixel matrix.
///
/// Platforms whose button LEDs are pixels of the matrix may share storage between the two. Changes may be buffered
/// until [`flush`](Self::flush).
pub trait LedMatrix {
    /// Turns every LED off, button LEDs included.
    fn clear(&mut self);

    /// Sets the LED of the button at `index`. Out-of-range indices are ignored.
    fn set_button_led(&mut self, index: usize, color: Rgb);

    /// Sets the pixel at column `x`, row `y`. Out-of-range coordinates are ignored.
    fn set_pixel(&mut self, x: u8, y: u8, color: Rgb);

    /// Pushes buffered changes to the LEDs.
    fn flush(&mut self);

    /// Lights the pixel of each note (see [`matrix_position`]) without clearing the rest of the matrix. Notes
    /// sharing `root_note`'s pitch class are lit in [`Rgb::TONIC`], the others in [`Rgb::CHORD_NOTE`].
    fn render_chord(&mut self, notes: &ChordNotes, root_note: Note) {
        let tonic = u8::from(root_note) % NOTES_PER_OCTAVE;
        for note in notes.iter() {
            let (x, y) = matrix_position(note);
            let color = if u8::from(note) % NOTES_PER_OCTAVE == tonic {
                Rgb::TONIC
            } else {
                Rgb::CHORD_NOTE
            };
            self.set_pixel(x, y, color);
        }
    }

    /// Clears the bottom row and marks the position of scale `index` among `total` scales on it.
    fn show_scale_indicator(&mut self, index: usize, total: usize) {
        let y = MATRIX_HEIGHT - 1;
        for x in 0..MATRIX_WIDTH {
            self.set_pixel(x, y, Rgb::OFF);
        }
        if let Some(x) = scale_indicator_column(index, total) {
            self.set_pixel(x, y, Rgb::SCALE_INDICATOR);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mock::MockLedMatrix;

    #[test]
    fn octave_selects_row_and_pitch_class_selects_column() {
        assert_eq!((0, 5), matrix_position(Note::C4));
        assert_eq!((2, 5), matrix_position(Note::E4));
        assert_eq!((4, 5), matrix_position(Note::G4));
        assert_eq!((7, 5), matrix_position(Note::B4));
        assert_eq!((0, 2), matrix_position(Note::from_u8_lossy(24 + 96)), "Rows should wrap");
    }

    #[test]
    fn scale_indicator_column_spreads_across_the_row() {
        assert_eq!(Some(0), scale_indicator_column(0, 9));
        assert_eq!(Some(4), scale_indicator_column(5, 9));
        assert_eq!(Some(7), scale_indicator_column(8, 9));
        assert_eq!(Some(7), scale_indicator_column(20, 9));
        assert_eq!(None, scale_indicator_column(0, 0));
    }

    #[test]
    fn dimmed() {
        assert_eq!(Rgb::new(0, 127, 127), Rgb::CHORD_NOTE.dimmed(127));
        assert_eq!(Rgb::OFF, Rgb::CHORD_ACTIVE.dimmed(0));
        assert_eq!(Rgb::CHORD_ACTIVE, Rgb::CHORD_ACTIVE.dimmed(255));
    }

    #[test]
    fn render_chord_highlights_the_tonic() {
        let mut matrix = MockLedMatrix::default();
        let notes = [Note::A3, Note::C4, Note::E4].into_iter().collect();
        matrix.render_chord(&notes, Note::C2);

        assert_eq!(Rgb::CHORD_NOTE, matrix.pixels[4][6]);
        assert_eq!(Rgb::TONIC, matrix.pixels[5][0]);
        assert_eq!(Rgb::CHORD_NOTE, matrix.pixels[5][2]);
        assert_eq!(3, matrix.lit_pixels());
    }

    #[test]
    fn scale_indicator_replaces_the_previous_one() {
        let mut matrix = MockLedMatrix::default();
        matrix.show_scale_indicator(0, 9);
        matrix.show_scale_indicator(8, 9);
        assert_eq!(Rgb::OFF, matrix.pixels[7][0]);
        assert_eq!(Rgb::SCALE_INDICATOR, matrix.pixels[7][7]);
        assert_eq!(1, matrix.lit_pixels());
    }
}
