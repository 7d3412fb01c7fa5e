use crate::configuration::Mode;

/// A small text display.
///
/// Text arrives untruncated; a display narrower than the text truncates it. Changes may be buffered until
/// [`flush`](Self::flush).
pub trait Display {
    /// Shows the key, e.g. `"C Major"`.
    fn show_scale(&mut self, text: &str);

    /// Shows a chord's name and roman numeral, e.g. `"Dm"` and `"ii"`.
    fn show_chord(&mut self, name: &str, numeral: &str);

    /// Shows free-form status text.
    fn show_message(&mut self, text: &str);

    /// Shows which [`Mode`] the instrument is in.
    fn show_mode(&mut self, mode: Mode);

    /// Blanks the display.
    fn clear(&mut self);

    /// Pushes buffered changes to the screen.
    fn flush(&mut self);
}
