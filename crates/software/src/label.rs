//! Provides [`Label`], a fixed-capacity string used for the text the core hands to a display.

use core::{fmt, ops::Deref};
use tinyvec::ArrayVec;

/// Capacity of a [`Label`] in bytes.
///
/// The longest text the core produces is a scale display name such as "C# Harmonic Minor"; anything shorter than
/// this fits without truncation. Displays that show fewer characters are expected to truncate on their own.
pub const LABEL_CAPACITY: usize = 32;

/// A short piece of UTF-8 text stored inline, without an allocator.
///
/// Labels are assembled with [`core::fmt::Write`]; a write that would overflow the capacity is rejected as a whole
/// rather than splitting a character.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Label {
    bytes: ArrayVec<[u8; LABEL_CAPACITY]>,
}

impl Label {
    /// Construct an empty `Label`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the text as a string slice.
    pub fn as_str(&self) -> &str {
        // only whole `&str`s are ever written, so the bytes are always valid UTF-8
        core::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

impl fmt::Write for Label {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.bytes.len() + s.len() > self.bytes.capacity() {
            return Err(fmt::Error);
        }
        self.bytes.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        let mut label = Self::new();
        let _ = fmt::Write::write_str(&mut label, s);
        label
    }
}

impl Deref for Label {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl PartialEq<str> for Label {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Label {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl PartialEq<Label> for str {
    fn eq(&self, other: &Label) -> bool {
        self == other.as_str()
    }
}

impl PartialEq<Label> for &str {
    fn eq(&self, other: &Label) -> bool {
        *self == other.as_str()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Label {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=str}", self.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write;

    #[test]
    fn write_appends() {
        let mut label = Label::new();
        write!(label, "{} {}", "C", "Major").unwrap();
        assert_eq!("C Major", label.as_str(), "Expected left but got right");
    }

    #[test]
    fn overflowing_write_is_rejected_whole() {
        let mut label = Label::from("C");
        let too_long = "x".repeat(LABEL_CAPACITY);
        assert!(label.write_str(&too_long).is_err());
        assert_eq!("C", label.as_str(), "Label should be left untouched");
    }

    #[test]
    fn compares_with_str() {
        assert_eq!(Label::from("vii°"), "vii°");
        assert_eq!("Dm", &*Label::from("Dm"));
    }
}
