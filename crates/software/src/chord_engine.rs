//! Provides the [`ChordEngine`], which knows the current key (root note and scale) and builds the diatonic chords that
//! the chord buttons play.

mod chord;
pub use chord::*;

use crate::{
    Label,
    configuration::CycleConfig,
    theory::{NOTES_PER_OCTAVE, SCALE_DEGREES, Scale, chord_quality_for_degree, pitch_class_name},
};
use core::fmt::Write;
use wmidi::{Note, U7};

/// Lowest octave of the root note (C2 is MIDI note 24).
pub const OCTAVE_MIN: u8 = 2;

/// Highest octave of the root note (C9 is MIDI note 108).
pub const OCTAVE_MAX: u8 = 9;

/// Converts a raw pitch into a [`Note`], saturating at the top of the MIDI range.
fn saturating_note(pitch: u16) -> Note {
    Note::from(U7::from_u8_lossy(pitch.min(127) as u8))
}

/// Builds diatonic chords for the current key.
///
/// The root note is kept as a pitch class and an octave so that each can be changed independently: moving the root
/// from C to D keeps the octave, and moving the octave keeps the pitch class.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChordEngine {
    /// 0-11, where 0 is C
    root_note_class: u8,
    /// MIDI octave, i.e. the root note divided by 12
    octave: u8,
    scale: Scale,
}

impl Default for ChordEngine {
    fn default() -> Self {
        Self::new(Note::C4, Scale::default())
    }
}

impl ChordEngine {
    /// Constructs a [`ChordEngine`] in the key of `root_note` `scale`. A root outside [`OCTAVE_MIN`]..=[`OCTAVE_MAX`]
    /// keeps its pitch class and is moved into the nearest octave of that range.
    pub fn new(root_note: Note, scale: Scale) -> Self {
        let root_note = u8::from(root_note);
        Self {
            root_note_class: root_note % NOTES_PER_OCTAVE,
            octave: (root_note / NOTES_PER_OCTAVE).clamp(OCTAVE_MIN, OCTAVE_MAX),
            scale,
        }
    }

    fn root_pitch(&self) -> u16 {
        u16::from(self.octave) * u16::from(NOTES_PER_OCTAVE) + u16::from(self.root_note_class)
    }

    /// Returns the root note of the key.
    pub fn root_note(&self) -> Note {
        saturating_note(self.root_pitch())
    }

    /// Returns the pitch class of the root note, where 0 is C.
    pub fn root_note_class(&self) -> u8 {
        self.root_note_class
    }

    /// Returns the selected [`Scale`].
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Returns the identifier of the selected scale, e.g. `"major"`.
    pub fn scale_name(&self) -> &'static str {
        self.scale.name()
    }

    /// Returns the position of the selected scale in [`Scale::ALL`].
    pub fn scale_index(&self) -> usize {
        self.scale.index()
    }

    /// Moves the root to `root_note`, changing both pitch class and octave.
    pub fn set_root_note(&mut self, root_note: Note) {
        let scale = self.scale;
        *self = Self::new(root_note, scale);
    }

    /// Moves the root note by `delta` semitones, wrapping within the octave (B + 1 is C of the same octave).
    pub fn cycle_root_note(&mut self, delta: i32) {
        let note_class = (i32::from(self.root_note_class) + delta).rem_euclid(NOTES_PER_OCTAVE.into());
        self.root_note_class = note_class as u8;
    }

    /// Builds the diatonic triad on `degree` of the current key. `degree` is reduced modulo 7, so this never fails.
    pub fn chord(&self, degree: u8) -> Chord {
        let degree = degree % SCALE_DEGREES;
        let quality = chord_quality_for_degree(self.scale, degree);
        let chord_root = self.root_pitch() + u16::from(self.scale.degrees()[usize::from(degree)]);

        let notes = quality
            .offsets()
            .iter()
            .map(|&offset| saturating_note(chord_root + u16::from(offset)))
            .collect();

        Chord::new(degree, saturating_note(chord_root), quality, notes)
    }

    /// Builds the diatonic triads on degrees 0 through 6, in order.
    pub fn all_chords_in_scale(&self) -> [Chord; SCALE_DEGREES as usize] {
        core::array::from_fn(|degree| self.chord(degree as u8))
    }

    /// Selects `scale`.
    pub fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    /// Selects the scale with the given identifier. Unknown identifiers leave the selection unchanged.
    pub fn set_scale_by_name(&mut self, name: &str) {
        match Scale::from_name(name) {
            Some(scale) => self.scale = scale,
            None => debug!("Ignoring unknown scale {}", name),
        }
    }

    /// Selects the scale at `index` of [`Scale::ALL`], wrapping indices past the end.
    pub fn set_scale_by_index(&mut self, index: usize) {
        self.scale = Scale::nth(index);
    }

    /// Selects the next scale, wrapping around after the last one, and returns it.
    pub fn next_scale(&mut self) -> Scale {
        self.scale = self.scale.cycle();
        self.scale
    }

    /// Selects the previous scale, wrapping around before the first one, and returns it.
    pub fn prev_scale(&mut self) -> Scale {
        self.scale = self.scale.cycle_back();
        self.scale
    }

    /// Returns the key as shown to the performer, e.g. `"C Major"` or `"F# Natural Minor"`.
    pub fn scale_display_name(&self) -> Label {
        let mut label = Label::new();
        let _ = write!(
            label,
            "{} {}",
            pitch_class_name(self.root_note_class),
            self.scale.display_name()
        );
        label
    }
}
