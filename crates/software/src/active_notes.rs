//! Provides [`ActiveNotes`], which remembers exactly which notes were sent for each held chord so that its NoteOffs
//! match, even if the key changes while the chord is held.

use crate::{chord_engine::ChordNotes, theory::SCALE_DEGREES};

/// Snapshots of the sounding notes, one slot per scale degree.
///
/// A slot is filled when its chord is triggered and emptied when it's released. Because each degree has its own
/// slot, triggering one chord while another is held never loses track of the first one's notes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActiveNotes {
    slots: [ChordNotes; SCALE_DEGREES as usize],
}

#[cfg(feature = "defmt")]
impl defmt::Format for ActiveNotes {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ActiveNotes {{ ");
        for (degree, notes) in self.held() {
            defmt::write!(fmt, "{}: {} ", degree, notes);
        }
        defmt::write!(fmt, "}}");
    }
}

impl ActiveNotes {
    /// Construct an empty `ActiveNotes`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `notes` as the snapshot of `degree` (reduced modulo 7), returning whatever the slot held before.
    pub fn record(&mut self, degree: u8, notes: ChordNotes) -> ChordNotes {
        core::mem::replace(self.slot(degree), notes)
    }

    /// Empties the slot of `degree` (reduced modulo 7) and returns its snapshot, which is empty if nothing was
    /// recorded.
    pub fn take(&mut self, degree: u8) -> ChordNotes {
        core::mem::take(self.slot(degree))
    }

    /// Empties every slot, returning the non-empty snapshots in degree order.
    pub fn drain(&mut self) -> impl Iterator<Item = ChordNotes> + '_ {
        self.slots
            .iter_mut()
            .map(core::mem::take)
            .filter(|notes| !notes.is_empty())
    }

    /// Determine if no notes are recorded.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(ChordNotes::is_empty)
    }

    /// Returns an [`Iterator`] over the degrees with a recorded snapshot, in degree order.
    pub fn held(&self) -> impl Iterator<Item = (u8, &ChordNotes)> {
        (0..SCALE_DEGREES)
            .zip(self.slots.iter())
            .filter(|(_, notes)| !notes.is_empty())
    }

    fn slot(&mut self, degree: u8) -> &mut ChordNotes {
        &mut self.slots[usize::from(degree % SCALE_DEGREES)]
    }
}
