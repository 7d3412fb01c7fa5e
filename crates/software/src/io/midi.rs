use crate::chord_engine::ChordNotes;
use wmidi::{Channel, ControlFunction, ControlValue, MidiMessage, Note, Velocity};

/// A sink for outgoing MIDI messages.
///
/// Implementors provide [`send`](Self::send); the remaining methods build the channel voice messages the instrument
/// uses and are rarely worth overriding. Sending is fire-and-forget: a transport that can fail handles (or logs) the
/// failure itself.
pub trait MidiOutput {
    /// Sends a single message.
    fn send(&mut self, message: MidiMessage<'static>);

    /// Sends a NoteOn.
    fn note_on(&mut self, channel: Channel, note: Note, velocity: Velocity) {
        self.send(MidiMessage::NoteOn(channel, note, velocity));
    }

    /// Sends a NoteOff. Pass [`U7::MIN`](wmidi::U7::MIN) when there's no meaningful release velocity.
    fn note_off(&mut self, channel: Channel, note: Note, velocity: Velocity) {
        self.send(MidiMessage::NoteOff(channel, note, velocity));
    }

    /// Sends a Control Change.
    fn control_change(&mut self, channel: Channel, control: ControlFunction, value: ControlValue) {
        self.send(MidiMessage::ControlChange(channel, control, value));
    }

    /// Sends a NoteOn for every note of the chord, in order.
    fn chord_on(&mut self, channel: Channel, notes: &ChordNotes, velocity: Velocity) {
        for note in notes.iter() {
            self.note_on(channel, note, velocity);
        }
    }

    /// Sends a NoteOff for every note of the chord, in order.
    fn chord_off(&mut self, channel: Channel, notes: &ChordNotes, velocity: Velocity) {
        for note in notes.iter() {
            self.note_off(channel, note, velocity);
        }
    }
}

/// Wraps a channel voice message in a USB-MIDI Event Packet for virtual cable `cable` (0-15).
///
/// The packet header carries the cable number in its high nibble and the Code Index Number in its low nibble; for
/// channel voice messages the latter equals the high nibble of the status byte. Unused data bytes are zero. Returns
/// `None` for messages other than channel voice messages, which this instrument never sends.
pub fn usb_midi_packet(cable: u8, message: &MidiMessage) -> Option<[u8; 4]> {
    let mut bytes = [0_u8; 3];
    if message.bytes_size() > bytes.len() {
        return None;
    }
    message.copy_to_slice(&mut bytes).ok()?;

    let status = bytes[0];
    if !(0x80..0xF0).contains(&status) {
        return None;
    }
    let code_index = status >> 4;
    Some([(cable & 0x0F) << 4 | code_index, bytes[0], bytes[1], bytes[2]])
}
