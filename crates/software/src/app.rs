//! Provides [`ChordMachine`], the application loop which ties the [UI state](crate::ui_state) to a
//! [`HardwarePort`].
//!
//! Each call to [`ChordMachine::update`] runs one iteration: it reads the inputs, applies them as UI transitions, and
//! refreshes whatever outputs those transitions made stale. MIDI is not batched; it is sent from the event listeners,
//! synchronously, while the transition that caused it is still running.

use crate::{
    Label,
    active_notes::ActiveNotes,
    chord_engine::ChordEngine,
    configuration::{Config, ConfigError, CycleConfig, Mode},
    event_bus::{Event, EventKind},
    io::{Buttons, Display, Encoder, HardwarePort, LedMatrix, MidiOutput, Rgb},
    theory::{self, SCALE_DEGREES, Scale},
    ui_state::UiState,
};
use core::fmt::Write;
use wmidi::{Channel, Note, U7, Velocity};

/// Index of the function button, just past the chord buttons.
pub const FUNCTION_BUTTON: usize = SCALE_DEGREES as usize;

/// The output peripherals, along with the bookkeeping the event listeners need. This is the context every listener
/// receives.
pub struct Outputs<D, L, M> {
    display: D,
    led_matrix: L,
    midi_output: M,
    channel: Channel,
    velocity: Velocity,
    active_notes: ActiveNotes,
    /// Root of the key, for highlighting it in chord renders
    tonic: Note,
    scale_index: usize,
    mode_color: Rgb,
    leds_dirty: bool,
}

impl<D, L, M> Outputs<D, L, M> {
    /// The text display.
    pub fn display(&self) -> &D {
        &self.display
    }

    /// The indicator lights.
    pub fn led_matrix(&self) -> &L {
        &self.led_matrix
    }

    /// The MIDI destination.
    pub fn midi_output(&self) -> &M {
        &self.midi_output
    }

    /// Notes which have been sent and not yet released.
    pub fn active_notes(&self) -> &ActiveNotes {
        &self.active_notes
    }
}

impl<D, L: LedMatrix, M> Outputs<D, L, M> {
    /// Redraws every LED from the bookkeeping: the mode LED, the scale marker, and the held chords.
    fn repaint_leds(&mut self) {
        self.led_matrix.clear();
        self.led_matrix.set_button_led(FUNCTION_BUTTON, self.mode_color);
        self.led_matrix
            .show_scale_indicator(self.scale_index, Scale::COUNT.into());
        for (degree, notes) in self.active_notes.held() {
            self.led_matrix
                .set_button_led(degree.into(), Rgb::CHORD_ACTIVE);
            self.led_matrix.render_chord(notes, self.tonic);
        }
        self.leds_dirty = true;
    }
}

fn mode_color(mode: Mode) -> Rgb {
    match mode {
        Mode::Play => Rgb::MODE_PLAY,
        Mode::Settings => Rgb::MODE_SETTINGS,
    }
}

fn on_chord_triggered<D, L: LedMatrix, M: MidiOutput>(outputs: &mut Outputs<D, L, M>, event: &Event) {
    let Event::ChordTriggered {
        degree,
        chord,
        tonic,
    } = *event
    else {
        return;
    };

    let notes = *chord.notes();
    // a retrigger without a release in between must not leave the earlier notes hanging
    let previous = outputs.active_notes.record(degree, notes);
    outputs
        .midi_output
        .chord_off(outputs.channel, &previous, U7::MIN);
    outputs
        .midi_output
        .chord_on(outputs.channel, &notes, outputs.velocity);
    info!("Playing {} ({})", chord.name(), chord.numeral());

    outputs.tonic = tonic;
    outputs
        .led_matrix
        .set_button_led(degree.into(), Rgb::CHORD_ACTIVE);
    outputs.led_matrix.render_chord(&notes, tonic);
    outputs.leds_dirty = true;
}

fn on_chord_released<D, L: LedMatrix, M: MidiOutput>(outputs: &mut Outputs<D, L, M>, event: &Event) {
    let Event::ChordReleased { degree } = *event else {
        return;
    };

    let notes = outputs.active_notes.take(degree);
    outputs
        .midi_output
        .chord_off(outputs.channel, &notes, U7::MIN);
    debug!("Released degree {}", degree);

    // a released chord's pixels may overlap those of chords still held, so redraw rather than unset them
    outputs.repaint_leds();
}

fn on_scale_changed<D, L: LedMatrix, M>(outputs: &mut Outputs<D, L, M>, event: &Event) {
    let Event::ScaleChanged { index, .. } = *event else {
        return;
    };
    outputs.scale_index = index;
    outputs
        .led_matrix
        .show_scale_indicator(index, Scale::COUNT.into());
    outputs.leds_dirty = true;
}

fn on_root_changed<D, L, M>(outputs: &mut Outputs<D, L, M>, event: &Event) {
    if let Event::RootChanged { root_note } = *event {
        outputs.tonic = root_note;
    }
}

fn on_mode_changed<D, L: LedMatrix, M>(outputs: &mut Outputs<D, L, M>, event: &Event) {
    let Event::ModeChanged { mode } = *event else {
        return;
    };
    outputs.mode_color = mode_color(mode);
    outputs
        .led_matrix
        .set_button_led(FUNCTION_BUTTON, outputs.mode_color);
    outputs.leds_dirty = true;
}

/// The Chord Machine application.
///
/// Owns the [`HardwarePort`] it was built with. When the `ChordMachine` is dropped, or [`cleanup`](Self::cleanup) is
/// called, every sounding note is released and the display and LEDs are blanked.
pub struct ChordMachine<B, E, D, L, M>
where
    B: Buttons,
    E: Encoder,
    D: Display,
    L: LedMatrix,
    M: MidiOutput,
{
    buttons: B,
    encoder: E,
    outputs: Outputs<D, L, M>,
    ui_state: UiState<Outputs<D, L, M>>,
    config: Config,
    /// Set when the function button's long press has fired, so that its release isn't taken as a short press
    long_press_handled: bool,
}

impl<B, E, D, L, M> ChordMachine<B, E, D, L, M>
where
    B: Buttons,
    E: Encoder,
    D: Display,
    L: LedMatrix,
    M: MidiOutput,
{
    /// Constructs a [`ChordMachine`], lights the mode LED, and draws the display.
    ///
    /// Fails if `config` or the built-in scale tables are invalid; no output is touched in that case.
    pub fn new(port: HardwarePort<B, E, D, L, M>, config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        theory::validate_scale_tables()?;

        let HardwarePort {
            buttons,
            encoder,
            display,
            led_matrix,
            midi_output,
        } = port;

        let engine = ChordEngine::new(config.root_note, config.scale);
        let mut ui_state = UiState::new(engine);
        ui_state.subscribe(EventKind::ChordTriggered, on_chord_triggered::<D, L, M>)?;
        ui_state.subscribe(EventKind::ChordReleased, on_chord_released::<D, L, M>)?;
        ui_state.subscribe(EventKind::ScaleChanged, on_scale_changed::<D, L, M>)?;
        ui_state.subscribe(EventKind::RootChanged, on_root_changed::<D, L, M>)?;
        ui_state.subscribe(EventKind::ModeChanged, on_mode_changed::<D, L, M>)?;

        let outputs = Outputs {
            display,
            led_matrix,
            midi_output,
            channel: config.midi_channel,
            velocity: config.velocity,
            active_notes: ActiveNotes::new(),
            tonic: ui_state.engine().root_note(),
            scale_index: ui_state.current_scale_index(),
            mode_color: mode_color(ui_state.mode()),
            leds_dirty: false,
        };

        let mut chord_machine = Self {
            buttons,
            encoder,
            outputs,
            ui_state,
            config,
            long_press_handled: false,
        };
        chord_machine.outputs.repaint_leds();
        chord_machine.flush_outputs();
        info!(
            "Chord Machine ready on MIDI channel {}",
            chord_machine.config.midi_channel.number()
        );
        Ok(chord_machine)
    }

    /// Runs one iteration of the loop. Call it frequently; it never blocks.
    pub fn update(&mut self) {
        self.buttons.poll();

        let delta = self.encoder.delta();
        if delta != 0 {
            self.ui_state.update_encoder(delta, &mut self.outputs);
        }

        if self.encoder.was_button_pressed() {
            self.ui_state.toggle_mode(&mut self.outputs);
            self.encoder.set_value(0);
        }

        for degree in 0..SCALE_DEGREES {
            let index = usize::from(degree);
            if self.buttons.was_pressed(index) {
                self.ui_state.trigger_chord(degree, &mut self.outputs);
            }
            if self.buttons.was_released(index) {
                self.ui_state.release_chord(degree, &mut self.outputs);
            }
        }

        if self.buttons.was_long_pressed(FUNCTION_BUTTON) {
            self.reset();
            self.long_press_handled = true;
        }
        if self.buttons.was_released(FUNCTION_BUTTON) && !core::mem::take(&mut self.long_press_handled) {
            self.ui_state.toggle_mode(&mut self.outputs);
        }

        self.flush_outputs();
    }

    /// Releases every sounding note, then blanks and flushes the LEDs and the display. Safe to call more than once;
    /// it also runs when the `ChordMachine` is dropped.
    pub fn cleanup(&mut self) {
        let Outputs {
            midi_output,
            active_notes,
            channel,
            ..
        } = &mut self.outputs;
        for notes in active_notes.drain() {
            midi_output.chord_off(*channel, &notes, U7::MIN);
        }

        self.outputs.led_matrix.clear();
        self.outputs.led_matrix.flush();
        self.outputs.leds_dirty = false;
        self.outputs.display.clear();
        self.outputs.display.flush();
    }

    /// Sets the velocity of the NoteOns which follow, clamped to 0-127.
    pub fn set_velocity(&mut self, velocity: u8) {
        let velocity = velocity.min(127);
        self.outputs.velocity = U7::from_u8_lossy(velocity);
        debug!("Velocity set to {}", velocity);
    }

    /// Sets the zero-based MIDI channel, clamped to 0-15. Chords held at the time are moved to the new channel, so
    /// that every NoteOff goes out on the channel of its NoteOn.
    pub fn set_midi_channel(&mut self, channel: u8) {
        let Ok(channel) = Channel::from_index(channel.min(15)) else {
            return;
        };
        let Outputs {
            midi_output,
            active_notes,
            channel: current,
            velocity,
            ..
        } = &mut self.outputs;
        if channel == *current {
            return;
        }

        for (_, notes) in active_notes.held() {
            midi_output.chord_off(*current, notes, U7::MIN);
            midi_output.chord_on(channel, notes, *velocity);
        }
        *current = channel;
        info!("MIDI channel set to {}", channel.number());
    }

    /// The interaction state.
    pub fn ui_state(&self) -> &UiState<Outputs<D, L, M>> {
        &self.ui_state
    }

    /// The output peripherals and their bookkeeping.
    pub fn outputs(&self) -> &Outputs<D, L, M> {
        &self.outputs
    }

    /// The buttons, e.g. for a driver which needs feeding from outside the loop.
    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    /// The encoder, e.g. for a driver which needs feeding from outside the loop.
    pub fn encoder_mut(&mut self) -> &mut E {
        &mut self.encoder
    }

    /// Returns the key and scale to those in the [`Config`].
    fn reset(&mut self) {
        info!("Resetting to the configured key");
        self.ui_state
            .engine_mut()
            .set_root_note(self.config.root_note);
        self.outputs.tonic = self.config.root_note;
        self.ui_state
            .set_scale(self.config.scale.index(), &mut self.outputs);
    }

    fn flush_outputs(&mut self) {
        if self.ui_state.display_dirty() {
            self.redraw_display();
            self.ui_state.clear_display_dirty();
        }
        if core::mem::take(&mut self.outputs.leds_dirty) {
            self.outputs.led_matrix.flush();
        }
    }

    fn redraw_display(&mut self) {
        let data = self.ui_state.display_data();
        let display = &mut self.outputs.display;

        display.clear();
        display.show_scale(&data.scale_name);
        display.show_mode(data.mode);
        if let Some(chord) = data.active_chord {
            display.show_chord(&chord.name, &chord.numeral);
        }
        if data.mode == Mode::Settings {
            display.show_message(&root_label(data.root_note));
        }
        display.flush();
    }
}

impl<B, E, D, L, M> Drop for ChordMachine<B, E, D, L, M>
where
    B: Buttons,
    E: Encoder,
    D: Display,
    L: LedMatrix,
    M: MidiOutput,
{
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Names the root note with its octave in scientific pitch notation, e.g. `"Root: C4"`.
fn root_label(root_note: Note) -> Label {
    let pitch = u8::from(root_note);
    let octave = i16::from(pitch / theory::NOTES_PER_OCTAVE) - 1;
    let mut label = Label::new();
    let _ = write!(label, "Root: {}{}", theory::note_name(root_note), octave);
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::mock::{
        MockButtons, MockDisplay, MockEncoder, MockLedMatrix, MockMidiOutput, Screen, mock_port,
    };
    use std::{rc::Rc, vec::Vec};
    use wmidi::MidiMessage;

    type MockChordMachine = ChordMachine<MockButtons, MockEncoder, MockDisplay, MockLedMatrix, MockMidiOutput>;

    const VELOCITY: Velocity = U7::from_u8_lossy(100);

    fn chord_machine() -> MockChordMachine {
        ChordMachine::new(mock_port(), Config::default()).unwrap()
    }

    fn sent(chord_machine: &MockChordMachine) -> Vec<MidiMessage<'static>> {
        chord_machine.outputs().midi_output().messages()
    }

    fn note_ons_on(channel: Channel, pitches: &[u8]) -> Vec<MidiMessage<'static>> {
        pitches
            .iter()
            .map(|&pitch| MidiMessage::NoteOn(channel, Note::from_u8_lossy(pitch), VELOCITY))
            .collect()
    }

    fn note_offs_on(channel: Channel, pitches: &[u8]) -> Vec<MidiMessage<'static>> {
        pitches
            .iter()
            .map(|&pitch| MidiMessage::NoteOff(channel, Note::from_u8_lossy(pitch), U7::MIN))
            .collect()
    }

    fn note_ons(pitches: &[u8]) -> Vec<MidiMessage<'static>> {
        note_ons_on(Channel::Ch1, pitches)
    }

    fn note_offs(pitches: &[u8]) -> Vec<MidiMessage<'static>> {
        note_offs_on(Channel::Ch1, pitches)
    }

    fn press(chord_machine: &mut MockChordMachine, index: usize) {
        chord_machine.buttons_mut().simulate_press(index);
        chord_machine.update();
    }

    fn release(chord_machine: &mut MockChordMachine, index: usize) {
        chord_machine.buttons_mut().simulate_release(index);
        chord_machine.update();
    }

    #[test]
    fn new_draws_initial_state() {
        let chord_machine = chord_machine();
        let outputs = chord_machine.outputs();

        let screen = &outputs.display().shown;
        assert_eq!(Some("C Major".into()), screen.scale);
        assert_eq!(Some(Mode::Play), screen.mode);
        assert_eq!(None, screen.chord);
        assert!(!chord_machine.ui_state().display_dirty());

        assert_eq!(Rgb::MODE_PLAY, outputs.led_matrix().button_leds[FUNCTION_BUTTON]);
        assert_eq!(Rgb::SCALE_INDICATOR, outputs.led_matrix().pixels[7][0]);
        assert_eq!(1, outputs.led_matrix().flushes);
        assert!(sent(&chord_machine).is_empty());
    }

    #[test]
    fn press_and_release_play_a_chord() {
        let mut chord_machine = chord_machine();

        press(&mut chord_machine, 0);
        assert_eq!(note_ons(&[60, 64, 67]), sent(&chord_machine), "Expected left but got right");
        let outputs = chord_machine.outputs();
        assert_eq!(Rgb::CHORD_ACTIVE, outputs.led_matrix().button_leds[0]);
        assert_eq!(Rgb::TONIC, outputs.led_matrix().pixels[5][0]);
        assert_eq!(
            Some(("C".into(), "I".into())),
            outputs.display().shown.chord
        );

        release(&mut chord_machine, 0);
        assert_eq!(note_offs(&[60, 64, 67]), sent(&chord_machine)[3..]);
        let outputs = chord_machine.outputs();
        assert_eq!(Rgb::OFF, outputs.led_matrix().button_leds[0]);
        assert_eq!(Rgb::MODE_PLAY, outputs.led_matrix().button_leds[FUNCTION_BUTTON]);
        assert_eq!(1, outputs.led_matrix().lit_pixels(), "Only the scale marker should remain");
        assert!(outputs.active_notes().is_empty());
    }

    #[test]
    fn release_sends_the_notes_that_were_played() {
        let mut chord_machine = chord_machine();

        press(&mut chord_machine, 0);
        chord_machine.encoder_mut().simulate_turn(1);
        chord_machine.update();
        assert_eq!(Scale::NaturalMinor, chord_machine.ui_state().engine().scale());
        assert_eq!(
            Some(("Cm".into(), "i".into())),
            chord_machine.outputs().display().shown.chord,
            "Display should follow the new key"
        );

        release(&mut chord_machine, 0);
        assert_eq!(note_offs(&[60, 64, 67]), sent(&chord_machine)[3..]);
    }

    #[test]
    fn second_chord_does_not_orphan_the_first() {
        let mut chord_machine = chord_machine();

        press(&mut chord_machine, 0);
        press(&mut chord_machine, 4);
        assert_eq!(6, sent(&chord_machine).len(), "No NoteOffs should be sent yet");

        release(&mut chord_machine, 0);
        assert_eq!(note_offs(&[60, 64, 67]), sent(&chord_machine)[6..]);
        let leds = chord_machine.outputs().led_matrix();
        assert_eq!(Rgb::CHORD_ACTIVE, leds.button_leds[4], "Held chord should stay lit");
        assert_eq!(Rgb::CHORD_NOTE, leds.pixels[5][4]);
        assert_eq!(Rgb::OFF, leds.pixels[5][0], "Released chord's pixels should be gone");

        release(&mut chord_machine, 4);
        assert_eq!(note_offs(&[67, 71, 74]), sent(&chord_machine)[9..]);
    }

    #[test]
    fn encoder_steps_scales_in_play_mode() {
        let mut chord_machine = chord_machine();
        chord_machine.encoder_mut().simulate_turn(-3);
        chord_machine.update();

        assert_eq!(Scale::Locrian, chord_machine.ui_state().engine().scale());
        assert_eq!(Some("C Locrian".into()), chord_machine.outputs().display().shown.scale);
        assert_eq!(Rgb::SCALE_INDICATOR, chord_machine.outputs().led_matrix().pixels[7][7]);
    }

    #[test]
    fn encoder_button_toggles_mode() {
        let mut chord_machine = chord_machine();
        chord_machine.encoder_mut().simulate_turn(2);
        chord_machine.encoder_mut().simulate_button_press();
        chord_machine.update();

        assert_eq!(Mode::Settings, chord_machine.ui_state().mode());
        assert_eq!(0, chord_machine.encoder_mut().value(), "Encoder should be zeroed");
        let outputs = chord_machine.outputs();
        assert_eq!(Rgb::MODE_SETTINGS, outputs.led_matrix().button_leds[FUNCTION_BUTTON]);
        assert_eq!(Some(Mode::Settings), outputs.display().shown.mode);
        assert_eq!(Some("Root: C4".into()), outputs.display().shown.message);
    }

    #[test]
    fn encoder_moves_root_in_settings_mode() {
        let mut chord_machine = chord_machine();
        chord_machine.encoder_mut().simulate_button_press();
        chord_machine.update();

        chord_machine.encoder_mut().simulate_turn(2);
        chord_machine.update();
        assert_eq!(Note::D4, chord_machine.ui_state().engine().root_note());
        assert_eq!(Some("D Major".into()), chord_machine.outputs().display().shown.scale);

        press(&mut chord_machine, 0);
        assert_eq!(note_ons(&[62, 66, 69]), sent(&chord_machine));
        assert_eq!(Rgb::TONIC, chord_machine.outputs().led_matrix().pixels[5][1]);
    }

    #[test]
    fn function_button_short_press_toggles_mode() {
        let mut chord_machine = chord_machine();
        press(&mut chord_machine, FUNCTION_BUTTON);
        assert_eq!(Mode::Play, chord_machine.ui_state().mode(), "Mode should change on release");

        release(&mut chord_machine, FUNCTION_BUTTON);
        assert_eq!(Mode::Settings, chord_machine.ui_state().mode());
    }

    #[test]
    fn function_button_long_press_resets_key() {
        let mut chord_machine = chord_machine();
        chord_machine.encoder_mut().simulate_turn(1);
        chord_machine.update();
        chord_machine.encoder_mut().simulate_button_press();
        chord_machine.update();
        chord_machine.encoder_mut().simulate_turn(5);
        chord_machine.update();
        assert_eq!(Note::F4, chord_machine.ui_state().engine().root_note());

        press(&mut chord_machine, FUNCTION_BUTTON);
        chord_machine.buttons_mut().simulate_long_press(FUNCTION_BUTTON);
        chord_machine.update();
        release(&mut chord_machine, FUNCTION_BUTTON);

        let ui_state = chord_machine.ui_state();
        assert_eq!(Note::C4, ui_state.engine().root_note());
        assert_eq!(Scale::Major, ui_state.engine().scale());
        assert_eq!(0, ui_state.current_scale_index());
        assert_eq!(Mode::Settings, ui_state.mode(), "Long press must not also toggle the mode");
        assert_eq!(Some("C Major".into()), chord_machine.outputs().display().shown.scale);
    }

    #[test]
    fn buttons_are_polled_every_update() {
        let mut chord_machine = chord_machine();
        chord_machine.update();
        chord_machine.update();
        assert_eq!(2, chord_machine.buttons_mut().polls);
    }

    #[test]
    fn idle_update_flushes_nothing() {
        let mut chord_machine = chord_machine();
        chord_machine.update();
        let outputs = chord_machine.outputs();
        assert_eq!(1, outputs.display().flushes);
        assert_eq!(1, outputs.led_matrix().flushes);
    }

    #[test]
    fn cleanup_releases_every_held_chord_once() {
        let mut chord_machine = chord_machine();
        press(&mut chord_machine, 0);
        press(&mut chord_machine, 4);

        chord_machine.cleanup();
        chord_machine.cleanup();

        let mut expected = note_ons(&[60, 64, 67]);
        expected.extend(note_ons(&[67, 71, 74]));
        expected.extend(note_offs(&[60, 64, 67]));
        expected.extend(note_offs(&[67, 71, 74]));
        assert_eq!(expected, sent(&chord_machine));

        let outputs = chord_machine.outputs();
        assert_eq!(0, outputs.led_matrix().lit_pixels());
        assert_eq!(Rgb::OFF, outputs.led_matrix().button_leds[FUNCTION_BUTTON]);
        assert_eq!(Screen::default(), outputs.display().shown);
    }

    #[test]
    fn dropping_releases_held_chords() {
        let mut chord_machine = chord_machine();
        press(&mut chord_machine, 0);
        press(&mut chord_machine, 4);
        let log = Rc::clone(&chord_machine.outputs().midi_output().sent);

        drop(chord_machine);

        let mut expected = note_ons(&[60, 64, 67]);
        expected.extend(note_ons(&[67, 71, 74]));
        expected.extend(note_offs(&[60, 64, 67]));
        expected.extend(note_offs(&[67, 71, 74]));
        assert_eq!(expected, *log.borrow(), "Expected left but got right");
    }

    #[test]
    fn velocity_changes_while_running() {
        let mut chord_machine = chord_machine();
        chord_machine.set_velocity(200);
        press(&mut chord_machine, 0);
        assert_eq!(
            vec![
                MidiMessage::NoteOn(Channel::Ch1, Note::C4, U7::MAX),
                MidiMessage::NoteOn(Channel::Ch1, Note::E4, U7::MAX),
                MidiMessage::NoteOn(Channel::Ch1, Note::G4, U7::MAX),
            ],
            sent(&chord_machine),
            "Velocity should be clamped to 127"
        );

        chord_machine.set_velocity(64);
        press(&mut chord_machine, 1);
        assert_eq!(
            MidiMessage::NoteOn(Channel::Ch1, Note::D4, U7::from_u8_lossy(64)),
            sent(&chord_machine)[3]
        );
    }

    #[test]
    fn midi_channel_changes_while_running() {
        let mut chord_machine = chord_machine();
        press(&mut chord_machine, 0);

        chord_machine.set_midi_channel(0);
        assert_eq!(3, sent(&chord_machine).len(), "Same channel should change nothing");

        chord_machine.set_midi_channel(99);
        release(&mut chord_machine, 0);
        press(&mut chord_machine, 4);

        let mut expected = note_ons(&[60, 64, 67]);
        expected.extend(note_offs(&[60, 64, 67]));
        expected.extend(note_ons_on(Channel::Ch16, &[60, 64, 67]));
        expected.extend(note_offs_on(Channel::Ch16, &[60, 64, 67]));
        expected.extend(note_ons_on(Channel::Ch16, &[67, 71, 74]));
        assert_eq!(expected, sent(&chord_machine), "Expected left but got right");
    }

    #[test]
    fn root_label() {
        assert_eq!("Root: C4", super::root_label(Note::C4));
        assert_eq!("Root: C-1", super::root_label(Note::CMinus1));
    }
}
