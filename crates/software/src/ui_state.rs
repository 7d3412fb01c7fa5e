//! Provides [`UiState`], the state machine which turns performer input (button edges, encoder turns) into musical
//! actions, and announces each transition on its [`EventBus`].

use crate::{
    Label,
    chord_engine::ChordEngine,
    configuration::{ConfigError, CycleConfig, Mode},
    event_bus::{Event, EventBus, EventKind, Listener},
    theory::SCALE_DEGREES,
};
use wmidi::Note;

/// Number of buttons with an LED of their own: seven chord buttons plus the function button.
pub const BUTTON_COUNT: usize = 8;

/// Name and numeral of the chord shown on the display.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChordLabel {
    /// e.g. `"Dm"`
    pub name: Label,
    /// e.g. `"ii"`
    pub numeral: Label,
}

/// Everything a display needs to render the current state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayData {
    /// Root and scale, e.g. `"C Major"`.
    pub scale_name: Label,
    /// The chord held most recently, if it hasn't been released.
    pub active_chord: Option<ChordLabel>,
    /// The operating mode.
    pub mode: Mode,
    /// Root note of the key.
    pub root_note: Note,
}

/// Interaction state of the instrument.
///
/// Transitions take the listener context `C` so that they can emit [`Event`]s synchronously; listeners registered
/// through [`subscribe`](Self::subscribe) run before the transition returns.
///
/// Chord triggering is monophonic from the display's point of view: only the most recently triggered degree is
/// active. Triggering a second chord does not release the first; its LED stays lit until its own release.
pub struct UiState<C> {
    engine: ChordEngine,
    bus: EventBus<C>,
    current_scale_index: usize,
    active_chord_degree: Option<u8>,
    encoder_value: i32,
    mode: Mode,
    led_states: [bool; BUTTON_COUNT],
    /// Set by any transition which may change what's displayed; cleared only by whoever redraws the display.
    display_dirty: bool,
}

impl<C> UiState<C> {
    /// Constructs a [`UiState`] around `engine`, in [`Mode::Play`], with no chord held and the display marked dirty so
    /// that it is drawn once.
    pub fn new(engine: ChordEngine) -> Self {
        Self {
            current_scale_index: engine.scale_index(),
            engine,
            bus: EventBus::new(),
            active_chord_degree: None,
            encoder_value: 0,
            mode: Mode::default(),
            led_states: [false; BUTTON_COUNT],
            display_dirty: true,
        }
    }

    /// Registers `listener` for events of `kind`; see [`EventBus::subscribe`].
    pub fn subscribe(&mut self, kind: EventKind, listener: Listener<C>) -> Result<(), ConfigError> {
        self.bus.subscribe(kind, listener)
    }

    /// Removes a registration; see [`EventBus::unsubscribe`].
    pub fn unsubscribe(&mut self, kind: EventKind, listener: Listener<C>) {
        self.bus.unsubscribe(kind, listener);
    }

    /// The [`ChordEngine`] backing this state.
    pub fn engine(&self) -> &ChordEngine {
        &self.engine
    }

    /// Mutable access to the [`ChordEngine`]. Changes made this way are not announced; follow them with
    /// [`set_scale`](Self::set_scale) or similar to notify listeners.
    pub fn engine_mut(&mut self) -> &mut ChordEngine {
        &mut self.engine
    }

    /// Position of the selected scale in [`Scale::ALL`](crate::theory::Scale::ALL).
    pub fn current_scale_index(&self) -> usize {
        self.current_scale_index
    }

    /// Degree of the chord triggered most recently, unless it has since been released.
    pub fn active_chord_degree(&self) -> Option<u8> {
        self.active_chord_degree
    }

    /// Accumulated encoder position.
    pub fn encoder_value(&self) -> i32 {
        self.encoder_value
    }

    /// The operating mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether each button's LED should be lit.
    pub fn led_states(&self) -> &[bool; BUTTON_COUNT] {
        &self.led_states
    }

    /// Whether the display may be out of date.
    pub fn display_dirty(&self) -> bool {
        self.display_dirty
    }

    /// Marks the display as up to date. Only the consumer which redraws the display should call this.
    pub fn clear_display_dirty(&mut self) {
        self.display_dirty = false;
    }

    /// Selects the scale at `index` (wrapping past the end of [`Scale::ALL`](crate::theory::Scale::ALL)) and emits [`Event::ScaleChanged`].
    pub fn set_scale(&mut self, index: usize, context: &mut C) {
        self.engine.set_scale_by_index(index);
        self.current_scale_index = self.engine.scale_index();
        self.display_dirty = true;
        info!("Scale changed to {}", self.engine.scale_name());
        self.bus.emit(
            context,
            &Event::ScaleChanged {
                index: self.current_scale_index,
                scale: self.engine.scale(),
            },
        );
    }

    /// Handles a chord button press: activates `degree` (reduced modulo 7), lights its LED, and emits
    /// [`Event::ChordTriggered`] with the chord computed from the current key.
    pub fn trigger_chord(&mut self, degree: u8, context: &mut C) {
        let degree = degree % SCALE_DEGREES;
        self.active_chord_degree = Some(degree);
        self.led_states[usize::from(degree)] = true;
        let chord = self.engine.chord(degree);
        self.display_dirty = true;
        debug!("Triggered degree {}", degree);
        self.bus.emit(
            context,
            &Event::ChordTriggered {
                degree,
                chord,
                tonic: self.engine.root_note(),
            },
        );
    }

    /// Handles a chord button release: turns off the LED of `degree` (reduced modulo 7) and emits
    /// [`Event::ChordReleased`]. The active degree is cleared only if it is `degree`; releasing a chord that has since
    /// been superseded leaves the newer one active.
    pub fn release_chord(&mut self, degree: u8, context: &mut C) {
        let degree = degree % SCALE_DEGREES;
        if self.active_chord_degree == Some(degree) {
            self.active_chord_degree = None;
        }
        self.led_states[usize::from(degree)] = false;
        debug!("Released degree {}", degree);
        self.bus.emit(context, &Event::ChordReleased { degree });
    }

    /// Handles an encoder turn of `delta` detents and emits [`Event::EncoderChanged`].
    ///
    /// In [`Mode::Play`] the scale then moves one step in the direction of `delta`, however large it is. In
    /// [`Mode::Settings`] the root note moves by `delta` semitones within its octave and [`Event::RootChanged`] is
    /// emitted.
    pub fn update_encoder(&mut self, delta: i32, context: &mut C) {
        self.encoder_value = self.encoder_value.saturating_add(delta);
        self.bus.emit(
            context,
            &Event::EncoderChanged {
                value: self.encoder_value,
                delta,
            },
        );

        match self.mode {
            Mode::Play => {
                let scale = match delta.signum() {
                    1 => self.engine.next_scale(),
                    -1 => self.engine.prev_scale(),
                    _ => return,
                };
                self.set_scale(scale.index(), context);
            }
            Mode::Settings => {
                if delta == 0 {
                    return;
                }
                self.engine.cycle_root_note(delta);
                self.display_dirty = true;
                info!("Root note changed to {}", u8::from(self.engine.root_note()));
                self.bus.emit(
                    context,
                    &Event::RootChanged {
                        root_note: self.engine.root_note(),
                    },
                );
            }
        }
    }

    /// Switches between [`Mode::Play`] and [`Mode::Settings`] and emits [`Event::ModeChanged`].
    pub fn toggle_mode(&mut self, context: &mut C) {
        self.set_mode(self.mode.cycle(), context);
    }

    /// Switches to `mode` and emits [`Event::ModeChanged`].
    pub fn set_mode(&mut self, mode: Mode, context: &mut C) {
        self.mode = mode;
        self.display_dirty = true;
        info!("Mode changed to {}", mode);
        self.bus.emit(context, &Event::ModeChanged { mode });
    }

    /// Collects what the display should show.
    ///
    /// The active chord is recomputed from the current key, so if the key changed while a chord is held, the display
    /// shows the chord the button would play now. (The notes actually sounding are those recorded when it was
    /// triggered.)
    pub fn display_data(&self) -> DisplayData {
        DisplayData {
            scale_name: self.engine.scale_display_name(),
            active_chord: self.active_chord_degree.map(|degree| {
                let chord = self.engine.chord(degree);
                ChordLabel {
                    name: chord.name(),
                    numeral: chord.numeral(),
                }
            }),
            mode: self.mode,
            root_note: self.engine.root_note(),
        }
    }
}
