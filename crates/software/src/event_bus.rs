//! Provides a synchronous publish/subscribe [`EventBus`] through which the [UI state](crate::ui_state) announces its
//! transitions.
//!
//! Listeners are plain function pointers. Rather than capturing the state they act on, they receive it explicitly as
//! a context argument (`&mut C`) at emission time, so a listener can drive the hardware without the bus needing an
//! allocator or shared ownership. Delivery happens on the caller's stack, in registration order, before
//! [`emit`](EventBus::emit) returns.

use crate::{
    chord_engine::Chord,
    configuration::{ConfigError, Mode},
    theory::Scale,
};
use tinyvec::{ArrayVec, array_vec};
use wmidi::Note;

/// Number of listeners an [`EventBus`] can hold.
pub const MAX_SUBSCRIPTIONS: usize = 16;

/// State transitions announced by the UI state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event {
    /// A scale was selected.
    ScaleChanged {
        /// Position of the scale in [`Scale::ALL`].
        index: usize,
        /// The selected scale.
        scale: Scale,
    },
    /// A chord button was pressed.
    ChordTriggered {
        /// Zero-based scale degree of the chord.
        degree: u8,
        /// The chord, as computed when the button was pressed.
        chord: Chord,
        /// Root note of the key when the button was pressed.
        tonic: Note,
    },
    /// A chord button was released.
    ChordReleased {
        /// Zero-based scale degree of the chord.
        degree: u8,
    },
    /// The encoder was turned.
    EncoderChanged {
        /// Accumulated encoder position.
        value: i32,
        /// Detents turned since the last change; positive is clockwise.
        delta: i32,
    },
    /// The operating mode changed.
    ModeChanged {
        /// The new mode.
        mode: Mode,
    },
    /// The root note of the key changed.
    RootChanged {
        /// The new root note.
        root_note: Note,
    },
}

impl Event {
    /// Returns the [`EventKind`] listeners subscribe to in order to receive this event.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::ScaleChanged { .. } => EventKind::ScaleChanged,
            Self::ChordTriggered { .. } => EventKind::ChordTriggered,
            Self::ChordReleased { .. } => EventKind::ChordReleased,
            Self::EncoderChanged { .. } => EventKind::EncoderChanged,
            Self::ModeChanged { .. } => EventKind::ModeChanged,
            Self::RootChanged { .. } => EventKind::RootChanged,
        }
    }
}

/// Discriminant of an [`Event`], used as the subscription key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum EventKind {
    #[default]
    ScaleChanged,
    ChordTriggered,
    ChordReleased,
    EncoderChanged,
    ModeChanged,
    RootChanged,
}

/// A function invoked with the listener context and the emitted [`Event`].
pub type Listener<C> = fn(&mut C, &Event);

struct Subscription<C> {
    kind: EventKind,
    /// `Option` only so that [`tinyvec`] has a [`Default`]; registered subscriptions always hold a listener
    listener: Option<Listener<C>>,
}

impl<C> Default for Subscription<C> {
    fn default() -> Self {
        Self {
            kind: EventKind::default(),
            listener: None,
        }
    }
}

/// Registry of listeners keyed by [`EventKind`].
pub struct EventBus<C> {
    subscriptions: ArrayVec<[Subscription<C>; MAX_SUBSCRIPTIONS]>,
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> EventBus<C> {
    /// Construct an `EventBus` without listeners.
    pub fn new() -> Self {
        Self {
            subscriptions: array_vec!(),
        }
    }

    /// Registers `listener` for events of `kind`.
    ///
    /// Listeners are invoked in the order they were registered. Registering the same listener twice means it is
    /// invoked twice. Fails only when the bus already holds [`MAX_SUBSCRIPTIONS`] listeners.
    pub fn subscribe(&mut self, kind: EventKind, listener: Listener<C>) -> Result<(), ConfigError> {
        match self.subscriptions.try_push(Subscription {
            kind,
            listener: Some(listener),
        }) {
            None => Ok(()),
            Some(_) => Err(ConfigError::TooManySubscriptions),
        }
    }

    /// Removes the earliest registration of `listener` for `kind`, if there is one.
    pub fn unsubscribe(&mut self, kind: EventKind, listener: Listener<C>) {
        let position = self.subscriptions.iter().position(|subscription| {
            subscription.kind == kind
                && subscription
                    .listener
                    .is_some_and(|registered| core::ptr::fn_addr_eq(registered, listener))
        });
        if let Some(position) = position {
            self.subscriptions.remove(position);
        }
    }

    /// Number of registered listeners across all event kinds.
    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    /// Determine if no listeners are registered.
    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Synchronously invokes every listener registered for the event's kind, in registration order. Does nothing if
    /// there are none.
    pub fn emit(&self, context: &mut C, event: &Event) {
        let kind = event.kind();
        self.subscriptions
            .iter()
            .filter(|subscription| subscription.kind == kind)
            .filter_map(|subscription| subscription.listener)
            .for_each(|listener| listener(context, event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    type Log = Vec<(&'static str, Event)>;

    fn first(log: &mut Log, event: &Event) {
        log.push(("first", *event));
    }

    fn second(log: &mut Log, event: &Event) {
        log.push(("second", *event));
    }

    const RELEASED: Event = Event::ChordReleased { degree: 3 };

    #[test]
    fn emit_without_listeners_is_a_no_op() {
        let bus = EventBus::<Log>::new();
        let mut log = Log::new();
        bus.emit(&mut log, &RELEASED);
        assert!(log.is_empty());
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::ChordReleased, second).unwrap();
        bus.subscribe(EventKind::ChordReleased, first).unwrap();

        let mut log = Log::new();
        bus.emit(&mut log, &RELEASED);
        assert_eq!(
            vec![("second", RELEASED), ("first", RELEASED)],
            log,
            "Expected left but got right"
        );
    }

    #[test]
    fn listeners_only_receive_their_kind() {
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::ModeChanged, first).unwrap();

        let mut log = Log::new();
        bus.emit(&mut log, &RELEASED);
        assert!(log.is_empty());

        let mode_changed = Event::ModeChanged {
            mode: Mode::Settings,
        };
        bus.emit(&mut log, &mode_changed);
        assert_eq!(vec![("first", mode_changed)], log);
    }

    #[test]
    fn duplicate_subscriptions_are_invoked_twice() {
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::ChordReleased, first).unwrap();
        bus.subscribe(EventKind::ChordReleased, first).unwrap();

        let mut log = Log::new();
        bus.emit(&mut log, &RELEASED);
        assert_eq!(2, log.len());
    }

    #[test]
    fn unsubscribe_removes_one_registration() {
        let mut bus = EventBus::new();
        bus.subscribe(EventKind::ChordReleased, first).unwrap();
        bus.subscribe(EventKind::ChordReleased, second).unwrap();
        bus.subscribe(EventKind::ChordReleased, first).unwrap();
        bus.unsubscribe(EventKind::ChordReleased, first);
        bus.unsubscribe(EventKind::ModeChanged, second);
        assert_eq!(2, bus.len());

        let mut log = Log::new();
        bus.emit(&mut log, &RELEASED);
        assert_eq!(vec![("second", RELEASED), ("first", RELEASED)], log);
    }

    #[test]
    fn subscribe_fails_rather_than_overflow() {
        let mut bus = EventBus::<Log>::new();
        for _ in 0..MAX_SUBSCRIPTIONS {
            bus.subscribe(EventKind::ScaleChanged, first).unwrap();
        }
        assert_eq!(
            Err(ConfigError::TooManySubscriptions),
            bus.subscribe(EventKind::ScaleChanged, first)
        );
        assert_eq!(MAX_SUBSCRIPTIONS, bus.len());
    }
}
