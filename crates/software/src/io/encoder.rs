/// A rotary encoder with a push switch.
pub trait Encoder {
    /// Detents turned since the previous call; positive is clockwise. Consuming.
    fn delta(&mut self) -> i32;

    /// Returns `true` once after the switch was pushed.
    fn was_button_pressed(&mut self) -> bool;

    /// Absolute position in detents.
    fn value(&self) -> i32;

    /// Overwrites the absolute position without producing a delta.
    fn set_value(&mut self, value: i32);
}

/// Quadrature steps between two detents of a typical mechanical encoder.
pub const STEPS_PER_DETENT: i8 = 4;

/// Direction of travel for each (previous, current) pair of 2-bit gray-code states, indexed by
/// `previous << 2 | current`. Transitions which skip a state carry no reliable direction and count as zero.
const TRANSITIONS: [i8; 16] = [0, 1, -1, 0, -1, 0, 0, 1, 1, 0, 0, -1, 0, -1, 1, 0];

/// Decodes the two phase signals of a rotary encoder into detents.
///
/// Drivers sample both phases (from a poll loop or pin interrupts) and pass them to [`update`](Self::update); the
/// decoder accumulates the absolute position and the delta not yet read, which is all an [`Encoder`] implementation
/// needs besides its switch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct QuadratureDecoder {
    state: u8,
    steps: i8,
    value: i32,
    unread: i32,
}

impl QuadratureDecoder {
    /// Constructs a [`QuadratureDecoder`] whose phases currently read `a` and `b`.
    pub fn new(a: bool, b: bool) -> Self {
        Self {
            state: gray_code(a, b),
            ..Self::default()
        }
    }

    /// Feeds the decoder the current phase levels. Returns the detents completed by this transition (-1, 0, or 1).
    pub fn update(&mut self, a: bool, b: bool) -> i32 {
        let state = gray_code(a, b);
        let step = TRANSITIONS[usize::from(self.state << 2 | state)];
        self.state = state;
        self.steps += step;

        let detent = if self.steps >= STEPS_PER_DETENT {
            1
        } else if self.steps <= -STEPS_PER_DETENT {
            -1
        } else {
            return 0;
        };
        self.steps = 0;
        self.value = self.value.saturating_add(detent);
        self.unread = self.unread.saturating_add(detent);
        detent
    }

    /// Detents since the previous call. Consuming.
    pub fn take_delta(&mut self) -> i32 {
        core::mem::take(&mut self.unread)
    }

    /// Absolute position in detents.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Overwrites the absolute position and discards unread detents.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
        self.unread = 0;
    }
}

fn gray_code(a: bool, b: bool) -> u8 {
    u8::from(a) << 1 | u8::from(b)
}
