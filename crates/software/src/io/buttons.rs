use embassy_time::{Duration, Instant};

/// Indexed pushbuttons: 0-6 trigger chords, 7 is the function button.
///
/// Press, release, and long-press queries are edge-triggered and consuming: each returns `true` at most once per
/// physical edge. Out-of-range indices return `false`.
pub trait Buttons {
    /// Samples the buttons. Call once per loop iteration, before any query.
    fn poll(&mut self);

    /// Returns `true` once after the button at `index` went down.
    fn was_pressed(&mut self, index: usize) -> bool;

    /// Returns `true` once after the button at `index` came back up.
    fn was_released(&mut self, index: usize) -> bool;

    /// Returns `true` once after the button at `index` has been held for the long-press threshold.
    fn was_long_pressed(&mut self, index: usize) -> bool;

    /// Returns `true` while the button at `index` is held.
    fn is_pressed(&self, index: usize) -> bool;
}

/// How long a raw level must hold before it counts as a change.
pub const DEBOUNCE: Duration = Duration::from_millis(30);

/// How long a button must be held to count as a long press.
pub const LONG_PRESS: Duration = Duration::from_millis(600);

/// Turns the raw level of a single button, sampled repeatedly, into debounced edges.
///
/// A long press fires once per hold, as soon as the threshold is reached; the button still reports its release
/// afterwards. Drivers own one tracker per button, feed it from [`Buttons::poll`], and answer the queries from it.
#[derive(Clone, Copy, Debug)]
pub struct ButtonTracker {
    debounce: Duration,
    long_press: Duration,
    last_raw: bool,
    last_change: Instant,
    stable: bool,
    /// When the current hold began; `None` when released or once the long press has fired
    pressed_at: Option<Instant>,
    pressed: bool,
    released: bool,
    long_pressed: bool,
}

impl ButtonTracker {
    /// Constructs a [`ButtonTracker`] for a released button using the [`DEBOUNCE`] and [`LONG_PRESS`] timings.
    pub fn new(now: Instant) -> Self {
        Self::with_timing(now, DEBOUNCE, LONG_PRESS)
    }

    /// Constructs a [`ButtonTracker`] for a released button with custom timings.
    pub fn with_timing(now: Instant, debounce: Duration, long_press: Duration) -> Self {
        Self {
            debounce,
            long_press,
            last_raw: false,
            last_change: now,
            stable: false,
            pressed_at: None,
            pressed: false,
            released: false,
            long_pressed: false,
        }
    }

    /// Feeds the tracker the button's level at `now`; `true` means held down, whatever the wiring's polarity.
    pub fn update(&mut self, level: bool, now: Instant) {
        if level != self.last_raw {
            self.last_raw = level;
            self.last_change = now;
        }

        if level != self.stable && now.saturating_duration_since(self.last_change) >= self.debounce {
            self.stable = level;
            if level {
                self.pressed = true;
                self.pressed_at = Some(now);
            } else {
                self.released = true;
                self.pressed_at = None;
            }
        }

        if let Some(pressed_at) = self.pressed_at
            && now.saturating_duration_since(pressed_at) >= self.long_press
        {
            self.long_pressed = true;
            self.pressed_at = None;
        }
    }

    /// Whether the button is held, after debouncing.
    pub fn is_pressed(&self) -> bool {
        self.stable
    }

    /// Returns `true` once per press.
    pub fn was_pressed(&mut self) -> bool {
        core::mem::take(&mut self.pressed)
    }

    /// Returns `true` once per release.
    pub fn was_released(&mut self) -> bool {
        core::mem::take(&mut self.released)
    }

    /// Returns `true` once per hold that reaches the long-press threshold.
    pub fn was_long_pressed(&mut self) -> bool {
        core::mem::take(&mut self.long_pressed)
    }
}
