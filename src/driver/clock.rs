//! Machine-time sources for the driver.

use std::time::{Duration, Instant};

/// Source of machine time, sampled once per iteration.
pub trait Clock {
    /// Current machine time.
    fn now(&mut self) -> Duration;
}

/// Real elapsed time, anchored at the first sample.
pub struct WallClock {
    started: Option<Instant>,
}

impl WallClock {
    pub fn new() -> Self {
        Self { started: None }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for WallClock {
    fn now(&mut self) -> Duration {
        let started = *self.started.get_or_insert_with(Instant::now);
        started.elapsed()
    }
}

/// Virtual clock advancing a fixed step per sample.
///
/// Keeps timer machines drivable in tests without real waits: the first
/// sample returns one step, the next two steps, and so on.
pub struct SteppedClock {
    step: Duration,
    now: Duration,
}

impl SteppedClock {
    pub fn new(step: Duration) -> Self {
        Self {
            step,
            now: Duration::ZERO,
        }
    }
}

impl Clock for SteppedClock {
    fn now(&mut self) -> Duration {
        self.now += self.step;
        self.now
    }
}
