//! Iteration pacing for the driver.

use std::thread;
use std::time::Duration;

/// Default delay between iterations.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(10);

/// Cooperative delay applied after each iteration.
pub trait Pacer {
    /// Suspend the loop before the next iteration.
    fn pause(&mut self);
}

/// Blocks the driving thread for a fixed interval.
pub struct SleepPacer {
    interval: Duration,
}

impl SleepPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for SleepPacer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Pacer for SleepPacer {
    fn pause(&mut self) {
        thread::sleep(self.interval);
    }
}

/// No delay at all, for tests and virtual-time runs.
pub struct NoPacer;

impl Pacer for NoPacer {
    fn pause(&mut self) {}
}
