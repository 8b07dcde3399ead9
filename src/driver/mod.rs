//! The driver loop: initialize, render, tick, pace.
//!
//! A `Driver` owns a machine and everything around it that the machine
//! itself must not know about: the clock that feeds it time, the step
//! counter used purely for display, the output sink, and the pacing
//! between iterations.
//!
//! The loop renders the initial snapshot unlabeled, then while the
//! machine is running: advances the clock, ticks the machine, increments
//! the driver's own counter, writes one `NN: <label>` line, and pauses.

mod clock;
mod pace;
mod render;

pub use clock::{Clock, SteppedClock, WallClock};
pub use pace::{NoPacer, Pacer, SleepPacer, DEFAULT_INTERVAL};
pub use render::{clamp, snapshot_line, DEFAULT_LABEL_CAPACITY};

use crate::core::State;
use crate::machine::Machine;
use std::io::{self, Write};
use std::time::Duration;

/// What a finished run looked like.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Ticks applied before the loop exited
    pub steps: u64,
    /// Label rendered for the machine's last position
    pub final_label: String,
}

/// Drives a machine until it stops running.
///
/// # Example
///
/// ```rust
/// use flywheel::builder::{simple_rule, MachineBuilder};
/// use flywheel::driver::{Driver, NoPacer, SteppedClock};
/// use flywheel::state_enum;
/// use std::time::Duration;
///
/// state_enum! {
///     enum Step {
///         First,
///         Second,
///     }
///     final: [Second]
/// }
///
/// let machine = MachineBuilder::new()
///     .initial(Step::First)
///     .context(())
///     .add_rule(simple_rule(Step::First, Step::Second))
///     .build()
///     .unwrap();
///
/// let mut driver = Driver::builder(machine)
///     .clock(SteppedClock::new(Duration::from_millis(10)))
///     .pacer(NoPacer)
///     .sink(Vec::new())
///     .build();
///
/// let summary = driver.run().unwrap();
/// assert_eq!(summary.steps, 1);
/// assert_eq!(summary.final_label, "Second");
/// ```
pub struct Driver<S: State, C, W: Write> {
    machine: Machine<S, C>,
    clock: Box<dyn Clock>,
    pacer: Box<dyn Pacer>,
    sink: W,
    label_capacity: usize,
    max_steps: Option<u64>,
    steps: u64,
}

impl<S: State, C> Driver<S, C, io::Stdout> {
    /// Start configuring a driver for the given machine.
    ///
    /// Defaults: wall clock, 10ms sleep pacing, stdout sink, 256-byte
    /// label capacity, no step limit.
    pub fn builder(machine: Machine<S, C>) -> DriverBuilder<S, C, io::Stdout> {
        DriverBuilder::new(machine)
    }
}

impl<S: State, C, W: Write> Driver<S, C, W> {
    /// Run the loop until the machine stops running or the step limit is
    /// reached.
    ///
    /// A machine that never reaches a terminal state keeps the loop
    /// going indefinitely unless a step limit is set; that is expected
    /// behavior, not an error.
    pub fn run(&mut self) -> io::Result<RunSummary> {
        let initial = clamp(self.machine.label(), self.label_capacity);
        writeln!(self.sink, "{initial}")?;

        while self.machine.is_running() {
            if let Some(max) = self.max_steps {
                if self.steps >= max {
                    break;
                }
            }

            let now = self.clock.now();
            self.machine.advance_to(now);
            self.machine.tick();
            self.steps += 1;

            let label = clamp(self.machine.label(), self.label_capacity);
            writeln!(self.sink, "{}", snapshot_line(self.steps, label))?;

            self.pacer.pause();
        }

        Ok(RunSummary {
            steps: self.steps,
            final_label: self.machine.label().to_string(),
        })
    }

    /// The driven machine.
    pub fn machine(&self) -> &Machine<S, C> {
        &self.machine
    }

    /// Ticks applied so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Give up the sink, e.g. to inspect a buffer after a test run.
    pub fn into_sink(self) -> W {
        self.sink
    }
}

/// Builder for configuring drivers with a fluent API.
pub struct DriverBuilder<S: State, C, W: Write> {
    machine: Machine<S, C>,
    clock: Box<dyn Clock>,
    pacer: Box<dyn Pacer>,
    sink: W,
    label_capacity: usize,
    max_steps: Option<u64>,
}

impl<S: State, C> DriverBuilder<S, C, io::Stdout> {
    /// Create a builder with the default wall clock, sleep pacing, and
    /// stdout sink.
    pub fn new(machine: Machine<S, C>) -> Self {
        Self {
            machine,
            clock: Box::new(WallClock::new()),
            pacer: Box::new(SleepPacer::default()),
            sink: io::stdout(),
            label_capacity: DEFAULT_LABEL_CAPACITY,
            max_steps: None,
        }
    }
}

impl<S: State, C, W: Write> DriverBuilder<S, C, W> {
    /// Use a different machine-time source.
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Use a different pacer.
    pub fn pacer(mut self, pacer: impl Pacer + 'static) -> Self {
        self.pacer = Box::new(pacer);
        self
    }

    /// Sleep for the given interval between iterations.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.pacer = Box::new(SleepPacer::new(interval));
        self
    }

    /// Cap rendered labels at `capacity` bytes.
    pub fn label_capacity(mut self, capacity: usize) -> Self {
        self.label_capacity = capacity;
        self
    }

    /// Stop the loop after `max` ticks even if the machine is still
    /// running.
    pub fn max_steps(mut self, max: u64) -> Self {
        self.max_steps = Some(max);
        self
    }

    /// Write snapshots somewhere other than stdout.
    pub fn sink<W2: Write>(self, sink: W2) -> DriverBuilder<S, C, W2> {
        DriverBuilder {
            machine: self.machine,
            clock: self.clock,
            pacer: self.pacer,
            sink,
            label_capacity: self.label_capacity,
            max_steps: self.max_steps,
        }
    }

    /// Build the driver.
    pub fn build(self) -> Driver<S, C, W> {
        Driver {
            machine: self.machine,
            clock: self.clock,
            pacer: self.pacer,
            sink: self.sink,
            label_capacity: self.label_capacity,
            max_steps: self.max_steps,
            steps: 0,
        }
    }
}
