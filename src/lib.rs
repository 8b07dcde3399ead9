//! Flywheel: a tick-driven state machine runtime
//!
//! Flywheel splits a running state machine into two halves with a strict
//! division of labor. The machine owns its state and context: it moves
//! between states only through the rules declared for it, at most one
//! transition per tick. The driver owns everything around the machine:
//! the clock that feeds it time, the step counter used for display, the
//! output sink, and the pacing between iterations.
//!
//! # Core Concepts
//!
//! - **State**: Type-safe state representation via the `State` trait
//! - **Rules**: Declarative transitions with guards, actions, and timers
//! - **Driver**: The loop that ticks, renders, and paces a machine
//!
//! # Example
//!
//! ```rust
//! use flywheel::builder::{simple_rule, MachineBuilder};
//! use flywheel::driver::{Driver, NoPacer, SteppedClock};
//! use flywheel::state_enum;
//! use std::time::Duration;
//!
//! state_enum! {
//!     enum Phase {
//!         Start,
//!         Running,
//!         Done,
//!     }
//!     final: [Done]
//! }
//!
//! let machine = MachineBuilder::new()
//!     .initial(Phase::Start)
//!     .context(())
//!     .add_rule(simple_rule(Phase::Start, Phase::Running))
//!     .add_rule(simple_rule(Phase::Running, Phase::Done))
//!     .build()
//!     .unwrap();
//!
//! let mut driver = Driver::builder(machine)
//!     .clock(SteppedClock::new(Duration::from_millis(10)))
//!     .pacer(NoPacer)
//!     .sink(Vec::new())
//!     .build();
//!
//! driver.run().unwrap();
//!
//! let output = String::from_utf8(driver.into_sink()).unwrap();
//! let lines: Vec<&str> = output.lines().collect();
//! assert_eq!(lines, ["Start", "01: Running", "02: Done"]);
//! ```

pub mod builder;
pub mod core;
pub mod driver;
pub mod machine;
pub mod validate;

// Re-export commonly used types
pub use self::core::{Guard, State, TransitionLog, TransitionRecord};
