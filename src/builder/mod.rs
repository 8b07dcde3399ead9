//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring machines
//! with minimal boilerplate while maintaining type safety. `build()` runs
//! the definition audit from `crate::validate` before any machine exists.

pub mod error;
pub mod machine;
pub mod macros;
pub mod rule;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use rule::RuleBuilder;

use crate::core::State;
use crate::machine::Rule;
use std::time::Duration;

/// Create a simple unconditional rule.
///
/// # Example
///
/// ```
/// use flywheel::builder::simple_rule;
/// use flywheel::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Start,
///         End,
///     }
///     final: [End]
/// }
///
/// let rule = simple_rule::<MyState, ()>(MyState::Start, MyState::End);
/// ```
pub fn simple_rule<S, C>(from: S, to: S) -> Rule<S, C>
where
    S: State + 'static,
{
    RuleBuilder::new()
        .from(from)
        .to(to)
        .build()
        .expect("Simple rule should always build")
}

/// Create a rule guarded by a context predicate.
///
/// # Example
///
/// ```
/// use flywheel::builder::guarded_rule;
/// use flywheel::state_enum;
///
/// state_enum! {
///     enum MyState {
///         Draining,
///         Empty,
///     }
///     final: [Empty]
/// }
///
/// struct Tank {
///     level: u32,
/// }
///
/// let rule = guarded_rule::<MyState, Tank, _>(
///     MyState::Draining,
///     MyState::Empty,
///     |tank| tank.level == 0,
/// );
/// ```
pub fn guarded_rule<S, C, F>(from: S, to: S, guard: F) -> Rule<S, C>
where
    S: State + 'static,
    F: Fn(&C) -> bool + Send + Sync + 'static,
{
    RuleBuilder::new()
        .from(from)
        .to(to)
        .when(guard)
        .build()
        .expect("Guarded rule should always build")
}

/// Create a rule that fires once the machine has spent `after` in the
/// source state.
///
/// # Example
///
/// ```
/// use flywheel::builder::timed_rule;
/// use flywheel::state_enum;
/// use std::time::Duration;
///
/// state_enum! {
///     enum MyState {
///         Waiting,
///         Done,
///     }
///     final: [Done]
/// }
///
/// let rule = timed_rule::<MyState, ()>(
///     MyState::Waiting,
///     MyState::Done,
///     Duration::from_millis(100),
/// );
/// ```
pub fn timed_rule<S, C>(from: S, to: S, after: Duration) -> Rule<S, C>
where
    S: State + 'static,
{
    RuleBuilder::new()
        .from(from)
        .to(to)
        .after(after)
        .build()
        .expect("Timed rule should always build")
}

/// Create a rule that terminates the run from the given state.
pub fn stop_rule<S, C>(from: S) -> Rule<S, C>
where
    S: State + 'static,
{
    RuleBuilder::new()
        .from(from)
        .stop()
        .build()
        .expect("Stop rule should always build")
}
