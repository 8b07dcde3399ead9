//! Tick-driven machine runtime.
//!
//! A `Machine` holds a current state, a user context, and a declarative
//! rule table. Each `tick` evaluates the rules for the current state in
//! declaration order and fires at most the first one whose guard passes.
//! A fired rule either moves the machine to a target state (resetting the
//! state timer) or terminates the run.
//!
//! The machine never reads a clock: the caller feeds machine time in
//! through `advance_to` before each tick, and timer guards see only the
//! resulting time-in-state.

mod rule;
mod runtime;

pub use rule::{Action, Rule, Target};
pub use runtime::{Hooks, Machine, StateHook, TransitionHook};
