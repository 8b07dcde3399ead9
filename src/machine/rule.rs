//! Declarative transition rules.

use crate::core::{Guard, State};
use std::sync::Arc;
use std::time::Duration;

/// Type alias for rule actions.
///
/// Actions run synchronously inside the tick that fires their rule, after
/// the exit hook and before the machine enters the target state.
pub type Action<C> = Arc<dyn Fn(&mut C) + Send + Sync>;

/// Where a fired rule sends the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Target<S: State> {
    /// Enter the given state (re-entering resets the state timer,
    /// including for self-transitions)
    Goto(S),

    /// Terminate the run
    Stop,
}

/// A transition rule: a source state, an optional guard, an optional
/// context-mutating action, and a target.
///
/// Rules are evaluated in declaration order; the first rule whose source
/// matches the current state and whose guard passes fires, and at most
/// one rule fires per tick. An unguarded rule is always ready.
pub struct Rule<S: State, C> {
    pub from: S,
    pub target: Target<S>,
    pub guard: Option<Guard<C>>,
    pub action: Option<Action<C>>,
}

impl<S: State, C> Rule<S, C> {
    /// Check if this rule is ready to fire from the current state (pure)
    pub fn is_ready(&self, current: &S, ctx: &C, time_in_state: Duration) -> bool {
        // Check state match
        if *current != self.from {
            return false;
        }

        // Check guard if present (pure predicate)
        self.guard
            .as_ref()
            .is_none_or(|g| g.check(ctx, time_in_state))
    }
}
