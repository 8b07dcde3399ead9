//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::machine::{Action, Rule, Target};
use std::sync::Arc;
use std::time::Duration;

/// Builder for constructing rules with a fluent API.
pub struct RuleBuilder<S: State, C> {
    from: Option<S>,
    target: Option<Target<S>>,
    guard: Option<Guard<C>>,
    action: Option<Action<C>>,
}

impl<S: State + 'static, C> RuleBuilder<S, C> {
    /// Create a new rule builder.
    pub fn new() -> Self {
        Self {
            from: None,
            target: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.from = Some(state);
        self
    }

    /// Target the given state (this or `.stop()` is required).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(Target::Goto(state));
        self
    }

    /// Terminate the run instead of entering a state.
    pub fn stop(mut self) -> Self {
        self.target = Some(Target::Stop);
        self
    }

    /// Add a guard predicate (optional).
    pub fn guard(mut self, guard: Guard<C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a context-only guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::when(predicate));
        self
    }

    /// Guard the rule on time-in-state (optional).
    ///
    /// The rule becomes ready once the machine has spent at least
    /// `threshold` in the source state.
    pub fn after(mut self, threshold: Duration) -> Self {
        self.guard = Some(Guard::after(threshold));
        self
    }

    /// Set a context-mutating action (optional).
    ///
    /// The action runs inside the tick that fires the rule, before the
    /// machine enters the target state.
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut C) + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Build the rule.
    pub fn build(self) -> Result<Rule<S, C>, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let target = self.target.ok_or(BuildError::MissingTarget)?;

        Ok(Rule {
            from,
            target,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State + 'static, C> Default for RuleBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
