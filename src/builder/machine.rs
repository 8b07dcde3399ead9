//! Builder for constructing machines.

use crate::builder::error::BuildError;
use crate::builder::rule::RuleBuilder;
use crate::core::State;
use crate::machine::{Hooks, Machine, Rule};
use crate::validate::audit;
use std::sync::Arc;
use stillwater::validation::Validation;

/// Builder for constructing machines with a fluent API.
///
/// `build()` audits the whole definition and reports every problem it
/// finds at once inside `BuildError::Rejected`.
pub struct MachineBuilder<S: State + 'static, C> {
    initial: Option<S>,
    context: Option<C>,
    rules: Vec<Rule<S, C>>,
    hooks: Hooks<S, C>,
}

impl<S: State + 'static, C> MachineBuilder<S, C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            rules: Vec::new(),
            hooks: Hooks::default(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Set the starting context value (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the builder fails validation.
    pub fn rule(mut self, builder: RuleBuilder<S, C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<S, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once.
    pub fn rules(mut self, rules: Vec<Rule<S, C>>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Run a callback whenever the machine enters a state, including the
    /// initial state at construction.
    pub fn on_entry<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &mut C) + Send + Sync + 'static,
    {
        self.hooks.on_entry = Some(Arc::new(hook));
        self
    }

    /// Run a callback whenever the machine leaves a state.
    pub fn on_exit<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &mut C) + Send + Sync + 'static,
    {
        self.hooks.on_exit = Some(Arc::new(hook));
        self
    }

    /// Run a callback at the start of every tick, before rule evaluation.
    pub fn on_tick<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &mut C) + Send + Sync + 'static,
    {
        self.hooks.on_tick = Some(Arc::new(hook));
        self
    }

    /// Run a callback when a rule fires, seeing both endpoints.
    pub fn on_transition<F>(mut self, hook: F) -> Self
    where
        F: Fn(&S, &S, &mut C) + Send + Sync + 'static,
    {
        self.hooks.on_transition = Some(Arc::new(hook));
        self
    }

    /// Build the machine.
    ///
    /// Returns an error if required fields are missing, or
    /// `BuildError::Rejected` with every accumulated issue if the
    /// definition fails the audit.
    pub fn build(self) -> Result<Machine<S, C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        match audit(&initial, &self.rules) {
            Validation::Success(_) => Ok(Machine::new(initial, context, self.rules, self.hooks)),
            Validation::Failure(issues) => Err(BuildError::Rejected(issues)),
        }
    }
}

impl<S: State + 'static, C> Default for MachineBuilder<S, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{simple_rule, stop_rule};
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    #[test]
    fn builder_validates_required_fields() {
        let result = MachineBuilder::<TestState, ()>::new().build();

        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn builder_requires_context() {
        let result = MachineBuilder::<TestState, ()>::new()
            .initial(TestState::Initial)
            .build();

        assert!(matches!(result, Err(BuildError::MissingContext)));
    }

    #[test]
    fn builder_requires_rules() {
        let result = MachineBuilder::<TestState, ()>::new()
            .initial(TestState::Initial)
            .context(())
            .build();

        assert!(matches!(result, Err(BuildError::NoRules)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = MachineBuilder::new()
            .initial(TestState::Initial)
            .context(())
            .add_rule(simple_rule(TestState::Initial, TestState::Processing))
            .add_rule(simple_rule(TestState::Processing, TestState::Complete))
            .build();

        assert!(machine.is_ok());
        let machine = machine.unwrap();
        assert_eq!(machine.current_state(), &TestState::Initial);
    }

    #[test]
    fn rule_method_accepts_rule_builder() {
        let machine = MachineBuilder::new()
            .initial(TestState::Initial)
            .context(0u32)
            .rule(
                RuleBuilder::new()
                    .from(TestState::Initial)
                    .to(TestState::Complete)
                    .action(|count: &mut u32| *count += 1),
            )
            .unwrap()
            .build();

        assert!(machine.is_ok());
    }

    #[test]
    fn add_multiple_rules() {
        let machine = MachineBuilder::new()
            .initial(TestState::Initial)
            .context(())
            .rules(vec![
                simple_rule(TestState::Initial, TestState::Processing),
                simple_rule(TestState::Processing, TestState::Complete),
            ])
            .build();

        assert!(machine.is_ok());
    }

    #[test]
    fn entry_hook_runs_for_initial_state() {
        let machine = MachineBuilder::new()
            .initial(TestState::Initial)
            .context(Vec::new())
            .add_rule(simple_rule(TestState::Initial, TestState::Complete))
            .on_entry(|s: &TestState, entered: &mut Vec<String>| {
                entered.push(s.name().to_string())
            })
            .build()
            .unwrap();

        assert_eq!(machine.context(), &vec!["Initial".to_string()]);
    }

    #[test]
    fn audit_rejects_bad_definitions() {
        // Rule 1 leaves a final state; rule 2 is shadowed by rule 0.
        let result = MachineBuilder::new()
            .initial(TestState::Initial)
            .context(())
            .add_rule(simple_rule(TestState::Initial, TestState::Complete))
            .add_rule(stop_rule(TestState::Complete))
            .add_rule(simple_rule(TestState::Initial, TestState::Processing))
            .build();

        match result {
            Err(BuildError::Rejected(issues)) => assert_eq!(issues.len(), 2),
            Err(other) => panic!("Expected Rejected, got {other:?}"),
            Ok(_) => panic!("Expected Rejected, definition was accepted"),
        }
    }
}
