//! The machine itself: state, context, rule table, and the tick loop body.

use crate::core::{State, TransitionLog, TransitionRecord};
use crate::machine::rule::{Rule, Target};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Type alias for entry/exit/tick hooks.
pub type StateHook<S, C> = Arc<dyn Fn(&S, &mut C) + Send + Sync>;

/// Type alias for the transition hook, which sees both endpoints.
pub type TransitionHook<S, C> = Arc<dyn Fn(&S, &S, &mut C) + Send + Sync>;

/// Global callbacks observed by every state.
///
/// All hooks run synchronously inside `tick` (or, for the entry hook,
/// inside construction when the machine enters its initial state).
pub struct Hooks<S, C> {
    pub(crate) on_entry: Option<StateHook<S, C>>,
    pub(crate) on_exit: Option<StateHook<S, C>>,
    pub(crate) on_tick: Option<StateHook<S, C>>,
    pub(crate) on_transition: Option<TransitionHook<S, C>>,
}

impl<S, C> Default for Hooks<S, C> {
    fn default() -> Self {
        Self {
            on_entry: None,
            on_exit: None,
            on_tick: None,
            on_transition: None,
        }
    }
}

/// A tick-driven state machine.
///
/// The machine owns its state and context exclusively. Only `tick` may
/// change the current state, and only rule actions and hooks may mutate
/// the context. Machine time is fed in by the caller through
/// `advance_to`; it is expected to be monotonic.
pub struct Machine<S: State, C> {
    current: S,
    ctx: C,
    rules: Vec<Rule<S, C>>,
    hooks: Hooks<S, C>,
    log: TransitionLog<S>,
    now: Duration,
    entered_at: Duration,
    finished: bool,
}

impl<S: State, C> Machine<S, C> {
    /// Create a machine in its initial state, running the entry hook.
    ///
    /// Construction happens through `MachineBuilder`, which audits the
    /// definition first; a machine that exists is always well-formed.
    pub(crate) fn new(initial: S, context: C, rules: Vec<Rule<S, C>>, hooks: Hooks<S, C>) -> Self {
        let mut machine = Self {
            current: initial,
            ctx: context,
            rules,
            hooks,
            log: TransitionLog::new(),
            now: Duration::ZERO,
            entered_at: Duration::ZERO,
            finished: false,
        };

        if let Some(hook) = &machine.hooks.on_entry {
            hook(&machine.current, &mut machine.ctx);
        }

        machine
    }

    /// Feed machine time forward.
    ///
    /// Callers advance the clock before each tick; the machine never
    /// reads a clock itself.
    pub fn advance_to(&mut self, now: Duration) {
        self.now = now;
    }

    /// Apply one transition step.
    ///
    /// Runs the tick hook, then evaluates the current state's rules in
    /// declaration order. The first rule whose guard passes fires: exit
    /// hook, action, then either entry into the target state (resetting
    /// the state timer) or termination. If no rule is ready the tick
    /// changes nothing.
    ///
    /// Calling `tick` on a machine that is not running is a no-op.
    pub fn tick(&mut self) {
        if !self.is_running() {
            return;
        }

        if let Some(hook) = &self.hooks.on_tick {
            hook(&self.current, &mut self.ctx);
        }

        let time_in_state = self.time_in_state();
        let ready = self
            .rules
            .iter()
            .position(|rule| rule.is_ready(&self.current, &self.ctx, time_in_state));

        let Some(index) = ready else {
            return;
        };

        let action = self.rules[index].action.clone();
        let target = self.rules[index].target.clone();

        if let Some(hook) = &self.hooks.on_exit {
            hook(&self.current, &mut self.ctx);
        }

        if let Some(action) = action {
            action(&mut self.ctx);
        }

        match target {
            Target::Goto(next) => {
                if let Some(hook) = &self.hooks.on_transition {
                    hook(&self.current, &next, &mut self.ctx);
                }

                debug!(
                    from = self.current.name(),
                    to = next.name(),
                    at = ?self.now,
                    "transition fired"
                );

                self.log = self.log.record(TransitionRecord {
                    from: self.current.clone(),
                    to: next.clone(),
                    timestamp: Utc::now(),
                    at: self.now,
                });

                self.current = next;
                self.entered_at = self.now;

                if let Some(hook) = &self.hooks.on_entry {
                    hook(&self.current, &mut self.ctx);
                }
            }
            Target::Stop => {
                debug!(from = self.current.name(), at = ?self.now, "machine terminated");
                self.finished = true;
            }
        }
    }

    /// Check whether the machine should keep being driven (pure).
    ///
    /// True until the machine terminates through a `Stop` rule or enters
    /// a final state.
    pub fn is_running(&self) -> bool {
        !self.finished && !self.current.is_final()
    }

    /// Human-readable label for the current position (pure).
    ///
    /// The current state's name, or `FINISHED` once a `Stop` rule has
    /// fired.
    pub fn label(&self) -> &str {
        if self.finished {
            "FINISHED"
        } else {
            self.current.name()
        }
    }

    /// Machine time spent in the current state (pure).
    pub fn time_in_state(&self) -> Duration {
        self.now.checked_sub(self.entered_at).unwrap_or_default()
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the machine's context (pure)
    pub fn context(&self) -> &C {
        &self.ctx
    }

    /// Get the transition log (pure)
    pub fn log(&self) -> &TransitionLog<S> {
        &self.log
    }

    /// Current machine time (pure)
    pub fn now(&self) -> Duration {
        self.now
    }
}
