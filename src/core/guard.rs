//! Guard predicates for controlling rule firing.
//!
//! Guards are pure boolean functions that determine whether a rule is
//! ready to fire. They see the machine's context and the time spent in
//! the current state, and nothing else.

use std::time::Duration;

/// Pure predicate that determines if a rule is ready to fire.
///
/// Guards are evaluated against the machine's context together with the
/// time the machine has spent in its current state. The time value makes
/// timer transitions expressible as ordinary guards, without the guard
/// ever reading a clock itself.
///
/// # Example
///
/// ```rust
/// use flywheel::core::Guard;
/// use std::time::Duration;
///
/// struct Ctx {
///     armed: bool,
/// }
///
/// // Ready once armed and at least 50ms in the current state
/// let ready = Guard::new(|ctx: &Ctx, time| ctx.armed && time >= Duration::from_millis(50));
///
/// assert!(!ready.check(&Ctx { armed: true }, Duration::from_millis(10)));
/// assert!(!ready.check(&Ctx { armed: false }, Duration::from_millis(60)));
/// assert!(ready.check(&Ctx { armed: true }, Duration::from_millis(50)));
/// ```
pub struct Guard<C> {
    predicate: Box<dyn Fn(&C, Duration) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate over context and time-in-state.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, Duration) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Create a guard from a context-only predicate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flywheel::core::Guard;
    /// use std::time::Duration;
    ///
    /// struct Ctx {
    ///     retries: u32,
    /// }
    ///
    /// let exhausted = Guard::when(|ctx: &Ctx| ctx.retries >= 3);
    ///
    /// assert!(!exhausted.check(&Ctx { retries: 1 }, Duration::ZERO));
    /// assert!(exhausted.check(&Ctx { retries: 3 }, Duration::ZERO));
    /// ```
    pub fn when<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Self::new(move |ctx, _| predicate(ctx))
    }

    /// Create a timer guard that becomes ready once the machine has spent
    /// at least `threshold` in its current state.
    ///
    /// The threshold is inclusive: the guard passes on the tick where
    /// time-in-state reaches it exactly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flywheel::core::Guard;
    /// use std::time::Duration;
    ///
    /// let timer: Guard<()> = Guard::after(Duration::from_millis(100));
    ///
    /// assert!(!timer.check(&(), Duration::from_millis(90)));
    /// assert!(timer.check(&(), Duration::from_millis(100)));
    /// ```
    pub fn after(threshold: Duration) -> Self {
        Self::new(move |_: &C, time: Duration| time >= threshold)
    }

    /// Check if the guard passes for this context and time-in-state.
    ///
    /// This is a pure function that evaluates the predicate without
    /// any side effects.
    pub fn check(&self, ctx: &C, time_in_state: Duration) -> bool {
        (self.predicate)(ctx, time_in_state)
    }
}
