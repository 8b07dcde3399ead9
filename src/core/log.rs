//! Transition logging.
//!
//! Provides immutable tracking of fired transitions over a machine's
//! lifetime, following functional programming principles.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single fired transition.
///
/// Records are immutable values representing a move from one state to
/// another, stamped with both wall-clock time and the machine time at
/// which the rule fired.
///
/// # Example
///
/// ```rust
/// use flywheel::core::{State, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TaskState {
///     Pending,
///     Running,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///         }
///     }
/// }
///
/// let record = TransitionRecord {
///     from: TaskState::Pending,
///     to: TaskState::Running,
///     timestamp: Utc::now(),
///     at: Duration::from_millis(20),
/// };
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred in wall-clock time
    pub timestamp: DateTime<Utc>,
    /// Machine time when the rule fired
    pub at: Duration,
}

/// Ordered log of fired transitions.
///
/// The log is immutable - the `record` method returns a new log with the
/// record added, following functional programming principles.
///
/// # Example
///
/// ```rust
/// use flywheel::core::{State, TransitionLog, TransitionRecord};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
/// use std::time::Duration;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum WorkState {
///     Start,
///     Middle,
///     End,
/// }
///
/// impl State for WorkState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Start => "Start",
///             Self::Middle => "Middle",
///             Self::End => "End",
///         }
///     }
/// }
///
/// let log = TransitionLog::new();
///
/// let log = log.record(TransitionRecord {
///     from: WorkState::Start,
///     to: WorkState::Middle,
///     timestamp: Utc::now(),
///     at: Duration::from_millis(10),
/// });
///
/// let log = log.record(TransitionRecord {
///     from: WorkState::Middle,
///     to: WorkState::End,
///     timestamp: Utc::now(),
///     at: Duration::from_millis(20),
/// });
///
/// let path = log.get_path();
/// assert_eq!(path.len(), 3); // Start -> Middle -> End
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    records: Vec<TransitionRecord<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a fired transition, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log
    /// but returns a new one with the record added.
    ///
    /// # Example
    ///
    /// ```rust
    /// use flywheel::core::{State, TransitionLog, TransitionRecord};
    /// use serde::{Deserialize, Serialize};
    /// use chrono::Utc;
    /// use std::time::Duration;
    ///
    /// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    /// enum Step { A, B }
    ///
    /// impl State for Step {
    ///     fn name(&self) -> &str {
    ///         match self {
    ///             Self::A => "A",
    ///             Self::B => "B",
    ///         }
    ///     }
    /// }
    ///
    /// let log = TransitionLog::new();
    /// let record = TransitionRecord {
    ///     from: Step::A,
    ///     to: Step::B,
    ///     timestamp: Utc::now(),
    ///     at: Duration::ZERO,
    /// };
    ///
    /// let new_log = log.record(record);
    /// assert_eq!(new_log.records().len(), 1);
    /// assert_eq!(log.records().len(), 0); // Original unchanged
    /// ```
    pub fn record(&self, record: TransitionRecord<S>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: initial state, then
    /// the `to` state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Calculate total machine time spanned by the log.
    ///
    /// Returns `None` if there are no records. Otherwise returns the
    /// machine time between the first and last fired rules.
    pub fn span(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            last.at.checked_sub(first.at)
        } else {
            None
        }
    }

    /// Get all records.
    ///
    /// Returns a slice of all recorded transitions in firing order.
    pub fn records(&self) -> &[TransitionRecord<S>] {
        &self.records
    }
}
