//! Transition history tracking.
//!
//! Keeps an ordered, in-memory log of the transitions a machine has
//! committed. Failed or rolled back triggers are never recorded.

use super::state::{Event, State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of records a machine keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 1024;

/// Record of a single committed transition.
///
/// # Example
///
/// ```rust
/// use transitions::core::{Event, State, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: State::from("WaitPay"),
///     event: Event::from("Pay"),
///     to: State::from("Paying"),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to, "Paying");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state being left
    pub from: State,
    /// The event that was fired
    pub event: Event,
    /// The state the action settled on
    pub to: State,
    /// When the transition was committed
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of committed transitions.
///
/// `record` returns a new history with the transition appended and leaves
/// the original untouched. A history may be bounded with
/// [`with_limit`](StateHistory::with_limit), in which case the oldest
/// records are dropped once the limit is reached. A limit of zero keeps
/// nothing.
///
/// # Example
///
/// ```rust
/// use transitions::core::{Event, State, StateHistory, TransitionRecord};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(TransitionRecord {
///         from: State::from("Initial"),
///         event: Event::from("Create"),
///         to: State::from("WaitPay"),
///         timestamp: Utc::now(),
///     })
///     .record(TransitionRecord {
///         from: State::from("WaitPay"),
///         event: Event::from("Pay"),
///         to: State::from("Paying"),
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Initial -> WaitPay -> Paying
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<TransitionRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: None,
        }
    }

    /// Create an empty history keeping at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of records kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: TransitionRecord) -> Self {
        let mut history = self.clone();
        history.push(transition);
        history
    }

    /// Append a transition in place, evicting the oldest record when the
    /// limit is exceeded.
    pub(crate) fn push(&mut self, transition: TransitionRecord) {
        if self.limit == Some(0) {
            return;
        }
        self.transitions.push_back(transition);
        if let Some(limit) = self.limit {
            while self.transitions.len() > limit {
                self.transitions.pop_front();
            }
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source of the oldest kept transition followed by the
    /// target of every kept transition, in order.
    pub fn get_path(&self) -> Vec<&State> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.front(), self.transitions.back()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Kept transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &TransitionRecord> + '_ {
        self.transitions.iter()
    }

    /// The most recently committed transition.
    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.back()
    }

    /// Number of kept transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
