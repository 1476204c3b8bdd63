//! Errors raised while dispatching events.

use crate::core::{Event, State};
use thiserror::Error;

/// Failure reported by a transition action.
///
/// `Refused` is the usual way for domain logic to decline a move.
/// Any other error type can be wrapped through `Other`.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{0}")]
    Refused(String),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl ActionError {
    /// Refuse the transition with a message.
    pub fn refused(message: impl Into<String>) -> Self {
        Self::Refused(message.into())
    }
}

/// Failure reported by an event processor hook.
///
/// Hook failures are logged and discarded; they never change the
/// outcome of a trigger.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{0}")]
pub struct HookError(pub String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type returned by every processor hook.
pub type HookResult = Result<(), HookError>;

/// Errors that can occur when triggering an event.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The current state is unset (reported as a blank state) or was
    /// never registered.
    #[error("Current state '{state}' is not a registered state")]
    UnknownState { state: State },

    #[error("Event '{event}' is not a registered event")]
    UnknownEvent { event: Event },

    #[error("No transition defined for event '{event}' in state '{state}'")]
    NoTransitionDefined { state: State, event: Event },

    #[error("Action for '{from}' --{event}--> failed: {source}")]
    ActionFailed {
        from: State,
        event: Event,
        #[source]
        source: ActionError,
    },

    #[error("Action returned state '{returned}', which is not among the candidates {candidates:?}")]
    InvalidResultState {
        returned: State,
        candidates: Vec<State>,
    },
}
