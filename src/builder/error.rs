//! Build errors for machine definitions and transitions.

use crate::core::{Event, State};
use thiserror::Error;

/// Errors that can occur when building transitions or loading definitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingSourceState,

    #[error("Transition event not specified. Call .on(event)")]
    MissingEvent,

    #[error("Transition has no target states. Call .to(state) at least once")]
    MissingTargets,

    #[error("Transition action not specified. Call .action(f) or .first_candidate()")]
    MissingAction,

    #[error("Invalid machine definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
}

/// Problems found when checking a machine definition as a whole.
///
/// These are reported together by `StateMachineBuilder::validate`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionError {
    #[error("Transition source '{state}' is not a registered state")]
    UnknownSourceState { state: State },

    #[error("Target '{state}' of '{source_state}' --{event}--> is not a registered state")]
    UnknownTargetState {
        source_state: State,
        event: Event,
        state: State,
    },

    #[error("Event '{event}' used from '{source_state}' is not a registered event")]
    UnknownEvent { source_state: State, event: Event },

    #[error("'{source_state}' --{event}--> has no candidate states")]
    NoCandidates { source_state: State, event: Event },

    #[error("Current state '{state}' is not a registered state")]
    UnknownCurrentState { state: State },

    #[error("No current state. Call .current_state(state) or add a transition")]
    MissingCurrentState,
}
