//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Event, State};
use crate::machine::{Action, ActionError, EventProcessor, ProcessorRef, Transition};
use std::sync::Arc;

/// Builder for constructing transitions with a fluent API.
pub struct TransitionBuilder<C> {
    source: Option<State>,
    event: Option<Event>,
    targets: Vec<State>,
    action: Option<Action<C>>,
    processor: Option<ProcessorRef<C>>,
}

impl<C> TransitionBuilder<C> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            source: None,
            event: None,
            targets: Vec::new(),
            action: None,
            processor: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: impl Into<State>) -> Self {
        self.source = Some(state.into());
        self
    }

    /// Set the triggering event (required).
    pub fn on(mut self, event: impl Into<Event>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Add a candidate target state. At least one is required.
    pub fn to(mut self, state: impl Into<State>) -> Self {
        self.targets.push(state.into());
        self
    }

    /// Add several candidate target states.
    pub fn to_any(mut self, states: impl IntoIterator<Item = impl Into<State>>) -> Self {
        self.targets.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the action that picks the target (required).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&C, &State, &Event, &[State]) -> Result<State, ActionError> + Send + Sync + 'static,
    {
        self.action = Some(Arc::new(action));
        self
    }

    /// Use an action that always moves to the first candidate.
    pub fn first_candidate(self) -> Self
    where
        C: 'static,
    {
        self.action(super::first_candidate)
    }

    /// Attach hooks for this transition (optional).
    pub fn processor<P>(mut self, processor: P) -> Self
    where
        P: EventProcessor<C> + 'static,
    {
        self.processor = Some(Arc::new(processor));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<C>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSourceState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        if self.targets.iter().all(State::is_blank) {
            return Err(BuildError::MissingTargets);
        }
        let action = self.action.ok_or(BuildError::MissingAction)?;

        Ok(Transition {
            source,
            event,
            targets: self.targets,
            action,
            processor: self.processor,
        })
    }
}

impl<C> Default for TransitionBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
