//! Transition declarations.

use crate::core::{Event, State};
use crate::machine::error::ActionError;
use crate::machine::processor::EventProcessor;
use std::fmt;
use std::sync::Arc;

/// Decision logic run when a transition fires.
///
/// Receives the caller's context, the current state, the fired event and
/// the declared candidates, and returns the state the machine should move
/// to. The machine rejects any result that is not one of the candidates.
pub type Action<C> =
    Arc<dyn Fn(&C, &State, &Event, &[State]) -> Result<State, ActionError> + Send + Sync>;

/// Shared handle to a processor attached to a transition.
pub type ProcessorRef<C> = Arc<dyn EventProcessor<C>>;

/// A rule allowing `event` to move the machine out of `source` into one of
/// `targets`, with `action` choosing which.
pub struct Transition<C> {
    pub source: State,
    pub event: Event,
    pub targets: Vec<State>,
    pub action: Action<C>,
    pub processor: Option<ProcessorRef<C>>,
}

impl<C> Transition<C> {
    /// Declare a transition without a processor.
    ///
    /// Blank or empty `targets` are accepted here: the table normalizes
    /// them away, leaving a transition with no candidates that a later
    /// declaration for the same source and event can extend. Until then
    /// every trigger of it rolls back. [`TransitionBuilder::build`]
    /// rejects such a transition outright, and
    /// [`StateMachineBuilder::validate`] reports one left in the table.
    ///
    /// [`TransitionBuilder::build`]: crate::builder::TransitionBuilder::build
    /// [`StateMachineBuilder::validate`]: crate::builder::StateMachineBuilder::validate
    pub fn new<F>(
        source: impl Into<State>,
        event: impl Into<Event>,
        targets: impl IntoIterator<Item = impl Into<State>>,
        action: F,
    ) -> Self
    where
        F: Fn(&C, &State, &Event, &[State]) -> Result<State, ActionError> + Send + Sync + 'static,
    {
        Self {
            source: source.into(),
            event: event.into(),
            targets: targets.into_iter().map(Into::into).collect(),
            action: Arc::new(action),
            processor: None,
        }
    }

    /// Attach hooks that run around this transition only.
    pub fn with_processor<P>(mut self, processor: P) -> Self
    where
        P: EventProcessor<C> + 'static,
    {
        self.processor = Some(Arc::new(processor));
        self
    }

    /// True when `state` is one of the declared targets.
    pub fn allows(&self, state: &State) -> bool {
        self.targets.contains(state)
    }
}

impl<C> Clone for Transition<C> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            event: self.event.clone(),
            targets: self.targets.clone(),
            action: Arc::clone(&self.action),
            processor: self.processor.clone(),
        }
    }
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("source", &self.source)
            .field("event", &self.event)
            .field("targets", &self.targets)
            .field("processor", &self.processor.is_some())
            .finish_non_exhaustive()
    }
}

/// Sort `states`, then drop duplicates and blank names.
pub(crate) fn normalize_targets(states: &mut Vec<State>) {
    states.sort();
    states.dedup();
    states.retain(|state| !state.is_blank());
}
