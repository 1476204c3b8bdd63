//! Builder for configuring state machines.

use crate::builder::definition::MachineDefinition;
use crate::builder::error::DefinitionError;
use crate::core::{Event, EventLabels, State, StateHistory, StateLabels, DEFAULT_HISTORY_LIMIT};
use crate::machine::{StateGraph, StateMachine, Transition};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Fluent configuration for a [`StateMachine`].
///
/// Setters never validate; a machine built from an inconsistent
/// configuration reports problems from `trigger`. Call [`validate`] or
/// [`build_strict`] to check the configuration up front.
///
/// Transitions are merged into the table as they are added. The first
/// transition's source becomes the current state unless one was already
/// set with [`current_state`].
///
/// [`validate`]: StateMachineBuilder::validate
/// [`build_strict`]: StateMachineBuilder::build_strict
/// [`current_state`]: StateMachineBuilder::current_state
pub struct StateMachineBuilder<C> {
    name: String,
    graph: StateGraph<C>,
    history_limit: Option<usize>,
}

impl<C> StateMachineBuilder<C> {
    /// Create a new builder for a machine called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph: StateGraph::new(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Start from a loaded definition.
    pub fn from_definition(definition: MachineDefinition) -> Self {
        let mut builder = Self::new(definition.name)
            .states(definition.states)
            .events(definition.events);
        builder.graph.current = definition.current_state;
        builder
    }

    /// Rename the machine.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Replace the registered states.
    pub fn states(mut self, states: StateLabels) -> Self {
        self.graph.states = states;
        self
    }

    /// Register one state.
    pub fn state(mut self, state: impl Into<State>, label: impl Into<String>) -> Self {
        self.graph.states.insert(state.into(), label.into());
        self
    }

    /// Replace the registered events.
    pub fn events(mut self, events: EventLabels) -> Self {
        self.graph.events = events;
        self
    }

    /// Register one event.
    pub fn event(mut self, event: impl Into<Event>, label: impl Into<String>) -> Self {
        self.graph.events.insert(event.into(), label.into());
        self
    }

    /// Set the current state, e.g. one restored from storage.
    pub fn current_state(mut self, state: impl Into<State>) -> Self {
        self.graph.current = Some(state.into());
        self
    }

    /// Keep at most `limit` committed transitions in the machine's
    /// history. Zero disables history. Defaults to [`DEFAULT_HISTORY_LIMIT`].
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Keep every committed transition.
    pub fn unbounded_history(mut self) -> Self {
        self.history_limit = None;
        self
    }

    /// Add one transition.
    pub fn transition(mut self, transition: Transition<C>) -> Self {
        self.graph.register([transition]);
        self
    }

    /// Add several transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<C>>) -> Self {
        self.graph.register(transitions);
        self
    }

    /// Check the configuration as a whole, collecting every problem.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<DefinitionError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<DefinitionError>>> = Vec::new();

        let current = match &self.graph.current {
            None => Validation::fail(DefinitionError::MissingCurrentState),
            Some(state) if !self.graph.is_registered_state(state.name()) => {
                Validation::fail(DefinitionError::UnknownCurrentState {
                    state: state.clone(),
                })
            }
            Some(_) => Validation::success(()),
        };
        checks.push(current);

        let mut transitions: Vec<&Transition<C>> = self.graph.table().iter().collect();
        transitions.sort_by(|a, b| (&a.source, &a.event).cmp(&(&b.source, &b.event)));

        let mut reported_sources: Vec<&State> = Vec::new();
        for transition in transitions {
            let source = &transition.source;

            if !self.graph.is_registered_state(source.name()) && !reported_sources.contains(&source)
            {
                reported_sources.push(source);
                checks.push(Validation::fail(DefinitionError::UnknownSourceState {
                    state: source.clone(),
                }));
            }

            if !self.graph.is_registered_event(transition.event.name()) {
                checks.push(Validation::fail(DefinitionError::UnknownEvent {
                    source_state: source.clone(),
                    event: transition.event.clone(),
                }));
            }

            if transition.targets.is_empty() {
                checks.push(Validation::fail(DefinitionError::NoCandidates {
                    source_state: source.clone(),
                    event: transition.event.clone(),
                }));
            }

            for target in &transition.targets {
                if !self.graph.is_registered_state(target.name()) {
                    checks.push(Validation::fail(DefinitionError::UnknownTargetState {
                        source_state: source.clone(),
                        event: transition.event.clone(),
                        state: target.clone(),
                    }));
                }
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Build the machine without checking the configuration.
    pub fn build(self) -> StateMachine<C> {
        tracing::debug!(
            machine = %self.name,
            states = self.graph.states.len(),
            events = self.graph.events.len(),
            transitions = self.graph.table().len(),
            "state machine built"
        );
        let history = match self.history_limit {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        StateMachine::from_parts(self.name, self.graph, history)
    }

    /// Build the machine, or return every problem [`validate`] finds.
    ///
    /// [`validate`]: StateMachineBuilder::validate
    pub fn build_strict(self) -> Result<StateMachine<C>, NonEmptyVec<DefinitionError>> {
        match self.validate() {
            Validation::Success(_) => Ok(self.build()),
            Validation::Failure(errors) => Err(errors),
        }
    }
}
