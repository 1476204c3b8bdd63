//! State machine that dispatches events through its transition table.

use crate::builder::StateMachineBuilder;
use crate::core::{Event, State, StateHistory, TransitionRecord};
use crate::machine::error::{HookResult, TriggerError};
use crate::machine::graph::StateGraph;
use crate::machine::processor::{EventProcessor, NoopProcessor};
use crate::machine::transition::Transition;
use chrono::Utc;
use std::fmt;

/// A named machine driving one entity through its states.
///
/// `C` is the context passed by reference to every action and hook on
/// each `trigger` call, for example the entity being transitioned.
pub struct StateMachine<C = ()> {
    name: String,
    graph: StateGraph<C>,
    history: StateHistory,
}

impl<C> StateMachine<C> {
    /// Start configuring a machine.
    pub fn builder(name: impl Into<String>) -> StateMachineBuilder<C> {
        StateMachineBuilder::new(name)
    }

    pub(crate) fn from_parts(name: String, graph: StateGraph<C>, history: StateHistory) -> Self {
        Self {
            name,
            graph,
            history,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The state the machine is in, if one has been set.
    pub fn current_state(&self) -> Option<&State> {
        self.graph.current()
    }

    pub fn graph(&self) -> &StateGraph<C> {
        &self.graph
    }

    /// Transitions committed so far, bounded by the builder's
    /// `history_limit`.
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    pub fn is_registered_state(&self, state: &str) -> bool {
        self.graph.is_registered_state(state)
    }

    pub fn is_registered_event(&self, event: &str) -> bool {
        self.graph.is_registered_event(event)
    }

    /// The transition declared for `event` out of `source`.
    pub fn transition(&self, source: &str, event: &str) -> Option<&Transition<C>> {
        self.graph.table.get(source, event)
    }

    /// Candidate targets declared for `event` out of `source`.
    pub fn candidates(&self, source: &str, event: &str) -> Option<&[State]> {
        self.transition(source, event)
            .map(|transition| transition.targets.as_slice())
    }

    /// Events with a transition out of the current state, sorted.
    pub fn available_events(&self) -> Vec<&Event> {
        match self.graph.current() {
            Some(state) => self.graph.table.events_from(state.name()),
            None => Vec::new(),
        }
    }

    /// Fire `event` from the current state.
    ///
    /// The current state and the event must both be registered, and a
    /// transition must exist for the pair; otherwise nothing runs. The
    /// transition's processor (or [`NoopProcessor`]) sees `on_exit` before
    /// the action runs. If the action fails, or settles on a state outside
    /// the declared candidates, `on_action_failure` runs and the machine
    /// stays where it was. Otherwise the machine moves, records the
    /// transition and calls `on_enter`.
    ///
    /// Hook errors are logged and never change the outcome.
    pub fn trigger(&mut self, ctx: &C, event: impl AsRef<str>) -> Result<State, TriggerError> {
        let event_name = event.as_ref();

        let from = match self.graph.current.as_ref() {
            Some(state) if self.graph.states.contains_key(state) => state.clone(),
            other => {
                return Err(TriggerError::UnknownState {
                    state: other.cloned().unwrap_or_default(),
                })
            }
        };

        if !self.graph.events.contains_key(event_name) {
            return Err(TriggerError::UnknownEvent {
                event: Event::from(event_name),
            });
        }

        let Some(transition) = self.graph.table.get(from.name(), event_name) else {
            return Err(TriggerError::NoTransitionDefined {
                state: from,
                event: Event::from(event_name),
            });
        };

        let event = transition.event.clone();
        let candidates = transition.targets.as_slice();
        let processor: &dyn EventProcessor<C> =
            transition.processor.as_deref().unwrap_or(&NoopProcessor);

        log_hook_failure(&self.name, "on_exit", processor.on_exit(ctx, &from, &event));

        let to = match (transition.action)(ctx, &from, &event, candidates) {
            Ok(to) => to,
            Err(source) => {
                let error = TriggerError::ActionFailed {
                    from: from.clone(),
                    event: event.clone(),
                    source,
                };
                tracing::warn!(machine = %self.name, "{error}");
                log_hook_failure(
                    &self.name,
                    "on_action_failure",
                    processor.on_action_failure(ctx, &from, &event, candidates, &error),
                );
                self.graph.current = Some(from);
                return Err(error);
            }
        };

        if !candidates.contains(&to) {
            let error = TriggerError::InvalidResultState {
                returned: to,
                candidates: candidates.to_vec(),
            };
            tracing::warn!(machine = %self.name, from = %from, event = %event, "{error}");
            log_hook_failure(
                &self.name,
                "on_action_failure",
                processor.on_action_failure(ctx, &from, &event, candidates, &error),
            );
            self.graph.current = Some(from);
            return Err(error);
        }

        tracing::debug!(
            machine = %self.name,
            from = %from,
            event = %event,
            to = %to,
            "transition committed"
        );
        self.graph.current = Some(to.clone());
        self.history.push(TransitionRecord {
            from,
            event,
            to: to.clone(),
            timestamp: Utc::now(),
        });

        log_hook_failure(&self.name, "on_enter", processor.on_enter(ctx, &to));

        Ok(to)
    }
}

fn log_hook_failure(machine: &str, hook: &str, result: HookResult) {
    if let Err(error) = result {
        tracing::warn!(machine = %machine, hook = hook, "ignoring hook failure: {error}");
    }
}

impl<C> fmt::Debug for StateMachine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("name", &self.name)
            .field("current", &self.graph.current)
            .field("transitions", &self.graph.table.len())
            .field("history", &self.history.len())
            .finish()
    }
}
