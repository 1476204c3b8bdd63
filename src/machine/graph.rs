//! The state graph owned by a single machine.

use crate::core::{Event, EventLabels, State, StateLabels};
use crate::machine::table::TransitionTable;
use crate::machine::transition::Transition;

/// Registered states and events, the transition table, and the state the
/// machine is currently in.
pub struct StateGraph<C> {
    pub(crate) states: StateLabels,
    pub(crate) events: EventLabels,
    pub(crate) current: Option<State>,
    pub(crate) table: TransitionTable<C>,
}

impl<C> StateGraph<C> {
    pub fn new() -> Self {
        Self {
            states: StateLabels::new(),
            events: EventLabels::new(),
            current: None,
            table: TransitionTable::new(),
        }
    }

    /// Merge transitions into the table.
    ///
    /// When no current state has been set yet, the first declaration's
    /// source becomes the current state.
    pub fn register(&mut self, transitions: impl IntoIterator<Item = Transition<C>>) {
        for transition in transitions {
            if self.current.is_none() {
                self.current = Some(transition.source.clone());
            }
            self.table.insert(transition);
        }
    }

    pub fn is_registered_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    pub fn is_registered_event(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Description registered for `state`.
    pub fn state_label(&self, state: &str) -> Option<&str> {
        self.states.get(state).map(String::as_str)
    }

    /// Description registered for `event`.
    pub fn event_label(&self, event: &str) -> Option<&str> {
        self.events.get(event).map(String::as_str)
    }

    pub fn current(&self) -> Option<&State> {
        self.current.as_ref()
    }

    pub fn table(&self) -> &TransitionTable<C> {
        &self.table
    }

    /// Registered states, sorted.
    pub fn states(&self) -> Vec<&State> {
        let mut states: Vec<&State> = self.states.keys().collect();
        states.sort();
        states
    }

    /// Registered events, sorted.
    pub fn events(&self) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.keys().collect();
        events.sort();
        events
    }
}

impl<C> Default for StateGraph<C> {
    fn default() -> Self {
        Self::new()
    }
}
