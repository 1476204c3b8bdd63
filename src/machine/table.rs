//! Two-level transition table: source state, then event.

use crate::core::{Event, State};
use crate::machine::transition::{normalize_targets, Transition};
use std::collections::HashMap;

/// Lookup table from `(source, event)` to its transition.
///
/// Declaring the same `(source, event)` pair twice does not create a
/// second record. The new targets are merged into the existing record,
/// while the action and processor of the first declaration are kept.
pub struct TransitionTable<C> {
    transitions: HashMap<State, HashMap<Event, Transition<C>>>,
}

impl<C> TransitionTable<C> {
    pub fn new() -> Self {
        Self {
            transitions: HashMap::new(),
        }
    }

    /// Insert a declaration, merging it into any existing record for the
    /// same source and event.
    pub fn insert(&mut self, mut transition: Transition<C>) {
        let events = self
            .transitions
            .entry(transition.source.clone())
            .or_default();

        match events.get_mut(&transition.event) {
            Some(existing) => {
                existing.targets.append(&mut transition.targets);
                normalize_targets(&mut existing.targets);
                tracing::debug!(
                    source = %existing.source,
                    event = %existing.event,
                    targets = ?existing.targets,
                    "merged repeated transition declaration"
                );
            }
            None => {
                normalize_targets(&mut transition.targets);
                events.insert(transition.event.clone(), transition);
            }
        }
    }

    /// The transition fired by `event` while in `source`, if declared.
    pub fn get(&self, source: &str, event: &str) -> Option<&Transition<C>> {
        self.transitions.get(source)?.get(event)
    }

    /// Events that have a transition out of `source`, sorted.
    pub fn events_from(&self, source: &str) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .transitions
            .get(source)
            .map(|events| events.keys().collect())
            .unwrap_or_default();
        events.sort();
        events
    }

    /// Iterate over every transition, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition<C>> {
        self.transitions.values().flat_map(|events| events.values())
    }

    /// Number of distinct `(source, event)` pairs.
    pub fn len(&self) -> usize {
        self.transitions.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<C> Default for TransitionTable<C> {
    fn default() -> Self {
        Self::new()
    }
}
