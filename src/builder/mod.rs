//! Builder API for configuring state machines.
//!
//! This module provides fluent builders, serializable definitions and a
//! label macro for setting up machines with little boilerplate.

pub mod definition;
pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use definition::MachineDefinition;
pub use error::{BuildError, DefinitionError};
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Event, State};
use crate::machine::{ActionError, Transition};

/// Action that always settles on the first declared candidate.
///
/// Candidates are kept sorted, so this is the lexicographically smallest
/// target. Refuses when there are no candidates.
pub fn first_candidate<C>(
    _ctx: &C,
    _from: &State,
    _event: &Event,
    candidates: &[State],
) -> Result<State, ActionError> {
    candidates
        .first()
        .cloned()
        .ok_or_else(|| ActionError::refused("transition has no candidate states"))
}

/// Create a transition with a single target that always succeeds.
///
/// # Example
///
/// ```
/// use transitions::builder::simple_transition;
///
/// let transition = simple_transition::<()>("Initial", "Create", "WaitPay");
/// assert_eq!(transition.targets, vec!["WaitPay"]);
/// ```
pub fn simple_transition<C: 'static>(
    from: impl Into<State>,
    event: impl Into<Event>,
    to: impl Into<State>,
) -> Transition<C> {
    let to: State = to.into();
    Transition::new(from, event, [to], first_candidate::<C>)
}
