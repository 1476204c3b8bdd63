//! Core identifier and history types.
//!
//! This module contains the plain data the engine works with:
//! - State and event identifiers, plus their label maps
//! - Bounded history of committed transitions

mod history;
mod state;

pub use history::{StateHistory, TransitionRecord, DEFAULT_HISTORY_LIMIT};
pub use state::{Event, EventLabels, State, StateLabels};
