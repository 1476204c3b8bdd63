//! The transition engine.
//!
//! # Key Concepts
//!
//! - **Transitions**: `(source, event, candidates, action, processor)` rules,
//!   merged into a two-level table keyed by source state and event
//! - **Processors**: optional hooks run on exit, on enter and on failure
//! - **State Machine**: owns the graph and dispatches events with
//!   rollback when the action fails or returns an undeclared state
//!
//! # Example
//!
//! ```rust
//! use transitions::builder::first_candidate;
//! use transitions::labels;
//! use transitions::machine::{StateMachine, Transition};
//!
//! let mut machine = StateMachine::builder("orders")
//!     .states(labels! { "Initial" => "start", "WaitPay" => "awaiting payment" })
//!     .events(labels! { "Create" => "create order" })
//!     .transition(Transition::new("Initial", "Create", ["WaitPay"], first_candidate))
//!     .build();
//!
//! let state = machine.trigger(&(), "Create").unwrap();
//! assert_eq!(state, "WaitPay");
//! ```

mod error;
mod graph;
mod processor;
mod state_machine;
mod table;
mod transition;

pub use error::{ActionError, HookError, HookResult, TriggerError};
pub use graph::StateGraph;
pub use processor::{EventProcessor, NoopProcessor, TracingProcessor};
pub use state_machine::StateMachine;
pub use table::TransitionTable;
pub use transition::{Action, ProcessorRef, Transition};
