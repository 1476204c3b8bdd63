//! Transitions: an event-driven finite state machine engine.
//!
//! A machine is configured with a table of transitions. Each transition
//! names a source state, the event that fires it, the states it may land
//! on, and an action that decides which of those it actually lands on.
//! Firing an event runs the action and only commits a result that was
//! declared; anything else leaves the machine where it was.
//!
//! # Core Concepts
//!
//! - **State / Event**: opaque names, valid only once registered
//! - **Transition**: `(source, event, candidates, action, processor)`
//! - **Processor**: hooks observing exit, enter and failure
//! - **History**: committed transitions, oldest first
//!
//! # Example
//!
//! ```rust
//! use transitions::builder::simple_transition;
//! use transitions::labels;
//! use transitions::core::{Event, State};
//! use transitions::machine::{StateMachine, Transition};
//!
//! struct Order {
//!     paid: bool,
//! }
//!
//! let mut machine = StateMachine::builder("orders")
//!     .states(labels! {
//!         "Initial" => "start",
//!         "WaitPay" => "awaiting payment",
//!         "PaySuccess" => "paid",
//!         "PayFail" => "payment failed",
//!     })
//!     .events(labels! { "Create" => "create order", "Pay" => "pay" })
//!     .transition(simple_transition("Initial", "Create", "WaitPay"))
//!     .transition(Transition::new(
//!         "WaitPay",
//!         "Pay",
//!         ["PaySuccess", "PayFail"],
//!         |order: &Order, _: &State, _: &Event, _: &[State]| {
//!             Ok(State::from(if order.paid { "PaySuccess" } else { "PayFail" }))
//!         },
//!     ))
//!     .build();
//!
//! let order = Order { paid: false };
//! machine.trigger(&order, "Create").unwrap();
//! let state = machine.trigger(&order, "Pay").unwrap();
//!
//! assert_eq!(state, "PayFail");
//! assert_eq!(machine.history().get_path().len(), 3);
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{MachineDefinition, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{
    Event, EventLabels, State, StateHistory, StateLabels, TransitionRecord, DEFAULT_HISTORY_LIMIT,
};
pub use machine::{
    ActionError, EventProcessor, HookError, NoopProcessor, StateMachine, Transition,
    TriggerError,
};
