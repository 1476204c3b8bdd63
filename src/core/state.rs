//! State and event identifiers.
//!
//! Both are opaque names. The engine attaches no meaning to them beyond
//! equality, ordering and whether they were registered with a machine.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// The identifier's name.
            pub fn name(&self) -> &str {
                &self.0
            }

            /// True when the name is empty or only whitespace.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_string())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&$name> for $name {
            fn from(id: &$name) -> Self {
                id.clone()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

identifier! {
    /// Name of a state an entity can be in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use transitions::core::State;
    ///
    /// let paid = State::from("Paid");
    /// assert_eq!(paid.name(), "Paid");
    /// assert!(!paid.is_blank());
    /// assert!(State::from("  ").is_blank());
    /// ```
    State
}

identifier! {
    /// Name of an event that may move an entity between states.
    Event
}

/// Registered states with a human-readable description for each.
pub type StateLabels = HashMap<State, String>;

/// Registered events with a human-readable description for each.
pub type EventLabels = HashMap<Event, String>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_returns_wrapped_string() {
        assert_eq!(State::from("Initial").name(), "Initial");
        assert_eq!(Event::new(String::from("Pay")).name(), "Pay");
    }

    #[test]
    fn blank_detects_empty_and_whitespace() {
        assert!(State::from("").is_blank());
        assert!(State::from(" \t").is_blank());
        assert!(!State::from("WaitPay").is_blank());
    }

    #[test]
    fn states_order_lexicographically() {
        let mut states = vec![
            State::from("WaitSend"),
            State::from("Initial"),
            State::from("Paying"),
        ];
        states.sort();

        assert_eq!(states, vec!["Initial", "Paying", "WaitSend"]);
    }

    #[test]
    fn labels_can_be_looked_up_by_str() {
        let mut labels = StateLabels::new();
        labels.insert(State::from("WaitPay"), "awaiting payment".to_string());

        assert_eq!(labels.get("WaitPay").map(String::as_str), Some("awaiting payment"));
        assert!(!labels.contains_key("Paid"));
    }

    #[test]
    fn identifiers_serialize_as_plain_strings() {
        let json = serde_json::to_string(&Event::from("Create")).unwrap();
        assert_eq!(json, "\"Create\"");

        let state: State = serde_json::from_str("\"Paying\"").unwrap();
        assert_eq!(state, "Paying");
    }

    #[test]
    fn display_prints_name() {
        assert_eq!(format!("{}", State::from("PayFail")), "PayFail");
    }
}
