//! Serializable machine definitions.

use crate::builder::error::BuildError;
use crate::core::{EventLabels, State, StateLabels};
use serde::{Deserialize, Serialize};

/// The data half of a machine: its name, registered states and events, and
/// optionally the state to resume from.
///
/// Transitions carry code and are always added through the builder.
///
/// # Example
///
/// ```rust
/// use transitions::builder::MachineDefinition;
///
/// let definition = MachineDefinition::from_json(r#"{
///     "name": "orders",
///     "states": { "WaitPay": "awaiting payment", "Paying": "paying" },
///     "events": { "Pay": "pay the order" },
///     "current_state": "WaitPay"
/// }"#).unwrap();
///
/// assert_eq!(definition.name, "orders");
/// assert_eq!(definition.states.len(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MachineDefinition {
    pub name: String,

    #[serde(default)]
    pub states: StateLabels,

    #[serde(default)]
    pub events: EventLabels,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_state: Option<State>,
}

impl MachineDefinition {
    /// Parse a definition from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the definition as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, BuildError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
