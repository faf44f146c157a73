//! Declarative state machine configuration.
//!
//! A configuration names an initial state and, for every state, the events
//! it reacts to and the state each event leads to. Declaration order is
//! preserved so that state enumeration is stable and reproducible.

use super::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a state.
pub type StateId = String;

/// Identifier of an event.
pub type EventId = String;

/// Transition rules of a single state.
///
/// # Example
///
/// ```rust
/// use statewise::core::StateDefinition;
///
/// let green = StateDefinition::new().on("next", "yellow");
/// assert_eq!(green.target("next"), Some("yellow"));
/// assert_eq!(green.target("stop"), None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event id -> target state id
    #[serde(default)]
    pub transitions: IndexMap<EventId, StateId>,
}

impl StateDefinition {
    /// Create a state with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition rule, replacing any previous target for `event`.
    pub fn on(mut self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state reacts to it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete configuration of a state machine.
///
/// Deserializes from the shape
/// `{"initial": "...", "states": {"<state>": {"transitions": {"<event>": "<state>"}}}}`.
///
/// # Example
///
/// ```rust
/// use statewise::core::MachineConfig;
///
/// let config = MachineConfig::from_json(r#"{
///     "initial": "green",
///     "states": {
///         "green":  { "transitions": { "next": "yellow" } },
///         "yellow": { "transitions": { "next": "red" } },
///         "red":    { "transitions": { "next": "green" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "green");
/// assert_eq!(config.state_ids(), vec!["green", "yellow", "red"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in
    pub initial: StateId,
    /// All declared states, in declaration order
    #[serde(default)]
    pub states: IndexMap<StateId, StateDefinition>,
}

impl MachineConfig {
    /// Create a configuration. No validation is performed here.
    pub fn new(initial: impl Into<StateId>, states: IndexMap<StateId, StateDefinition>) -> Self {
        Self {
            initial: initial.into(),
            states,
        }
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the initial state and every transition target are declared.
    ///
    /// Reports the first problem found, walking states in declaration order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UnknownInitial {
                initial: self.initial.clone(),
            });
        }

        for (state, definition) in &self.states {
            for (event, target) in &definition.transitions {
                if !self.contains_state(target) {
                    return Err(ConfigError::UnknownTarget {
                        state: state.clone(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn contains_state(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Definition of `state`, if declared.
    pub fn state(&self, state: &str) -> Option<&StateDefinition> {
        self.states.get(state)
    }

    /// All state ids in declaration order.
    pub fn state_ids(&self) -> Vec<&str> {
        self.states.keys().map(String::as_str).collect()
    }

    /// Ids of the states that define a transition for `event`, in declaration order.
    pub fn states_with_event(&self, event: &str) -> Vec<&str> {
        self.states
            .iter()
            .filter(|(_, definition)| definition.handles(event))
            .map(|(state, _)| state.as_str())
            .collect()
    }

    /// Resolve the target of `event` from `state`.
    pub fn target(&self, state: &str, event: &str) -> Option<&str> {
        self.state(state).and_then(|definition| definition.target(event))
    }
}
