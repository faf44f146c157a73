//! Error types for configuration loading and state machine operations.

use thiserror::Error;

/// Errors found while loading or validating a [`MachineConfig`](super::MachineConfig).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No configuration supplied")]
    Missing,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitial,

    #[error("Initial state '{initial}' is not declared in states")]
    UnknownInitial { initial: String },

    #[error("Transition '{event}' from '{state}' targets undeclared state '{target}'")]
    UnknownTarget {
        state: String,
        event: String,
        target: String,
    },

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Errors returned by [`StateMachine`](super::StateMachine) operations.
///
/// A failed call never mutates the machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateMachineError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("Unknown state '{state}'")]
    UnknownState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoSuchTransition { state: String, event: String },
}

/// Result alias for state machine operations.
pub type Result<T, E = StateMachineError> = std::result::Result<T, E>;
