//! Core state machine types and logic.
//!
//! This module contains the engine and everything it is built from:
//! - Declarative configuration of states and transitions
//! - The navigable undo/redo history
//! - The state machine itself and its error types
//!
//! Every operation is synchronous and in-memory. A failing operation
//! leaves the machine exactly as it was.

mod config;
mod error;
mod history;
mod machine;

pub use config::{EventId, MachineConfig, StateDefinition, StateId};
pub use error::{ConfigError, Result, StateMachineError};
pub use history::{HistoryEntry, StateHistory};
pub use machine::StateMachine;
