//! Statewise: a configuration-driven finite state machine with undo/redo
//!
//! A machine is described declaratively by an initial state and, per state,
//! a mapping from events to target states. The engine tracks the current
//! state, applies transitions on demand and keeps a linear history of every
//! state it has visited so callers can step backwards and forwards through it.
//!
//! # Core Concepts
//!
//! - **Configuration**: `MachineConfig`, built in code or loaded from JSON
//! - **Machine**: `StateMachine`, the engine that applies transitions
//! - **History**: `StateHistory`, the undo/redo log behind the machine
//!
//! # Example
//!
//! ```rust
//! use statewise::{ConfigBuilder, StateMachine, StateMachineError};
//!
//! let config = ConfigBuilder::new()
//!     .initial("closed")
//!     .transition("closed", "open", "opened")
//!     .transition("opened", "close", "closed")
//!     .transition("closed", "lock", "locked")
//!     .transition("locked", "unlock", "closed")
//!     .build()
//!     .unwrap();
//!
//! let mut door = StateMachine::new(config).unwrap();
//! door.trigger("lock").unwrap();
//!
//! assert_eq!(
//!     door.trigger("open"),
//!     Err(StateMachineError::NoSuchTransition {
//!         state: "locked".to_string(),
//!         event: "open".to_string(),
//!     })
//! );
//!
//! assert!(door.undo());
//! assert_eq!(door.state(), "closed");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{ConfigBuilder, StateMachineBuilder};
pub use crate::core::{
    ConfigError, MachineConfig, StateDefinition, StateHistory, StateMachine, StateMachineError,
};
