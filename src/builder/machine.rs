//! Builder for constructing state machines.

use crate::core::{ConfigError, MachineConfig, Result, StateMachine};

/// Builder for constructing a [`StateMachine`].
///
/// Building without a configuration fails with
/// [`StateMachineError::InvalidConfiguration`](crate::StateMachineError::InvalidConfiguration).
#[derive(Clone, Debug, Default)]
pub struct StateMachineBuilder {
    config: Option<MachineConfig>,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (required).
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the state machine.
    pub fn build(self) -> Result<StateMachine> {
        let config = self.config.ok_or(ConfigError::Missing)?;
        StateMachine::new(config)
    }
}
