//! Builder for constructing machine configurations.

use crate::core::{ConfigError, EventId, MachineConfig, StateDefinition, StateId};
use indexmap::IndexMap;

/// Builder for constructing a [`MachineConfig`] with a fluent API.
///
/// States are declared in the order they are first mentioned, either
/// explicitly with [`state`](Self::state) or as the source of a
/// [`transition`](Self::transition).
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: IndexMap<StateId, StateDefinition>,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state. Declaring an existing state keeps its transitions.
    pub fn state(mut self, state: impl Into<StateId>) -> Self {
        self.states.entry(state.into()).or_default();
        self
    }

    /// Add a transition rule, declaring `from` if needed.
    ///
    /// `to` is not declared implicitly; it must be declared on its own.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_default()
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<MachineConfig, ConfigError> {
        let initial = self.initial.ok_or(ConfigError::MissingInitial)?;
        let config = MachineConfig::new(initial, self.states);
        config.validate()?;
        Ok(config)
    }
}
