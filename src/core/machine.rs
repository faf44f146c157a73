//! Configuration-driven state machine with undo/redo.

use super::config::{EventId, MachineConfig, StateId};
use super::error::{Result, StateMachineError};
use super::history::StateHistory;
use indexmap::IndexMap;
use tracing::{debug, trace};

/// Finite state machine driven by a [`MachineConfig`].
///
/// The machine tracks a current state, moves between states either by
/// direct jumps ([`change_state`](Self::change_state)) or by events
/// ([`trigger`](Self::trigger)), and records every move in a
/// [`StateHistory`] that can be navigated with [`undo`](Self::undo) and
/// [`redo`](Self::redo).
///
/// # Example
///
/// ```rust
/// use statewise::machine_config;
/// use statewise::StateMachine;
///
/// let config = machine_config! {
///     initial: "green",
///     states: {
///         "green" => { "next" => "yellow" },
///         "yellow" => { "next" => "red" },
///         "red" => { "next" => "green" },
///     }
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("next").unwrap();
/// machine.trigger("next").unwrap();
/// assert_eq!(machine.state(), "red");
///
/// assert!(machine.undo());
/// assert_eq!(machine.state(), "yellow");
/// assert!(machine.redo());
/// assert_eq!(machine.state(), "red");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: MachineConfig,
    history: StateHistory,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails with [`StateMachineError::InvalidConfiguration`] if the initial
    /// state or any transition target is not a declared state.
    pub fn new(config: MachineConfig) -> Result<Self> {
        config.validate()?;
        debug!(initial = %config.initial, states = config.states.len(), "state machine created");
        let history = StateHistory::new(config.initial.clone());
        Ok(Self { config, history })
    }

    /// Parse a JSON configuration and create a machine from it.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(MachineConfig::from_json(json)?)
    }

    /// The current state.
    pub fn state(&self) -> &str {
        self.history.current()
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// Jump straight to `state`, ignoring transition rules.
    ///
    /// The jump is recorded in history even when `state` is already current.
    pub fn change_state(&mut self, state: &str) -> Result<()> {
        if !self.config.contains_state(state) {
            return Err(StateMachineError::UnknownState {
                state: state.to_string(),
            });
        }
        debug!(from = %self.state(), to = %state, "changing state");
        self.history.record(state);
        Ok(())
    }

    /// Fire `event` from the current state.
    ///
    /// Fails with [`StateMachineError::NoSuchTransition`] if the current
    /// state defines no transition for `event`.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let target = self
            .config
            .target(self.state(), event)
            .map(str::to_string)
            .ok_or_else(|| StateMachineError::NoSuchTransition {
                state: self.state().to_string(),
                event: event.to_string(),
            })?;
        debug!(%event, from = %self.state(), to = %target, "triggering transition");
        self.change_state(&target)
    }

    /// Return to the initial state, recording it as a new history entry.
    pub fn reset(&mut self) {
        debug!(from = %self.state(), to = %self.config.initial, "resetting to initial state");
        self.history.record(self.config.initial.clone());
    }

    /// States that handle `event`, or every state when `event` is `None`.
    ///
    /// Both forms return ids in declaration order.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            Some(event) => self.config.states_with_event(event),
            None => self.config.state_ids(),
        }
    }

    /// Every declared state, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.get_states(None)
    }

    /// Declared states that define a transition for `event`.
    pub fn states_for(&self, event: &str) -> Vec<&str> {
        self.get_states(Some(event))
    }

    /// Transitions available from the current state.
    pub fn transitions(&self) -> Option<&IndexMap<EventId, StateId>> {
        self.config
            .state(self.state())
            .map(|definition| &definition.transitions)
    }

    pub fn can_trigger(&self, event: &str) -> bool {
        self.config.target(self.state(), event).is_some()
    }

    /// Step back to the previous history entry.
    ///
    /// Returns `false` without changing anything when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            trace!(state = %self.state(), index = self.history.index(), "undo");
        }
        moved
    }

    /// Step forward to the next history entry.
    ///
    /// Returns `false` without changing anything when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            trace!(state = %self.state(), index = self.history.index(), "redo");
        }
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Drop all history except the current state.
    pub fn clear_history(&mut self) {
        debug!(state = %self.state(), discarded = self.history.entries().len() - 1, "clearing history");
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, StateDefinition};

    fn traffic_light() -> MachineConfig {
        let mut states = IndexMap::new();
        states.insert("green".to_string(), StateDefinition::new().on("next", "yellow"));
        states.insert("yellow".to_string(), StateDefinition::new().on("next", "red"));
        states.insert(
            "red".to_string(),
            StateDefinition::new().on("next", "green").on("fault", "yellow"),
        );
        MachineConfig::new("green", states)
    }

    fn machine() -> StateMachine {
        StateMachine::new(traffic_light()).unwrap()
    }

    #[test]
    fn starts_in_initial_state() {
        let mut machine = machine();
        assert_eq!(machine.state(), "green");
        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.history().path(), vec!["green"]);
    }

    #[test]
    fn invalid_initial_is_rejected() {
        let mut config = traffic_light();
        config.initial = "blue".to_string();

        let result = StateMachine::new(config);
        assert!(matches!(
            result,
            Err(StateMachineError::InvalidConfiguration(
                ConfigError::UnknownInitial { .. }
            ))
        ));
    }

    #[test]
    fn dangling_target_is_rejected() {
        let mut config = traffic_light();
        config
            .states
            .insert("red".to_string(), StateDefinition::new().on("next", "blue"));

        let result = StateMachine::new(config);
        assert!(matches!(
            result,
            Err(StateMachineError::InvalidConfiguration(
                ConfigError::UnknownTarget { .. }
            ))
        ));
    }

    #[test]
    fn unparsable_json_is_invalid_configuration() {
        let result = StateMachine::from_json("not json");
        assert!(matches!(
            result,
            Err(StateMachineError::InvalidConfiguration(ConfigError::Parse(_)))
        ));
    }

    #[test]
    fn traffic_light_scenario() {
        let mut machine = machine();

        machine.trigger("next").unwrap();
        assert_eq!(machine.state(), "yellow");
        machine.trigger("next").unwrap();
        assert_eq!(machine.state(), "red");

        assert!(machine.undo());
        assert_eq!(machine.state(), "yellow");
        assert!(machine.undo());
        assert_eq!(machine.state(), "green");
        assert!(!machine.undo());
        assert_eq!(machine.state(), "green");

        assert!(machine.redo());
        assert_eq!(machine.state(), "yellow");
    }

    #[test]
    fn change_state_jumps_regardless_of_rules() {
        let mut machine = machine();
        machine.change_state("red").unwrap();
        assert_eq!(machine.state(), "red");

        assert!(machine.undo());
        assert_eq!(machine.state(), "green");
    }

    #[test]
    fn change_state_to_current_records_entry() {
        let mut machine = machine();
        machine.change_state("green").unwrap();
        assert_eq!(machine.history().path(), vec!["green", "green"]);
        assert!(machine.can_undo());
    }

    #[test]
    fn unknown_state_leaves_machine_untouched() {
        let mut machine = machine();
        machine.trigger("next").unwrap();

        let result = machine.change_state("blue");

        assert_eq!(
            result,
            Err(StateMachineError::UnknownState {
                state: "blue".to_string()
            })
        );
        assert_eq!(machine.state(), "yellow");
        assert_eq!(machine.history().path(), vec!["green", "yellow"]);
        assert_eq!(machine.history().index(), 1);
    }

    #[test]
    fn missing_event_leaves_machine_untouched() {
        let mut machine = machine();

        let result = machine.trigger("missing-event");

        assert_eq!(
            result,
            Err(StateMachineError::NoSuchTransition {
                state: "green".to_string(),
                event: "missing-event".to_string(),
            })
        );
        assert_eq!(machine.state(), "green");
        assert_eq!(machine.history().path(), vec!["green"]);
    }

    #[test]
    fn event_defined_elsewhere_is_not_available() {
        let mut machine = machine();
        assert!(!machine.can_trigger("fault"));
        assert!(machine.trigger("fault").is_err());

        machine.change_state("red").unwrap();
        assert!(machine.can_trigger("fault"));
        machine.trigger("fault").unwrap();
        assert_eq!(machine.state(), "yellow");
    }

    #[test]
    fn reset_records_initial_as_new_entry() {
        let mut machine = machine();
        machine.trigger("next").unwrap();
        machine.reset();

        assert_eq!(machine.state(), "green");
        assert_eq!(machine.history().path(), vec!["green", "yellow", "green"]);
        assert!(machine.undo());
        assert_eq!(machine.state(), "yellow");
    }

    #[test]
    fn new_branch_discards_redo_tail() {
        let mut machine = machine();
        machine.trigger("next").unwrap();
        machine.trigger("next").unwrap();
        machine.undo();
        machine.undo();

        machine.change_state("red").unwrap();

        assert_eq!(machine.history().path(), vec!["green", "red"]);
        assert!(!machine.redo());
    }

    #[test]
    fn get_states_lists_all_or_filters_by_event() {
        let machine = machine();
        assert_eq!(machine.get_states(None), vec!["green", "yellow", "red"]);
        assert_eq!(machine.get_states(Some("fault")), vec!["red"]);
        assert!(machine.get_states(Some("missing")).is_empty());
        assert_eq!(machine.states(), machine.get_states(None));
        assert_eq!(machine.states_for("next"), vec!["green", "yellow", "red"]);
    }

    #[test]
    fn queries_do_not_touch_history() {
        let mut machine = machine();
        machine.trigger("next").unwrap();
        machine.undo();

        let _ = machine.state();
        let _ = machine.get_states(None);
        let _ = machine.get_states(Some("next"));
        let _ = machine.transitions();
        let _ = machine.can_trigger("next");

        assert_eq!(machine.history().path(), vec!["green", "yellow"]);
        assert_eq!(machine.history().index(), 0);
    }

    #[test]
    fn transitions_reflect_current_state() {
        let mut machine = machine();
        machine.change_state("red").unwrap();

        let transitions = machine.transitions().unwrap();
        assert_eq!(transitions.len(), 2);
        assert_eq!(transitions.get("fault").map(String::as_str), Some("yellow"));
    }

    #[test]
    fn clear_history_disables_undo_and_redo() {
        let mut machine = machine();
        machine.trigger("next").unwrap();
        machine.trigger("next").unwrap();
        machine.undo();

        machine.clear_history();

        assert_eq!(machine.state(), "yellow");
        assert!(!machine.undo());
        assert!(!machine.redo());
        assert_eq!(machine.history().path(), vec!["yellow"]);
    }
}
