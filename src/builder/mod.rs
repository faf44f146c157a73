//! Builder API for ergonomic configuration and machine construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! machines in code rather than loading them from JSON.

pub mod config;
pub mod machine;
pub mod macros;

pub use config::ConfigBuilder;
pub use machine::StateMachineBuilder;

use crate::core::{EventId, StateId};

/// Start a configuration where `event` moves each state to the next and the
/// last state back to the first.
///
/// The first state becomes the initial state. Further states and
/// transitions can be added before calling `build`.
///
/// # Example
///
/// ```
/// use statewise::builder::cycle;
/// use statewise::StateMachine;
///
/// let config = cycle(["red", "green", "yellow"], "next").build().unwrap();
/// let mut light = StateMachine::new(config).unwrap();
///
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// light.trigger("next").unwrap();
/// assert_eq!(light.state(), "red");
/// ```
pub fn cycle<I, S>(states: I, event: impl Into<EventId>) -> ConfigBuilder
where
    I: IntoIterator<Item = S>,
    S: Into<StateId>,
{
    let event = event.into();
    let states: Vec<StateId> = states.into_iter().map(Into::into).collect();

    let Some(first) = states.first() else {
        return ConfigBuilder::new();
    };

    let successors = states.iter().skip(1).chain(std::iter::once(first));
    states
        .iter()
        .zip(successors)
        .fold(ConfigBuilder::new().initial(first.clone()), |builder, (from, to)| {
            builder.transition(from.clone(), event.clone(), to.clone())
        })
}
