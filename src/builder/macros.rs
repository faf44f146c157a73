//! Macros for declaring configurations in code.

/// Build a validated [`MachineConfig`](crate::MachineConfig) from a literal
/// description.
///
/// Expands to a `Result<MachineConfig, ConfigError>`. Every state listed on
/// the left of `=>` is declared, in order, even if it has no transitions.
///
/// # Example
///
/// ```
/// use statewise::machine_config;
///
/// let config = machine_config! {
///     initial: "pending",
///     states: {
///         "pending" => { "approve" => "approved", "reject" => "rejected" },
///         "approved" => {},
///         "rejected" => { "resubmit" => "pending" },
///     }
/// }
/// .unwrap();
///
/// assert_eq!(config.state_ids(), vec!["pending", "approved", "rejected"]);
/// assert_eq!(config.states_with_event("resubmit"), vec!["rejected"]);
/// ```
#[macro_export]
macro_rules! machine_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let builder = $crate::builder::ConfigBuilder::new().initial($initial);
        $(
            let state: $crate::core::StateId = ::std::convert::Into::into($state);
            let builder = builder.state(state.clone());
            $(
                let builder = builder.transition(state.clone(), $event, $target);
            )*
        )*
        builder.build()
    }};
}
