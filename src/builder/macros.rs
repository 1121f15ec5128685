//! Macros for ergonomic state machine construction.

/// Build a [`Configuration`](crate::core::Configuration) from a literal
/// description.
///
/// # Example
///
/// ```
/// use rewind::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: "off",
///     states: {
///         "off" => { "turnOn" => "on" },
///         "on" => { "turnOff" => "off" },
///         "broken" => {},
///     }
/// };
///
/// let machine = StateMachine::new(config);
/// assert_eq!(machine.states(None), vec!["off", "on", "broken"]);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut config = $crate::core::Configuration::new($initial);
        $(
            config.states.insert(
                $state,
                $crate::core::StateDefinition::new()$(.on($event, $target))*,
            );
        )*
        config
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fsm_config_macro_builds_configuration() {
        let config = fsm_config! {
            initial: "off",
            states: {
                "off" => { "turnOn" => "on" },
                "on" => { "turnOff" => "off", "smash" => "broken" },
            }
        };

        assert_eq!(config.initial, "off");
        assert_eq!(config.states.names().collect::<Vec<_>>(), vec!["off", "on"]);
        assert_eq!(config.states.get("on").unwrap().target("smash"), Some("broken"));
    }

    #[test]
    fn fsm_config_accepts_empty_states() {
        let config = fsm_config! {
            initial: "only",
            states: {
                "only" => {},
            },
        };

        assert!(config.states.get("only").unwrap().transitions.is_empty());
        assert!(config.initial_is_defined());
    }

    #[test]
    fn fsm_config_accepts_owned_identifiers() {
        let initial = String::from("a");
        let config = fsm_config! {
            initial: initial.clone(),
            states: {
                initial => { "loop" => "a" }
            }
        };

        assert!(config.states.get("a").unwrap().handles("loop"));
    }
}
