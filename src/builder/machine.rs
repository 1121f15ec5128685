//! Builder for constructing state machines.

use crate::core::{Configuration, FsmError, Result, StateDefinition, StateTable};
use crate::engine::StateMachine;

/// Builder for constructing state machines with a fluent API.
///
/// States are declared in the order they are first mentioned, whether by
/// [`state`](Self::state) or by [`transition`](Self::transition).
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    initial: Option<String>,
    states: StateTable,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with a full definition, replacing any earlier one.
    pub fn state(mut self, name: impl Into<String>, definition: StateDefinition) -> Self {
        self.states.insert(name, definition);
        self
    }

    /// Add a single transition, declaring `from` if it is new.
    ///
    /// `to` is not declared implicitly.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        event: impl Into<String>,
        to: impl Into<String>,
    ) -> Self {
        let from = from.into();
        match self.states.get_mut(&from) {
            Some(definition) => {
                definition.transitions.insert(event.into(), to.into());
            }
            None => {
                self.states.insert(from, StateDefinition::new().on(event, to));
            }
        }
        self
    }

    /// Produce the configuration without building a machine.
    /// Returns an error if the initial state is missing.
    pub fn config(self) -> Result<Configuration> {
        let initial = self.initial.ok_or_else(|| {
            FsmError::configuration(
                "initial state not specified. Call .initial(state) before .build()",
            )
        })?;

        Ok(Configuration {
            initial,
            states: self.states,
        })
    }

    /// Build the state machine.
    /// Returns an error if the initial state is missing.
    pub fn build(self) -> Result<StateMachine> {
        self.config().map(StateMachine::new)
    }
}
