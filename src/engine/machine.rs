//! State machine that applies event-driven transitions with undo/redo.

use crate::core::{Configuration, FsmError, History, Result};
use crate::engine::transition::TransitionMode;
use tracing::{debug, trace, warn};

/// A finite state machine over string-identified states and events.
///
/// Mutating operations take `&mut self`; share an instance across threads
/// only behind a lock of the caller's choosing.
///
/// # Example
///
/// ```rust
/// use rewind::{Configuration, StateDefinition, StateMachine};
///
/// let mut config = Configuration::new("off");
/// config.states.insert("off", StateDefinition::new().on("turnOn", "on"));
/// config.states.insert("on", StateDefinition::new().on("turnOff", "off"));
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("turnOn").unwrap();
/// assert_eq!(machine.current_state(), "on");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "off");
/// assert!(!machine.undo());
///
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Configuration,
    current: String,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// The initial state is not required to be declared. A machine started
    /// in an undeclared state can still `change_state` to a declared one.
    pub fn new(config: Configuration) -> Self {
        if !config.initial_is_defined() {
            warn!(initial = %config.initial, "initial state is not declared");
        }
        let current = config.initial.clone();
        Self {
            config,
            current,
            history: History::new(),
        }
    }

    /// Create a machine from an optional configuration.
    ///
    /// Fails with [`FsmError::Configuration`] when `config` is `None`.
    pub fn create(config: Option<Configuration>) -> Result<Self> {
        config
            .map(Self::new)
            .ok_or_else(|| FsmError::configuration("no configuration supplied"))
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self> {
        Configuration::from_json(json).map(Self::new)
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &str {
        &self.current
    }

    pub fn initial_state(&self) -> &str {
        &self.config.initial
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Get undo/redo history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Whether `state` is declared in the configuration.
    pub fn is_defined(&self, state: &str) -> bool {
        self.config.states.contains(state)
    }

    /// Move directly to `target`.
    ///
    /// Fails with [`FsmError::InvalidState`] if `target` is not declared,
    /// leaving the machine untouched. On success the departed state is
    /// pushed onto the undo stack and the redo stack is dropped.
    pub fn change_state(&mut self, target: &str) -> Result<()> {
        self.apply(Some(target), TransitionMode::Normal)
    }

    /// Move along the transition the current state declares for `event`.
    ///
    /// An event with no transition from the current state fails exactly like
    /// a change to an undeclared state.
    pub fn trigger(&mut self, event: &str) -> Result<()> {
        let target = self
            .config
            .states
            .get(&self.current)
            .and_then(|definition| definition.target(event))
            .map(str::to_string);

        if target.is_none() {
            debug!(state = %self.current, event, "no transition for event");
        }
        self.apply(target.as_deref(), TransitionMode::Normal)
    }

    /// Return to the initial state without touching history.
    pub fn reset(&mut self) {
        debug!(from = %self.current, to = %self.config.initial, "reset");
        self.current = self.config.initial.clone();
    }

    /// State identifiers in declaration order.
    ///
    /// With `Some(event)`, only states that declare a transition for `event`
    /// are returned. `None` and `Some("")` both return every state.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event.filter(|event| !event.is_empty()) {
            None => self.config.states.names().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` and changes nothing when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let previous = match self.history.peek_past() {
            Some(state) if self.is_defined(state) => state.to_string(),
            Some(state) => {
                warn!(state, "undo entry is not a declared state");
                return false;
            }
            None => {
                trace!("nothing to undo");
                return false;
            }
        };

        self.history.pop_past();
        self.history.push_future(self.current.clone());
        self.enter(previous, TransitionMode::Undo);
        true
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` and changes nothing when there is nothing to redo.
    /// The state being left is not pushed back onto the undo stack.
    pub fn redo(&mut self) -> bool {
        let next = match self.history.peek_future() {
            Some(state) if self.is_defined(state) => state.to_string(),
            Some(state) => {
                warn!(state, "redo entry is not a declared state");
                return false;
            }
            None => {
                trace!("nothing to redo");
                return false;
            }
        };

        self.history.pop_future();
        self.enter(next, TransitionMode::Redo);
        true
    }

    /// Whether [`undo`](Self::undo) would change state.
    pub fn can_undo(&self) -> bool {
        self.history
            .peek_past()
            .is_some_and(|state| self.is_defined(state))
    }

    /// Whether [`redo`](Self::redo) would change state.
    pub fn can_redo(&self) -> bool {
        self.history
            .peek_future()
            .is_some_and(|state| self.is_defined(state))
    }

    /// Drop all undo and redo entries.
    pub fn clear_history(&mut self) {
        trace!(
            past = self.history.past().len(),
            future = self.history.future().len(),
            "clearing history"
        );
        self.history.clear();
    }

    fn apply(&mut self, target: Option<&str>, mode: TransitionMode) -> Result<()> {
        match target {
            Some(state) if self.is_defined(state) => {
                self.enter(state.to_string(), mode);
                Ok(())
            }
            _ => Err(FsmError::invalid_state(target)),
        }
    }

    // Callers have already checked that `target` is declared.
    fn enter(&mut self, target: String, mode: TransitionMode) {
        let from = std::mem::replace(&mut self.current, target);
        debug!(from = %from, to = %self.current, mode = %mode, "state changed");
        if mode.records_history() {
            self.history.record(from);
        }
    }
}

impl From<Configuration> for StateMachine {
    fn from(config: Configuration) -> Self {
        Self::new(config)
    }
}
