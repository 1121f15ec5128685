//! Declarative state machine configuration.
//!
//! A [`Configuration`] names the initial state and a table of states, each
//! mapping event identifiers to target state identifiers. Configurations are
//! plain data: they deserialize from JSON shaped like
//!
//! ```json
//! {
//!   "initial": "off",
//!   "states": {
//!     "off": { "transitions": { "turnOn": "on" } },
//!     "on":  { "transitions": { "turnOff": "off" } }
//!   }
//! }
//! ```
//!
//! Validation is permissive. Neither the initial state nor the
//! transition targets have to exist in the state table; the machine only
//! checks a target when it is asked to move there.

use super::error::{FsmError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Transitions available from a single state.
///
/// # Example
///
/// ```rust
/// use rewind::core::StateDefinition;
///
/// let off = StateDefinition::new().on("turnOn", "on");
/// assert_eq!(off.target("turnOn"), Some("on"));
/// assert!(off.target("turnOff").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Event identifier -> target state identifier, in declaration order
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateDefinition {
    /// Create a definition with no transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition on `event` to `target`, returning the definition.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state declares a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// State definitions keyed by state identifier, in declaration order.
///
/// Inserting an identifier that is already present replaces its definition
/// but keeps its original position.
///
/// # Example
///
/// ```rust
/// use rewind::core::{StateDefinition, StateTable};
///
/// let mut table = StateTable::new();
/// table.insert("idle", StateDefinition::new().on("start", "running"));
/// table.insert("running", StateDefinition::new().on("stop", "idle"));
///
/// let names: Vec<&str> = table.names().collect();
/// assert_eq!(names, vec!["idle", "running"]);
/// assert!(table.contains("running"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateTable {
    entries: IndexMap<String, StateDefinition>,
}

impl StateTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a state definition.
    ///
    /// Returns the previous definition when `name` was already declared.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: StateDefinition,
    ) -> Option<StateDefinition> {
        self.entries.insert(name.into(), definition)
    }

    /// Look up a state definition.
    pub fn get(&self, name: &str) -> Option<&StateDefinition> {
        self.entries.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut StateDefinition> {
        self.entries.get_mut(name)
    }

    /// Whether `name` is a declared state.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// State identifiers in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(identifier, definition)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateDefinition)> {
        self.entries
            .iter()
            .map(|(name, definition)| (name.as_str(), definition))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, StateDefinition)> for StateTable {
    fn from_iter<I: IntoIterator<Item = (K, StateDefinition)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, definition)| (name.into(), definition))
                .collect(),
        }
    }
}

/// A transition whose target is not a declared state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DanglingTarget {
    pub state: String,
    pub event: String,
    pub target: String,
}

/// Complete description of a state machine.
///
/// # Example
///
/// ```rust
/// use rewind::core::Configuration;
///
/// let config = Configuration::from_json(r#"{
///     "initial": "off",
///     "states": {
///         "off": { "transitions": { "turnOn": "on" } },
///         "on": { "transitions": { "turnOff": "off" } }
///     }
/// }"#).unwrap();
///
/// assert_eq!(config.initial, "off");
/// assert_eq!(config.states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Identifier of the starting state
    pub initial: String,
    /// Declared states in declaration order
    pub states: StateTable,
}

impl Configuration {
    /// Create a configuration with an empty state table.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: StateTable::new(),
        }
    }

    /// Parse a configuration from JSON.
    ///
    /// A JSON `null` document is treated as "no configuration supplied".
    /// Both that case and malformed input yield [`FsmError::Configuration`].
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: Option<Self> = serde_json::from_str(json)
            .map_err(|e| FsmError::configuration(format!("invalid configuration: {e}")))?;
        parsed.ok_or_else(|| FsmError::configuration("no configuration supplied"))
    }

    /// Build a configuration from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let parsed: Option<Self> = serde_json::from_value(value)
            .map_err(|e| FsmError::configuration(format!("invalid configuration: {e}")))?;
        parsed.ok_or_else(|| FsmError::configuration("no configuration supplied"))
    }

    /// Whether the initial state is declared in the state table.
    ///
    /// Construction does not require this; it is offered for callers that
    /// want to vet a configuration up front.
    pub fn initial_is_defined(&self) -> bool {
        self.states.contains(&self.initial)
    }

    /// Transitions that point at undeclared states, in declaration order.
    pub fn dangling_targets(&self) -> Vec<DanglingTarget> {
        let mut dangling = Vec::new();
        for (state, definition) in self.states.iter() {
            for (event, target) in &definition.transitions {
                if !self.states.contains(target) {
                    dangling.push(DanglingTarget {
                        state: state.to_string(),
                        event: event.clone(),
                        target: target.clone(),
                    });
                }
            }
        }
        dangling
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SWITCH: &str = r#"{
        "initial": "off",
        "states": {
            "off": { "transitions": { "turnOn": "on" } },
            "on": { "transitions": { "turnOff": "off", "explode": "broken" } }
        }
    }"#;

    #[test]
    fn from_json_preserves_declaration_order() {
        let json = r#"{
            "initial": "zeta",
            "states": {
                "zeta": { "transitions": {} },
                "alpha": { "transitions": {} },
                "mid": { "transitions": {} }
            }
        }"#;

        let config = Configuration::from_json(json).unwrap();
        let names: Vec<&str> = config.states.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn from_json_null_is_configuration_error() {
        let result = Configuration::from_json("null");
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn from_json_malformed_is_configuration_error() {
        let result = Configuration::from_json(r#"{ "initial": "off" }"#);
        assert!(matches!(result, Err(FsmError::Configuration { .. })));

        let result = Configuration::from_json("not json");
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn from_value_accepts_parsed_json() {
        let value: serde_json::Value = serde_json::from_str(SWITCH).unwrap();
        let config = Configuration::from_value(value).unwrap();
        assert_eq!(config.initial, "off");

        let result = Configuration::from_value(serde_json::Value::Null);
        assert!(matches!(result, Err(FsmError::Configuration { .. })));
    }

    #[test]
    fn missing_transitions_default_to_empty() {
        let config =
            Configuration::from_json(r#"{ "initial": "a", "states": { "a": {} } }"#).unwrap();
        assert!(config.states.get("a").unwrap().transitions.is_empty());
    }

    #[test]
    fn permissive_about_undefined_initial_and_targets() {
        let config = Configuration::from_json(
            r#"{ "initial": "ghost", "states": { "a": { "transitions": { "go": "nowhere" } } } }"#,
        )
        .unwrap();

        assert!(!config.initial_is_defined());
        assert_eq!(
            config.dangling_targets(),
            vec![DanglingTarget {
                state: "a".to_string(),
                event: "go".to_string(),
                target: "nowhere".to_string(),
            }]
        );
    }

    #[test]
    fn dangling_targets_empty_for_closed_config() {
        let mut config = Configuration::from_json(SWITCH).unwrap();
        config
            .states
            .get_mut("on")
            .unwrap()
            .transitions
            .shift_remove("explode");
        assert!(config.initial_is_defined());
        assert!(config.dangling_targets().is_empty());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut table = StateTable::new();
        table.insert("a", StateDefinition::new());
        table.insert("b", StateDefinition::new());
        let previous = table.insert("a", StateDefinition::new().on("go", "b"));

        assert_eq!(previous, Some(StateDefinition::new()));
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(table.get("a").unwrap().handles("go"));
    }

    #[test]
    fn transitions_keep_declaration_order() {
        let json = r#"{
            "initial": "a",
            "states": {
                "a": { "transitions": { "zeta": "x", "alpha": "y", "mid": "a" } }
            }
        }"#;

        let config = Configuration::from_json(json).unwrap();
        let events: Vec<String> = config
            .dangling_targets()
            .into_iter()
            .map(|dangling| dangling.event)
            .collect();
        assert_eq!(events, vec!["zeta", "alpha"]);

        let reserialized = serde_json::to_string(&config.states).unwrap();
        assert_eq!(
            reserialized,
            r#"{"a":{"transitions":{"zeta":"x","alpha":"y","mid":"a"}}}"#
        );
    }

    #[test]
    fn table_collects_from_iterator() {
        let table: StateTable = [
            ("b", StateDefinition::new()),
            ("a", StateDefinition::new().on("go", "b")),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn configuration_serializes_in_declaration_order() {
        let config = Configuration::from_json(SWITCH).unwrap();
        let json = serde_json::to_string(&config).unwrap();

        let off = json.find("\"off\":").unwrap();
        let on = json.find("\"on\":").unwrap();
        assert!(off < on);

        let reparsed = Configuration::from_json(&json).unwrap();
        assert_eq!(config, reparsed);
    }
}
