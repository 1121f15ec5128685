//! Error types for state machine construction and transitions.

use thiserror::Error;

/// Errors raised by the state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FsmError {
    /// No usable configuration was supplied at construction.
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    /// The requested target is not a defined state.
    ///
    /// `state` is `None` when an event had no transition from the current
    /// state, so no target could be resolved at all.
    #[error("Invalid state: '{}'", .state.as_deref().unwrap_or("<undefined>"))]
    InvalidState { state: Option<String> },
}

impl FsmError {
    pub(crate) fn configuration(reason: impl Into<String>) -> Self {
        Self::Configuration {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_state(state: Option<&str>) -> Self {
        Self::InvalidState {
            state: state.map(str::to_string),
        }
    }
}

pub type Result<T> = std::result::Result<T, FsmError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_displays_target() {
        let err = FsmError::invalid_state(Some("ghost"));
        assert_eq!(err.to_string(), "Invalid state: 'ghost'");
    }

    #[test]
    fn invalid_state_without_target_displays_placeholder() {
        let err = FsmError::invalid_state(None);
        assert_eq!(err.to_string(), "Invalid state: '<undefined>'");
    }

    #[test]
    fn configuration_error_carries_reason() {
        let err = FsmError::configuration("missing");
        assert!(matches!(err, FsmError::Configuration { ref reason } if reason == "missing"));
        assert_eq!(err.to_string(), "Configuration error: missing");
    }
}
