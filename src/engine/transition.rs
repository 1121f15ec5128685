//! How a transition interacts with history.

use std::fmt;

/// The path a state change arrived by.
///
/// Only [`TransitionMode::Normal`] changes are recorded in history. Undo and
/// redo replay entries that were already recorded, so they must not push
/// another one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TransitionMode {
    /// A direct change or an event trigger
    Normal,
    /// Replay of a `past` entry
    Undo,
    /// Replay of a `future` entry
    Redo,
}

impl TransitionMode {
    /// Whether a change in this mode pushes the departed state onto `past`
    /// and drops the redo stack.
    pub(crate) fn records_history(self) -> bool {
        matches!(self, Self::Normal)
    }

    /// Lowercase label used in log events.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl fmt::Display for TransitionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
