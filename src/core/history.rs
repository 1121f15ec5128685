//! Undo/redo history of visited states.
//!
//! History is a pair of stacks. `past` holds previously visited states with
//! the most recent on top; `future` holds states that were undone, with the
//! most recently undone on top. A fresh transition clears `future`.

use serde::{Deserialize, Serialize};

/// Undo and redo stacks of state identifiers.
///
/// # Example
///
/// ```rust
/// use rewind::core::History;
///
/// let mut history = History::new();
/// history.record("off");
/// assert!(history.can_undo());
/// assert_eq!(history.past().collect::<Vec<_>>(), vec!["off"]);
///
/// let previous = history.pop_past();
/// assert_eq!(previous.as_deref(), Some("off"));
/// history.push_future("on");
/// assert_eq!(history.peek_future(), Some("on"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    past: Vec<String>,
    // Top of the stack is the last element.
    future: Vec<String>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the machine left `state` on a fresh transition.
    ///
    /// Pushes `state` onto `past` and drops every redo entry.
    pub fn record(&mut self, state: impl Into<String>) {
        self.past.push(state.into());
        self.future.clear();
    }

    /// Most recent entry of `past`, without removing it.
    pub fn peek_past(&self) -> Option<&str> {
        self.past.last().map(String::as_str)
    }

    /// Remove and return the most recent entry of `past`.
    pub fn pop_past(&mut self) -> Option<String> {
        self.past.pop()
    }

    /// Put `state` on top of `future`.
    pub fn push_future(&mut self, state: impl Into<String>) {
        self.future.push(state.into());
    }

    /// Top entry of `future`, without removing it.
    pub fn peek_future(&self) -> Option<&str> {
        self.future.last().map(String::as_str)
    }

    /// Remove and return the top entry of `future`.
    pub fn pop_future(&mut self) -> Option<String> {
        self.future.pop()
    }

    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Previously visited states, oldest first.
    pub fn past(&self) -> impl ExactSizeIterator<Item = &str> {
        self.past.iter().map(String::as_str)
    }

    /// Undone states, most recently undone first.
    pub fn future(&self) -> impl ExactSizeIterator<Item = &str> {
        self.future.iter().rev().map(String::as_str)
    }

    /// Drop both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.past.is_empty() && self.future.is_empty()
    }
}
