//! The state machine engine.
//!
//! [`StateMachine`] owns a [`Configuration`](crate::core::Configuration),
//! the current state and the undo/redo [`History`](crate::core::History).
//! Every state change funnels through a single internal routine that takes
//! an explicit transition mode (normal, undo or redo), so undo and redo never
//! leave flags behind for the next transition to consume.

mod machine;
mod transition;

pub use machine::StateMachine;
