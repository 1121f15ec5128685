//! Core state machine data.
//!
//! This module contains the plain-data side of the machine:
//! - Declarative configuration (`Configuration`, `StateTable`, `StateDefinition`)
//! - Undo/redo history stacks
//! - Error types
//!
//! Nothing in here knows how transitions are applied; that lives in
//! [`crate::engine`].

mod config;
mod error;
mod history;

pub use config::{Configuration, DanglingTarget, StateDefinition, StateTable};
pub use error::{FsmError, Result};
pub use history::History;
