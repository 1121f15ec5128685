//! Builder API for ergonomic state machine construction.
//!
//! This module provides a fluent builder and a declarative macro for
//! describing state machines without writing JSON.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
