//! Rewind: a declarative finite state machine with undo/redo
//!
//! A machine is described by a [`Configuration`]: an initial state and a
//! table of states, each mapping event names to target states. The
//! [`StateMachine`] tracks the current state, applies transitions when asked,
//! and keeps an undo/redo history of every change it makes.
//!
//! # Core Concepts
//!
//! - **Configuration**: Plain data, loadable from JSON or built in code
//! - **Transitions**: Direct (`change_state`) or event-driven (`trigger`)
//! - **History**: A `past` stack for undo and a `future` stack for redo
//!
//! Targets are checked when a transition is applied, not when the
//! configuration is loaded. A failed transition leaves the machine exactly
//! as it was.
//!
//! # Example
//!
//! ```rust
//! use rewind::StateMachine;
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "initial": "off",
//!     "states": {
//!         "off": { "transitions": { "turnOn": "on" } },
//!         "on": { "transitions": { "turnOff": "off" } }
//!     }
//! }"#).unwrap();
//!
//! machine.trigger("turnOn").unwrap();
//! assert_eq!(machine.current_state(), "on");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "off");
//!
//! assert!(machine.redo());
//! assert_eq!(machine.current_state(), "on");
//!
//! assert!(machine.trigger("turnOn").is_err());
//! assert_eq!(machine.states(Some("turnOff")), vec!["on"]);
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::MachineBuilder;
pub use crate::core::{Configuration, FsmError, History, Result, StateDefinition, StateTable};
pub use crate::engine::StateMachine;
