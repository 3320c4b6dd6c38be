//! Core state machine types.
//!
//! This module contains the stack-based state machine:
//! - Lifecycle hooks via the [`State`] trait
//! - [`Transition`] commands for self-directed stack operations
//! - The [`StateMachine`] stack with layered push semantics
//!
//! Everything here is synchronous and single-threaded: one logical tick
//! thread drives the machine, and every hook runs to completion within the
//! tick that invoked it.

mod machine;
mod state;
mod transition;

pub use machine::StateMachine;
pub use state::{NullState, State};
pub use transition::Transition;
