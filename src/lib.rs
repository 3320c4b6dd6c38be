//! Perennial: stack-based state machines and object pools for frame-driven
//! games.
//!
//! Perennial packages the two load-bearing structures of a casual game loop
//! as an engine-agnostic library:
//!
//! - **State machine**: a stack of polymorphic [`State`](crate::core::State)s
//!   with layered push semantics, so nested flows like pause-over-gameplay
//!   keep the covered state alive but inactive. Transitions are requested
//!   from inside state hooks as [`Transition`](crate::core::Transition)
//!   commands.
//! - **Object pool**: a capacity-bounded, optionally-expanding
//!   [`ObjectPool`](crate::pool::ObjectPool) that recycles spawned objects
//!   and signals exhaustion with a sentinel instead of an error.
//!
//! Both run synchronously on one logical tick thread; nothing blocks,
//! suspends or locks. Every machine keeps a serializable
//! [`Journal`](crate::journal::Journal) of its stack operations for
//! diagnostics.
//!
//! # Example
//!
//! ```rust
//! use perennial::core::{State, StateMachine, Transition};
//!
//! struct Growing {
//!     water: u32,
//! }
//!
//! struct Bloomed;
//!
//! impl State<()> for Bloomed {
//!     fn name(&self) -> &str {
//!         "bloomed"
//!     }
//! }
//!
//! impl State<()> for Growing {
//!     fn name(&self) -> &str {
//!         "growing"
//!     }
//!
//!     fn update(&mut self, _ctx: &mut ()) -> Transition<()> {
//!         self.water += 1;
//!         if self.water >= 3 {
//!             Transition::change(Bloomed)
//!         } else {
//!             Transition::None
//!         }
//!     }
//! }
//!
//! let mut machine = StateMachine::new();
//! machine.initialize(&mut (), || Box::new(Growing { water: 0 }));
//!
//! for _ in 0..3 {
//!     machine.handle_input(&mut ());
//!     machine.update(&mut ());
//! }
//!
//! assert_eq!(machine.current_state().name(), "bloomed");
//! ```

pub mod core;
pub mod journal;
pub mod pool;
pub mod service;

// Re-export commonly used types
pub use crate::core::{NullState, State, StateMachine, Transition};
pub use crate::journal::{Journal, JournalError, TransitionKind, TransitionRecord};
pub use crate::pool::{ObjectPool, PoolBehavior, SpawnBehavior, SpawnHandle, SpawnPool};
pub use crate::service::Service;
