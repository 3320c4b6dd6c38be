//! Core `State` trait and the `NullState` sentinel.
//!
//! A state is a unit of behavior that is active while it sits on top of a
//! [`StateMachine`](crate::core::StateMachine)'s stack. The machine drives it
//! through a fixed set of lifecycle hooks; every hook is a no-op by default,
//! so implementors override only what they need.

use crate::core::Transition;

/// A unit of behavior driven by a [`StateMachine`](crate::core::StateMachine).
///
/// `C` is the caller-supplied context threaded through every hook: the game
/// world, a service bundle, an input snapshot, or `()` when nothing is shared.
/// Passing it explicitly replaces hidden global lookups with plain dependency
/// injection.
///
/// # Lifecycle
///
/// - [`enter`](State::enter) runs exactly once when the state becomes the
///   active (top-of-stack) state.
/// - [`handle_input`](State::handle_input), [`update`](State::update) and
///   [`fixed_update`](State::fixed_update) run once per corresponding tick
///   while the state is active. Within one tick the driver calls
///   `handle_input` before `update`.
/// - [`exit`](State::exit) runs exactly once when the state stops being
///   active, whether popped or replaced.
///
/// Transitions are requested by returning a [`Transition`] command from a
/// tick hook; the owning machine applies it as soon as the hook returns.
///
/// # Example
///
/// ```rust
/// use perennial::core::{State, StateMachine, Transition};
///
/// struct Countdown {
///     ticks: u32,
/// }
///
/// impl State<()> for Countdown {
///     fn name(&self) -> &str {
///         "countdown"
///     }
///
///     fn update(&mut self, _ctx: &mut ()) -> Transition<()> {
///         if self.ticks == 0 {
///             return Transition::Pop;
///         }
///         self.ticks -= 1;
///         Transition::None
///     }
/// }
///
/// let mut machine = StateMachine::new();
/// machine.initialize(&mut (), || Box::new(Countdown { ticks: 2 }));
///
/// while !machine.is_done() {
///     machine.update(&mut ());
/// }
/// ```
pub trait State<C> {
    /// Name of the state for display, logging and journaling.
    fn name(&self) -> &str;

    /// Called once when this state becomes the active state.
    ///
    /// Acquire or activate resources owned by the state here.
    fn enter(&mut self, _ctx: &mut C) {}

    /// Called once per input-processing tick while this state is active.
    fn handle_input(&mut self, _ctx: &mut C) -> Transition<C> {
        Transition::None
    }

    /// Called once per logic tick while this state is active.
    fn update(&mut self, _ctx: &mut C) -> Transition<C> {
        Transition::None
    }

    /// Called once per fixed-timestep tick while this state is active.
    ///
    /// Intended for physics-synchronized logic.
    fn fixed_update(&mut self, _ctx: &mut C) -> Transition<C> {
        Transition::None
    }

    /// Called once when this state stops being the active state.
    ///
    /// Release or deactivate anything acquired in [`enter`](State::enter).
    fn exit(&mut self, _ctx: &mut C) {}
}

/// Terminal sentinel state returned by
/// [`StateMachine::current_state`](crate::core::StateMachine::current_state)
/// when the stack is empty.
///
/// All hooks are the trait defaults, so reading the current state of an empty
/// machine never needs a `None` check. The library never pushes a `NullState`
/// onto a stack; doing so from calling code is a usage error.
///
/// # Example
///
/// ```rust
/// use perennial::core::StateMachine;
///
/// let machine: StateMachine<()> = StateMachine::new();
/// assert!(machine.is_done());
/// assert_eq!(machine.current_state().name(), "null");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NullState;

impl<C> State<C> for NullState {
    fn name(&self) -> &str {
        "null"
    }
}
