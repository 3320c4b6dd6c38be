//! Transition commands returned by state tick hooks.

use std::fmt;

use crate::core::State;

/// A stack operation requested by the active state.
///
/// Tick hooks ([`handle_input`](State::handle_input),
/// [`update`](State::update), [`fixed_update`](State::fixed_update)) return a
/// `Transition`; the owning [`StateMachine`](crate::core::StateMachine)
/// applies it immediately after the hook returns, within the same tick. This
/// keeps transition requests inside state code without handing states a
/// mutable reference to the machine that is currently driving them.
///
/// # Example
///
/// ```rust
/// use perennial::core::{State, Transition};
///
/// struct Splash;
/// struct MainMenu;
///
/// impl State<()> for MainMenu {
///     fn name(&self) -> &str {
///         "main_menu"
///     }
/// }
///
/// impl State<()> for Splash {
///     fn name(&self) -> &str {
///         "splash"
///     }
///
///     fn update(&mut self, _ctx: &mut ()) -> Transition<()> {
///         // Lateral move to a sibling state.
///         Transition::change(MainMenu)
///     }
/// }
/// ```
pub enum Transition<C> {
    /// Stay in the current state.
    None,
    /// Layer a new state on top without exiting the current one
    /// (pause-over-gameplay pattern).
    Push(Box<dyn State<C>>),
    /// Exit the current state and remove it from the stack.
    Pop,
    /// Replace the current state: exit it, then enter the new one.
    Change(Box<dyn State<C>>),
    /// Unwind the whole stack, exiting every state top to bottom.
    End,
}

impl<C> Transition<C> {
    /// Request layering `state` on top of the current one.
    pub fn push<S>(state: S) -> Self
    where
        S: State<C> + 'static,
    {
        Self::Push(Box::new(state))
    }

    /// Request replacing the current state with `state`.
    pub fn change<S>(state: S) -> Self
    where
        S: State<C> + 'static,
    {
        Self::Change(Box::new(state))
    }

    /// True for [`Transition::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl<C> fmt::Debug for Transition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Push(state) => f.debug_tuple("Push").field(&state.name()).finish(),
            Self::Pop => f.write_str("Pop"),
            Self::Change(state) => f.debug_tuple("Change").field(&state.name()).finish(),
            Self::End => f.write_str("End"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stub;

    impl State<()> for Stub {
        fn name(&self) -> &str {
            "stub"
        }
    }

    #[test]
    fn helpers_box_the_state() {
        let push: Transition<()> = Transition::push(Stub);
        let change: Transition<()> = Transition::change(Stub);

        assert!(matches!(push, Transition::Push(_)));
        assert!(matches!(change, Transition::Change(_)));
    }

    #[test]
    fn is_none_only_matches_none() {
        assert!(Transition::<()>::None.is_none());
        assert!(!Transition::<()>::Pop.is_none());
        assert!(!Transition::<()>::End.is_none());
        assert!(!Transition::<()>::push(Stub).is_none());
    }

    #[test]
    fn debug_prints_carried_state_name() {
        assert_eq!(format!("{:?}", Transition::<()>::push(Stub)), "Push(\"stub\")");
        assert_eq!(format!("{:?}", Transition::<()>::Pop), "Pop");
        assert_eq!(format!("{:?}", Transition::<()>::None), "None");
    }
}
