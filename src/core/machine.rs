//! Stack-based hierarchical state machine.
//!
//! The machine owns a stack of boxed [`State`]s. The top of the stack is the
//! active state; pushing layers a new state over the current one without
//! exiting it, which is what makes nested flows like pause-over-gameplay
//! cheap to express.

use tracing::debug;
use uuid::Uuid;

use crate::core::{NullState, State, Transition};
use crate::journal::{Journal, TransitionKind};

/// Stack-based state machine with layered push semantics.
///
/// `C` is the context type threaded into every state hook; see [`State`].
///
/// A driving loop typically calls [`handle_input`](StateMachine::handle_input)
/// then [`update`](StateMachine::update) once per frame and
/// [`fixed_update`](StateMachine::fixed_update) once per fixed timestep. Each
/// driver invokes the matching hook on the active state and applies whatever
/// [`Transition`] the hook returned before it itself returns, so the next
/// tick always observes the new top of stack.
///
/// All operations run synchronously on the calling thread; the machine holds
/// no locks and expects no concurrent mutation.
///
/// # Example
///
/// ```rust
/// use perennial::core::{State, StateMachine, Transition};
///
/// struct Gameplay;
/// struct Paused;
///
/// impl State<()> for Gameplay {
///     fn name(&self) -> &str {
///         "gameplay"
///     }
/// }
///
/// impl State<()> for Paused {
///     fn name(&self) -> &str {
///         "paused"
///     }
///
///     fn update(&mut self, _ctx: &mut ()) -> Transition<()> {
///         Transition::Pop
///     }
/// }
///
/// let mut machine = StateMachine::new();
/// machine.initialize(&mut (), || Box::new(Gameplay));
///
/// // Layer the pause state over gameplay; gameplay stays on the stack.
/// machine.push_state(&mut (), Box::new(Paused));
/// assert_eq!(machine.current_state().name(), "paused");
/// assert_eq!(machine.depth(), 2);
///
/// // The pause state pops itself on its first update.
/// machine.update(&mut ());
/// assert_eq!(machine.current_state().name(), "gameplay");
/// ```
pub struct StateMachine<C> {
    stack: Vec<Box<dyn State<C>>>,
    start: Option<Box<dyn Fn() -> Box<dyn State<C>>>>,
    null: NullState,
    id: Uuid,
    journal: Journal,
}

impl<C> StateMachine<C> {
    /// Create an empty machine with a fresh id and an empty journal.
    ///
    /// The machine holds no active state until
    /// [`initialize`](StateMachine::initialize) is called.
    pub fn new() -> Self {
        let id = Uuid::new_v4();
        Self {
            stack: Vec::new(),
            start: None,
            null: NullState,
            id,
            journal: Journal::new(id),
        }
    }

    /// Unique identifier of this machine, stamped into its journal.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The journal of stack operations performed so far.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The active state: the top of the stack, or the [`NullState`] sentinel
    /// when the stack is empty. Read-only and side-effect-free.
    pub fn current_state(&self) -> &dyn State<C> {
        match self.stack.last() {
            Some(top) => top.as_ref(),
            None => &self.null,
        }
    }

    /// True when the stack is empty.
    pub fn is_done(&self) -> bool {
        self.stack.is_empty()
    }

    /// Current stack depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Discard any existing stack, remember `start` as the resettable
    /// starting point and push a fresh start state.
    ///
    /// The discard does not run `exit` on discarded states; re-initialization
    /// replaces the stack wholesale. Callable any number of times, e.g. to
    /// restart after [`end`](StateMachine::end).
    pub fn initialize<F>(&mut self, ctx: &mut C, start: F)
    where
        F: Fn() -> Box<dyn State<C>> + 'static,
    {
        self.stack.clear();
        let state = start();
        self.start = Some(Box::new(start));
        self.push_state(ctx, state);
    }

    /// Re-initialize from the remembered starting state, unwinding to depth 1.
    ///
    /// # Panics
    ///
    /// Panics if called before any [`initialize`](StateMachine::initialize).
    pub fn reset(&mut self, ctx: &mut C) {
        let state = match &self.start {
            Some(factory) => factory(),
            None => panic!("StateMachine::reset called before initialize"),
        };
        self.stack.clear();
        self.push_state(ctx, state);
    }

    /// Push `state` onto the stack and enter it.
    ///
    /// The previous top is *not* exited; it stays alive underneath, inactive
    /// until everything above it is popped.
    pub fn push_state(&mut self, ctx: &mut C, mut state: Box<dyn State<C>>) {
        debug!(
            machine = %self.id,
            state = state.name(),
            depth = self.stack.len() + 1,
            "entering state"
        );
        state.enter(ctx);
        let name = state.name().to_string();
        self.stack.push(state);
        let depth = self.stack.len();
        self.journal.record(TransitionKind::Push, name, depth);
    }

    /// Exit the current top state and remove it from the stack.
    ///
    /// `exit` completes before the stack entry is removed.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty. Gate with
    /// [`is_done`](StateMachine::is_done) or keep pushes and pops balanced;
    /// an empty-stack pop is a caller contract violation, not a recoverable
    /// condition.
    pub fn pop_state(&mut self, ctx: &mut C) {
        let top = self
            .stack
            .last_mut()
            .expect("StateMachine::pop_state called on an empty stack; gate with is_done");
        top.exit(ctx);
        if let Some(state) = self.stack.pop() {
            let depth = self.stack.len();
            debug!(machine = %self.id, state = state.name(), depth, "exited state");
            self.journal
                .record(TransitionKind::Pop, state.name().to_string(), depth);
        }
    }

    /// Replace the current top state: exit and pop it, then push and enter
    /// `next`. Use for lateral transitions between sibling states.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty, like
    /// [`pop_state`](StateMachine::pop_state).
    pub fn change_state(&mut self, ctx: &mut C, next: Box<dyn State<C>>) {
        self.pop_state(ctx);
        self.push_state(ctx, next);
    }

    /// Pop until the stack is empty, exiting every state top to bottom.
    ///
    /// Afterwards [`is_done`](StateMachine::is_done) is true and the machine
    /// holds no active state until re-initialized.
    pub fn end(&mut self, ctx: &mut C) {
        while !self.is_done() {
            self.pop_state(ctx);
        }
    }

    /// Drive the active state's [`handle_input`](State::handle_input) hook
    /// and apply the transition it requests. No-op when the stack is empty.
    pub fn handle_input(&mut self, ctx: &mut C) {
        let transition = match self.stack.last_mut() {
            Some(top) => top.handle_input(ctx),
            None => Transition::None,
        };
        self.apply(ctx, transition);
    }

    /// Drive the active state's [`update`](State::update) hook and apply the
    /// transition it requests. No-op when the stack is empty.
    pub fn update(&mut self, ctx: &mut C) {
        let transition = match self.stack.last_mut() {
            Some(top) => top.update(ctx),
            None => Transition::None,
        };
        self.apply(ctx, transition);
    }

    /// Drive the active state's [`fixed_update`](State::fixed_update) hook
    /// and apply the transition it requests. No-op when the stack is empty.
    pub fn fixed_update(&mut self, ctx: &mut C) {
        let transition = match self.stack.last_mut() {
            Some(top) => top.fixed_update(ctx),
            None => Transition::None,
        };
        self.apply(ctx, transition);
    }

    fn apply(&mut self, ctx: &mut C, transition: Transition<C>) {
        match transition {
            Transition::None => {}
            Transition::Push(state) => self.push_state(ctx, state),
            Transition::Pop => self.pop_state(ctx),
            Transition::Change(state) => self.change_state(ctx, state),
            Transition::End => self.end(ctx),
        }
    }
}

impl<C> Default for StateMachine<C> {
    fn default() -> Self {
        Self::new()
    }
}
