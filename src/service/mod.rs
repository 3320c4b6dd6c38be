//! Lazily-created service objects.
//!
//! The dependency-injected replacement for singleton managers: instead of a
//! process-wide instance found through hidden global lookup, a [`Service`]
//! is an explicit value passed to whoever needs it, usually inside the
//! context type a [`StateMachine`](crate::core::StateMachine) threads through
//! its states. Creation stays lazy: the wrapped value is built by its init
//! closure on first access and reused afterwards.

/// A lazily-initialized service slot.
///
/// # Example
///
/// ```rust
/// use perennial::service::Service;
///
/// struct Audio {
///     volume: f32,
/// }
///
/// let mut audio = Service::new(|| Audio { volume: 0.8 });
/// assert!(!audio.is_initialized());
///
/// audio.get().volume = 0.5;
/// assert!(audio.is_initialized());
/// assert_eq!(audio.get().volume, 0.5);
/// ```
pub struct Service<T> {
    init: Box<dyn Fn() -> T>,
    slot: Option<T>,
}

impl<T> Service<T> {
    /// Wrap an init closure. Nothing is created until the first
    /// [`get`](Service::get).
    pub fn new<F>(init: F) -> Self
    where
        F: Fn() -> T + 'static,
    {
        Self {
            init: Box::new(init),
            slot: None,
        }
    }

    /// Access the service, creating it on first use.
    pub fn get(&mut self) -> &mut T {
        let init = &self.init;
        self.slot.get_or_insert_with(|| init())
    }

    /// True once the service has been created.
    pub fn is_initialized(&self) -> bool {
        self.slot.is_some()
    }

    /// Tear the instance down, returning it if one was created. The next
    /// [`get`](Service::get) re-runs the init closure.
    pub fn take(&mut self) -> Option<T> {
        self.slot.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn init_runs_exactly_once_across_accesses() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let mut service = Service::new(move || {
            counter.set(counter.get() + 1);
            41
        });

        assert!(!service.is_initialized());
        *service.get() += 1;
        assert_eq!(*service.get(), 42);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn take_allows_reinitialization() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let mut service = Service::new(move || {
            counter.set(counter.get() + 1);
            String::from("fresh")
        });

        assert!(service.take().is_none());

        service.get().push_str(" paint");
        assert_eq!(service.take().as_deref(), Some("fresh paint"));
        assert!(!service.is_initialized());

        assert_eq!(service.get(), "fresh");
        assert_eq!(runs.get(), 2);
    }
}
