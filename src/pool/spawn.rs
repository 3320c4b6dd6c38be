//! Spawnable-object pool: the concrete pool for recyclable game objects.
//!
//! [`SpawnHandle`] is an engine-agnostic stand-in for a spawned scene object:
//! a cheaply cloneable handle with a label and an activity flag. Cloning a
//! handle shares the underlying object; [`SpawnHandle::instantiate`] is the
//! deep copy used to stamp new instances out of a blueprint.
//!
//! Handles use `Rc` and `Cell` internally: the pool model is single-threaded
//! and frame-driven, so no synchronization is carried.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::pool::{ObjectPool, PoolBehavior};

/// Shared handle to a spawnable object.
///
/// # Example
///
/// ```rust
/// use perennial::pool::SpawnHandle;
///
/// let blueprint = SpawnHandle::new("sparkle");
/// let spawned = blueprint.instantiate();
///
/// // Same label, distinct identity.
/// assert_eq!(spawned.label(), "sparkle");
/// assert_ne!(spawned, blueprint);
///
/// spawned.set_active(false);
/// assert!(!spawned.is_active());
/// assert!(blueprint.is_active());
/// ```
#[derive(Clone)]
pub struct SpawnHandle {
    inner: Rc<SpawnInner>,
}

struct SpawnInner {
    label: String,
    active: Cell<bool>,
}

impl SpawnHandle {
    /// Create a new, active spawnable object with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(SpawnInner {
                label: label.into(),
                active: Cell::new(true),
            }),
        }
    }

    /// Label of the underlying object.
    pub fn label(&self) -> &str {
        &self.inner.label
    }

    /// True while the object is active in the scene.
    pub fn is_active(&self) -> bool {
        self.inner.active.get()
    }

    /// Activate or deactivate the object.
    pub fn set_active(&self, active: bool) {
        self.inner.active.set(active);
    }

    /// Deep copy: a fresh object with the same label and activity flag but
    /// its own identity, the way engine instantiation stamps out a blueprint.
    pub fn instantiate(&self) -> Self {
        let copy = Self::new(self.inner.label.clone());
        copy.set_active(self.is_active());
        copy
    }
}

impl PartialEq for SpawnHandle {
    /// Identity comparison: two handles are equal only when they refer to
    /// the same underlying object.
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for SpawnHandle {}

impl fmt::Debug for SpawnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpawnHandle")
            .field("label", &self.inner.label)
            .field("active", &self.inner.active.get())
            .finish()
    }
}

/// Pool behavior for spawnable objects.
///
/// Holds an optional blueprint. With no source present, every allocation
/// yields the sentinel and the pool simply never grows.
pub struct SpawnBehavior {
    source: Option<SpawnHandle>,
}

impl SpawnBehavior {
    /// Build a behavior around an optional blueprint.
    pub fn new(source: Option<SpawnHandle>) -> Self {
        Self { source }
    }

    /// The blueprint, if present.
    pub fn source(&self) -> Option<&SpawnHandle> {
        self.source.as_ref()
    }
}

impl PoolBehavior for SpawnBehavior {
    type Item = SpawnHandle;

    fn instantiate(&self) -> Option<SpawnHandle> {
        self.source.as_ref().map(SpawnHandle::instantiate)
    }

    fn disable(&self, item: &SpawnHandle) {
        item.set_active(false);
    }

    fn is_active(&self, item: &SpawnHandle) -> bool {
        item.is_active()
    }
}

/// Pool of spawnable objects cloned from a blueprint.
///
/// # Example
///
/// ```rust
/// use perennial::pool::{SpawnHandle, SpawnPool};
///
/// let blueprint = SpawnHandle::new("raindrop");
/// let mut pool = SpawnPool::with_source(blueprint, 3, true);
///
/// let raindrop = pool.get_pooled_object().unwrap();
/// raindrop.set_active(true);
///
/// // Done with it: release deactivates it, and trims the pool when it
/// // sits at or above capacity.
/// pool.release_item(&raindrop);
/// assert!(!raindrop.is_active());
/// ```
pub type SpawnPool = ObjectPool<SpawnBehavior>;

impl SpawnPool {
    /// Pool that clones items from `source`, eagerly filled to
    /// `initial_count`.
    pub fn with_source(source: SpawnHandle, initial_count: usize, allow_expansion: bool) -> Self {
        ObjectPool::new(SpawnBehavior::new(Some(source)), initial_count, allow_expansion)
    }

    /// Pool with no backing blueprint: never allocates, every request yields
    /// the sentinel.
    pub fn without_source(initial_count: usize, allow_expansion: bool) -> Self {
        ObjectPool::new(SpawnBehavior::new(None), initial_count, allow_expansion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instantiate_copies_label_but_not_identity() {
        let blueprint = SpawnHandle::new("petal");
        let copy = blueprint.instantiate();

        assert_eq!(copy.label(), "petal");
        assert_ne!(copy, blueprint);
        assert_eq!(copy.is_active(), blueprint.is_active());
    }

    #[test]
    fn clones_share_the_activity_flag() {
        let handle = SpawnHandle::new("petal");
        let alias = handle.clone();

        alias.set_active(false);

        assert!(!handle.is_active());
        assert_eq!(handle, alias);
    }

    #[test]
    fn pool_items_are_copies_of_the_source() {
        let blueprint = SpawnHandle::new("sparkle");
        let mut pool = SpawnPool::with_source(blueprint.clone(), 1, false);

        let item = pool.get_pooled_object().unwrap();
        assert_eq!(item.label(), "sparkle");
        assert_ne!(item, blueprint);
        assert!(!item.is_active());
    }

    #[test]
    fn sourceless_pool_always_yields_the_sentinel() {
        let mut pool = SpawnPool::without_source(5, true);

        assert_eq!(pool.size(), 0);
        assert!(pool.get_pooled_object().is_none());
        assert_eq!(pool.size(), 0);
    }

    #[test]
    fn exhaustion_and_expansion_match_the_pool_contract() {
        let mut bounded = SpawnPool::with_source(SpawnHandle::new("fly"), 1, false);
        bounded.get_pooled_object().unwrap().set_active(true);
        assert!(bounded.get_pooled_object().is_none());
        assert_eq!(bounded.size(), 1);

        let mut growable = SpawnPool::with_source(SpawnHandle::new("fly"), 1, true);
        growable.get_pooled_object().unwrap().set_active(true);
        assert!(growable.get_pooled_object().is_some());
        assert_eq!(growable.size(), 2);
    }

    #[test]
    fn release_shrinks_back_toward_capacity() {
        let mut pool = SpawnPool::with_source(SpawnHandle::new("wind"), 1, true);

        let first = pool.get_pooled_object().unwrap();
        first.set_active(true);
        let second = pool.get_pooled_object().unwrap();
        second.set_active(true);
        assert_eq!(pool.size(), 2);

        pool.release_item(&second);
        assert_eq!(pool.size(), 1);
        assert!(!second.is_active());
    }

    #[test]
    fn clear_empties_the_pool() {
        let mut pool = SpawnPool::with_source(SpawnHandle::new("leaf"), 3, false);
        pool.clear();
        assert!(pool.is_empty());
    }

    #[test]
    fn behavior_exposes_its_source() {
        let blueprint = SpawnHandle::new("stem");
        let pool = SpawnPool::with_source(blueprint.clone(), 0, true);

        assert_eq!(pool.behavior().source(), Some(&blueprint));
        assert!(SpawnPool::without_source(0, false).behavior().source().is_none());
    }
}
