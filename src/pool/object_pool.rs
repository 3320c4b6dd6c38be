//! Generic capacity-bounded, optionally-expanding object pool.

use tracing::{debug, trace};

use crate::pool::PoolBehavior;

/// A pool of recyclable items with a minimum reserved capacity.
///
/// The pool eagerly allocates `initial_count` items at construction; that
/// count becomes its capacity. Requests scan the pool in insertion order and
/// hand back the first inactive item, a deterministic tie-break. When every
/// item is active the pool allocates one more only if expansion is permitted
/// or capacity has not been reached yet; otherwise the request yields `None`,
/// the exhaustion sentinel. Callers must check for it before use — exhaustion
/// is never an error.
///
/// Items allocated above capacity are permanent growth until
/// [`release_item`](ObjectPool::release_item) reclaims them, shrinking the
/// pool back toward its capacity.
///
/// # Example
///
/// ```rust
/// use perennial::pool::SpawnPool;
/// use perennial::pool::SpawnHandle;
///
/// let petals = SpawnHandle::new("petal");
/// let mut pool = SpawnPool::with_source(petals, 2, false);
/// assert_eq!(pool.size(), 2);
///
/// let a = pool.get_pooled_object().unwrap();
/// a.set_active(true);
/// let b = pool.get_pooled_object().unwrap();
/// b.set_active(true);
///
/// // Capacity reached, expansion disallowed: the sentinel comes back.
/// assert!(pool.get_pooled_object().is_none());
/// assert_eq!(pool.size(), 2);
/// ```
pub struct ObjectPool<B: PoolBehavior> {
    behavior: B,
    items: Vec<B::Item>,
    capacity: usize,
    should_expand: bool,
}

impl<B: PoolBehavior> ObjectPool<B> {
    /// Build a pool from `behavior`, eagerly allocating `initial_count`
    /// items. The initial fill ignores the expansion flag; capacity is
    /// always honored at construction.
    pub fn new(behavior: B, initial_count: usize, allow_expansion: bool) -> Self {
        let mut pool = Self {
            behavior,
            items: Vec::with_capacity(initial_count),
            capacity: initial_count,
            should_expand: allow_expansion,
        };
        for _ in 0..initial_count {
            pool.allocate_item(true);
        }
        pool
    }

    /// Current item count: capacity plus any expansion growth.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Minimum number of items the pool reserves.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True when the pool currently holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True if the pool may allocate another item: either expansion is
    /// permitted, or capacity has not been reached yet.
    pub fn can_expand(&self) -> bool {
        self.should_expand || self.has_vacancy()
    }

    /// The injected behavior.
    pub fn behavior(&self) -> &B {
        &self.behavior
    }

    fn has_vacancy(&self) -> bool {
        self.items.len() < self.capacity
    }

    fn at_or_above_capacity(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Instantiate one item, disable it and add it to the pool. Returns the
    /// new item's handle, or `None` when allocation is gated off or the
    /// source is missing.
    fn allocate_item(&mut self, ignore_capacity: bool) -> Option<B::Item> {
        if !(self.can_expand() || ignore_capacity) {
            return None;
        }
        let item = self.behavior.instantiate()?;
        self.behavior.disable(&item);
        self.items.push(item.clone());
        trace!(size = self.items.len(), "allocated pooled item");
        Some(item)
    }

    /// Hand back the first inactive item in insertion order, or allocate one
    /// more if permitted. Returns `None` when the pool is exhausted.
    ///
    /// The returned item is not mutated; activating it is the caller's
    /// responsibility, and the pool considers it free again as soon as it
    /// reads as inactive.
    pub fn get_pooled_object(&mut self) -> Option<B::Item> {
        for item in &self.items {
            if !self.behavior.is_active(item) {
                return Some(item.clone());
            }
        }

        let allocated = self.allocate_item(false);
        if allocated.is_none() {
            debug!(capacity = self.capacity, "pool exhausted");
        }
        allocated
    }

    /// Reclaim an item: if it is active, disable it, and when the pool is at
    /// or above capacity also remove and destroy it, shrinking the pool.
    ///
    /// Inactive items and items that do not belong to this pool are ignored.
    pub fn release_item(&mut self, item: &B::Item) {
        let Some(position) = self.items.iter().position(|i| i == item) else {
            return;
        };
        if self.behavior.is_active(&self.items[position]) {
            self.behavior.disable(&self.items[position]);
            if self.at_or_above_capacity() {
                let removed = self.items.remove(position);
                self.behavior.destroy(removed);
                trace!(size = self.items.len(), "released pooled item");
            }
        }
    }

    /// Destroy every item and empty the pool.
    pub fn clear(&mut self) {
        for item in self.items.drain(..) {
            self.behavior.destroy(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Handle with reference semantics: clone shares the activity flag,
    /// equality is identity.
    #[derive(Clone, Debug)]
    struct Token(Rc<Cell<bool>>);

    impl Token {
        fn activate(&self) {
            self.0.set(true);
        }

        fn is_active(&self) -> bool {
            self.0.get()
        }
    }

    impl PartialEq for Token {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    struct TokenBehavior {
        source_present: bool,
        instantiated: Rc<Cell<usize>>,
        destroyed: Rc<Cell<usize>>,
    }

    impl TokenBehavior {
        fn new() -> Self {
            Self {
                source_present: true,
                instantiated: Rc::new(Cell::new(0)),
                destroyed: Rc::new(Cell::new(0)),
            }
        }

        fn sourceless() -> Self {
            Self {
                source_present: false,
                ..Self::new()
            }
        }
    }

    impl PoolBehavior for TokenBehavior {
        type Item = Token;

        fn instantiate(&self) -> Option<Token> {
            if !self.source_present {
                return None;
            }
            self.instantiated.set(self.instantiated.get() + 1);
            Some(Token(Rc::new(Cell::new(true))))
        }

        fn disable(&self, item: &Token) {
            item.0.set(false);
        }

        fn is_active(&self, item: &Token) -> bool {
            item.0.get()
        }

        fn destroy(&self, item: Token) {
            self.destroyed.set(self.destroyed.get() + 1);
            drop(item);
        }
    }

    #[test]
    fn construction_fills_to_capacity() {
        let behavior = TokenBehavior::new();
        let instantiated = behavior.instantiated.clone();

        let pool = ObjectPool::new(behavior, 5, false);

        assert_eq!(pool.size(), 5);
        assert_eq!(pool.capacity(), 5);
        assert_eq!(instantiated.get(), 5);
        assert!(!pool.is_empty());
    }

    #[test]
    fn initial_fill_ignores_the_expansion_flag() {
        // Expansion disallowed, yet the initial fill still happens.
        let pool = ObjectPool::new(TokenBehavior::new(), 3, false);
        assert_eq!(pool.size(), 3);
        assert!(!pool.can_expand());
    }

    #[test]
    fn items_come_back_disabled() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 1, false);
        let token = pool.get_pooled_object().unwrap();
        assert!(!token.is_active());
    }

    #[test]
    fn scan_returns_the_first_inactive_item_in_insertion_order() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 2, false);

        let first = pool.get_pooled_object().unwrap();
        // Still inactive, so the same item comes back.
        assert_eq!(pool.get_pooled_object().unwrap(), first);

        first.activate();
        let second = pool.get_pooled_object().unwrap();
        assert_ne!(second, first);
    }

    #[test]
    fn exhausted_pool_without_expansion_yields_the_sentinel() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 1, false);
        pool.get_pooled_object().unwrap().activate();

        assert!(pool.get_pooled_object().is_none());
        assert_eq!(pool.size(), 1);
    }

    #[test]
    fn exhausted_pool_with_expansion_grows_by_one() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 1, true);
        pool.get_pooled_object().unwrap().activate();

        let extra = pool.get_pooled_object().unwrap();
        assert!(!extra.is_active());
        assert_eq!(pool.size(), 2);
    }

    #[test]
    fn empty_pool_without_expansion_never_allocates() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 0, false);
        assert_eq!(pool.size(), 0);
        assert!(pool.get_pooled_object().is_none());
        assert_eq!(pool.size(), 0);
    }

    #[test]
    fn empty_pool_with_expansion_allocates_on_demand() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 0, true);
        assert_eq!(pool.size(), 0);
        assert!(pool.get_pooled_object().is_some());
        assert_eq!(pool.size(), 1);
    }

    #[test]
    fn missing_source_declines_to_grow() {
        let mut pool = ObjectPool::new(TokenBehavior::sourceless(), 3, true);
        assert_eq!(pool.size(), 0);
        assert!(pool.get_pooled_object().is_none());
        assert_eq!(pool.size(), 0);
    }

    #[test]
    fn release_above_capacity_destroys_the_item() {
        let behavior = TokenBehavior::new();
        let destroyed = behavior.destroyed.clone();
        let mut pool = ObjectPool::new(behavior, 1, true);

        pool.get_pooled_object().unwrap().activate();
        let extra = pool.get_pooled_object().unwrap();
        extra.activate();
        assert_eq!(pool.size(), 2);

        pool.release_item(&extra);

        assert_eq!(pool.size(), 1);
        assert_eq!(destroyed.get(), 1);
        assert!(!extra.is_active());
    }

    #[test]
    fn release_of_an_inactive_item_is_a_no_op() {
        let behavior = TokenBehavior::new();
        let destroyed = behavior.destroyed.clone();
        let mut pool = ObjectPool::new(behavior, 2, true);

        let token = pool.get_pooled_object().unwrap();
        pool.release_item(&token);

        assert_eq!(pool.size(), 2);
        assert_eq!(destroyed.get(), 0);
    }

    #[test]
    fn release_of_a_foreign_item_is_ignored() {
        let mut pool = ObjectPool::new(TokenBehavior::new(), 1, false);
        let foreign = Token(Rc::new(Cell::new(true)));

        pool.release_item(&foreign);

        assert_eq!(pool.size(), 1);
        assert!(foreign.is_active());
    }

    #[test]
    fn clear_destroys_everything() {
        let behavior = TokenBehavior::new();
        let destroyed = behavior.destroyed.clone();
        let mut pool = ObjectPool::new(behavior, 4, false);

        pool.clear();

        assert_eq!(pool.size(), 0);
        assert!(pool.is_empty());
        assert_eq!(destroyed.get(), 4);
    }

    #[test]
    fn can_expand_reflects_vacancy_and_flag() {
        let mut growable = ObjectPool::new(TokenBehavior::new(), 1, true);
        assert!(growable.can_expand());
        growable.get_pooled_object().unwrap().activate();
        let _ = growable.get_pooled_object();
        assert!(growable.can_expand());

        let bounded = ObjectPool::new(TokenBehavior::new(), 1, false);
        assert!(!bounded.can_expand());
    }
}
