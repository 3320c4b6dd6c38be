//! The capability set a pool needs from its pooled items.

/// Allocation and liveness policy injected into an
/// [`ObjectPool`](crate::pool::ObjectPool).
///
/// The behavior owns the blueprint (source) the pool clones items from and
/// supplies the four operations the pool composes: instantiate, disable,
/// activity check, and permanent teardown. Implementations are plain values,
/// not subclasses; the pool is generic over them.
///
/// `Item` is expected to be a cheap handle with reference semantics:
/// cloning shares the underlying object, and `PartialEq` compares identity.
/// The pool keeps one handle per item and lends clones to callers, tracking
/// liveness purely through [`is_active`](PoolBehavior::is_active).
pub trait PoolBehavior {
    /// Handle type stored in the pool.
    type Item: Clone + PartialEq;

    /// Clone a fresh item from the blueprint.
    ///
    /// Returns `None` when the backing source is missing; the pool treats
    /// that as "cannot allocate" and declines to grow.
    fn instantiate(&self) -> Option<Self::Item>;

    /// Deactivate an item, marking it free for reuse.
    fn disable(&self, item: &Self::Item);

    /// True while the item is in use by a caller.
    fn is_active(&self, item: &Self::Item) -> bool;

    /// Permanently tear an item down once the pool removes it.
    ///
    /// The default just drops the handle.
    fn destroy(&self, item: Self::Item) {
        drop(item);
    }
}
