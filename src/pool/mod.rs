//! Capacity-bounded, optionally-expanding object pools.
//!
//! [`ObjectPool`] is generic over a [`PoolBehavior`], the injected policy
//! that knows how to instantiate, disable, liveness-check and destroy items.
//! [`SpawnPool`] is the concrete pool for spawnable game objects.
//!
//! Exhaustion is signaled by a `None` sentinel, never an error: a spawner
//! that gets nothing back simply skips the effect this frame.

mod behavior;
mod object_pool;
mod spawn;

pub use behavior::PoolBehavior;
pub use object_pool::ObjectPool;
pub use spawn::{SpawnBehavior, SpawnHandle, SpawnPool};
