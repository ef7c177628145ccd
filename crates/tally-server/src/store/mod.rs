//! Counter store backends.
//!
//! Handlers talk to the [`CounterStore`] trait so the Redis backend can be
//! swapped for the in-memory one in tests.

pub mod memory;
pub mod redis;

use async_trait::async_trait;

use tally_core::error::Result;

pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

/// Fixed key the counter lives under in the backing store.
pub const COUNTER_KEY: &str = "counter:value";

/// Operations on the single shared counter.
///
/// Contract: the counter never rests below zero. `decrement` refuses the
/// operation (with `TallyError::NegativeCounter`) instead of persisting a
/// negative value.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Initialize the counter to 0 if the key is absent.
    async fn ensure_exists(&self) -> Result<()>;

    /// Current value; an absent key reads as 0.
    async fn get(&self) -> Result<i64>;

    /// Atomically add 1, returning the new value.
    async fn increment(&self) -> Result<i64>;

    /// Atomically subtract 1, returning the new value. Fails with
    /// `TallyError::NegativeCounter` if the result would be below zero,
    /// leaving the stored value unchanged.
    async fn decrement(&self) -> Result<i64>;

    /// Set the value to 0 unconditionally.
    async fn reset(&self) -> Result<i64>;
}
