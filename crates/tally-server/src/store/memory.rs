//! In-memory counter store.
//!
//! Backs the test suite; `None` models an absent key the same way the Redis
//! backend sees one.

use std::sync::Mutex;

use async_trait::async_trait;

use tally_core::error::{Result, TallyError};

use crate::store::CounterStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<i64>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Option<i64>>> {
        self.value
            .lock()
            .map_err(|_| TallyError::Internal("memory store poisoned".into()))
    }
}

#[async_trait]
impl CounterStore for MemoryStore {
    async fn ensure_exists(&self) -> Result<()> {
        let mut slot = self.lock()?;
        if slot.is_none() {
            *slot = Some(0);
        }
        Ok(())
    }

    async fn get(&self) -> Result<i64> {
        Ok(self.lock()?.unwrap_or(0))
    }

    async fn increment(&self) -> Result<i64> {
        let mut slot = self.lock()?;
        let next = slot.unwrap_or(0) + 1;
        *slot = Some(next);
        Ok(next)
    }

    async fn decrement(&self) -> Result<i64> {
        let mut slot = self.lock()?;
        let current = slot.unwrap_or(0);
        if current == 0 {
            return Err(TallyError::NegativeCounter);
        }
        let next = current - 1;
        *slot = Some(next);
        Ok(next)
    }

    async fn reset(&self) -> Result<i64> {
        *self.lock()? = Some(0);
        Ok(0)
    }
}
