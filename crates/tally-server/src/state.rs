//! Shared application state.
//!
//! The store client is constructed once in `main` and injected here; handlers
//! reach it through `AppState` rather than any process-global handle.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::CounterStore;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ServerConfig,
    store: Arc<dyn CounterStore>,
}

impl AppState {
    pub fn new(cfg: ServerConfig, store: Arc<dyn CounterStore>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { cfg, store }),
        }
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &dyn CounterStore {
        self.inner.store.as_ref()
    }
}
