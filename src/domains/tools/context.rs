//! Shared state handed to every tool invocation.

use std::sync::Arc;

use crate::core::config::Config;
use crate::domains::storage::{LanguageStore, PgLanguageStore};

/// Configuration plus the storage accessor, built once at startup.
#[derive(Clone)]
pub struct ToolContext {
    config: Arc<Config>,
    store: Arc<dyn LanguageStore>,
}

impl ToolContext {
    /// Context backed by PostgreSQL, using `config.database`.
    pub fn new(config: Arc<Config>) -> Self {
        let store = Arc::new(PgLanguageStore::new(config.database.clone()));
        Self { config, store }
    }

    /// Context backed by an arbitrary store.
    pub fn with_store(config: Arc<Config>, store: Arc<dyn LanguageStore>) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn store(&self) -> &dyn LanguageStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
