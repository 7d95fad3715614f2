//! In-memory [`LanguageStore`] used by dispatcher tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{LanguageEntry, LanguageStore, NewLanguage, StorageError, StorageResult, StoreStatus};

/// Vec-backed store with a monotonically increasing id sequence.
#[derive(Debug, Default)]
pub struct MemoryLanguageStore {
    rows: Mutex<Vec<LanguageEntry>>,
    fail_with: Option<String>,
}

impl MemoryLanguageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails with the given query error.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    fn check(&self) -> StorageResult<()> {
        match &self.fail_with {
            Some(message) => Err(StorageError::query(message)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LanguageStore for MemoryLanguageStore {
    async fn insert(&self, entry: &NewLanguage) -> StorageResult<i64> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let id = rows.last().map(|r| r.id + 1).unwrap_or(1);
        rows.push(LanguageEntry {
            id,
            name: Some(entry.name.clone()),
            is_static: entry.is_static,
            creator: entry.creator.clone(),
        });
        Ok(id)
    }

    async fn list(&self) -> StorageResult<Vec<LanguageEntry>> {
        self.check()?;
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn status(&self) -> StorageResult<StoreStatus> {
        self.check()?;
        Ok(StoreStatus {
            server_version: "in-memory".to_string(),
            table_exists: true,
            target: "memory".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let store = MemoryLanguageStore::new();
        let entry = NewLanguage {
            name: "Python".to_string(),
            is_static: false,
            creator: "system".to_string(),
        };
        let first = tokio_test::block_on(store.insert(&entry)).unwrap();
        let second = tokio_test::block_on(store.insert(&entry)).unwrap();
        assert!(second > first);
    }
}
