//! Storage domain: the `codingLanguage` table.
//!
//! The table is owned exclusively by this module. Tools talk to it through
//! the [`LanguageStore`] trait; production code uses [`PgLanguageStore`],
//! which opens one PostgreSQL connection per call and closes it before
//! returning.
//!
//! Canonical schema:
//!
//! ```sql
//! CREATE TABLE "codingLanguage" (
//!     id         SERIAL PRIMARY KEY,
//!     name       TEXT,
//!     "isStatic" BOOLEAN,
//!     creator    TEXT
//! );
//! ```

mod error;
mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

pub use error::{StorageError, StorageResult};
pub use postgres::PgLanguageStore;

/// Name of the backing table (quoted in SQL because of the mixed case).
pub const TABLE_NAME: &str = "codingLanguage";

/// A single row of the `codingLanguage` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    /// Database-generated, never reassigned.
    pub id: i64,

    /// May be NULL for rows written under the older name-less schema.
    pub name: Option<String>,

    pub is_static: bool,

    pub creator: String,
}

impl LanguageEntry {
    /// "Static" or "Dynamic", as shown in listings.
    pub fn typing_label(&self) -> &'static str {
        if self.is_static { "Static" } else { "Dynamic" }
    }

    /// One listing line, e.g. `ID: 3 | Java | Type: Static | Creator: Oracle`.
    pub fn display_line(&self) -> String {
        format!(
            "ID: {} | {} | Type: {} | Creator: {}",
            self.id,
            self.name.as_deref().unwrap_or("unnamed"),
            self.typing_label(),
            self.creator
        )
    }
}

/// Values for a row about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLanguage {
    pub name: String,
    pub is_static: bool,
    pub creator: String,
}

/// Result of probing the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreStatus {
    /// Output of `SELECT version()`.
    pub server_version: String,

    /// Whether the `codingLanguage` table exists.
    pub table_exists: bool,

    /// `user@host:port/db`, without the password.
    pub target: String,
}

/// Access to the coding-language table.
///
/// Each call is independent: no state is kept between calls and nothing is
/// retried.
#[async_trait]
pub trait LanguageStore: Send + Sync {
    /// Insert one row and return its generated id.
    async fn insert(&self, entry: &NewLanguage) -> StorageResult<i64>;

    /// Return every row, ascending by id.
    async fn list(&self) -> StorageResult<Vec<LanguageEntry>>;

    /// Probe connectivity and table presence.
    async fn status(&self) -> StorageResult<StoreStatus>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_line() {
        let entry = LanguageEntry {
            id: 7,
            name: Some("Java".to_string()),
            is_static: true,
            creator: "Oracle".to_string(),
        };
        assert_eq!(
            entry.display_line(),
            "ID: 7 | Java | Type: Static | Creator: Oracle"
        );
    }

    #[test]
    fn test_display_line_without_name() {
        let entry = LanguageEntry {
            id: 1,
            name: None,
            is_static: false,
            creator: "system".to_string(),
        };
        assert_eq!(
            entry.display_line(),
            "ID: 1 | unnamed | Type: Dynamic | Creator: system"
        );
    }
}
