//! PostgreSQL-backed [`LanguageStore`].
//!
//! No pool: every call opens a fresh connection, runs exactly one
//! parameterized statement (autocommit, so an insert is committed when it
//! returns) and closes the connection whether the statement succeeded or not.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{Connection, FromRow};
use tracing::{debug, info, instrument, warn};

use super::{
    LanguageEntry, LanguageStore, NewLanguage, StorageError, StorageResult, StoreStatus, TABLE_NAME,
};
use crate::core::config::DatabaseConfig;

const INSERT_SQL: &str = r#"
    INSERT INTO "codingLanguage" (name, "isStatic", creator)
    VALUES ($1, $2, $3)
    RETURNING id::BIGINT
"#;

const SELECT_ALL_SQL: &str = r#"
    SELECT id::BIGINT AS id, name, COALESCE("isStatic", FALSE) AS is_static, creator
    FROM "codingLanguage"
    ORDER BY id
"#;

const TABLE_EXISTS_SQL: &str = r#"
    SELECT EXISTS (
        SELECT FROM information_schema.tables
        WHERE table_name = $1
    )
"#;

#[derive(Debug, FromRow)]
struct LanguageRow {
    id: i64,
    name: Option<String>,
    is_static: bool,
    creator: Option<String>,
}

impl From<LanguageRow> for LanguageEntry {
    fn from(row: LanguageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            is_static: row.is_static,
            creator: row.creator.unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

/// Store that talks to PostgreSQL with one connection per call.
#[derive(Debug, Clone)]
pub struct PgLanguageStore {
    config: DatabaseConfig,
}

impl PgLanguageStore {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Open a connection, failing fast when no password is configured.
    async fn connect(&self) -> StorageResult<PgConnection> {
        let password = match self.config.password.as_deref() {
            Some(p) if !p.is_empty() => p,
            _ => return Err(StorageError::MissingCredential),
        };

        let target = self.config.target();
        info!("Attempting database connection to {}", target);

        let options = PgConnectOptions::new()
            .host(&self.config.host)
            .port(self.config.port)
            .database(&self.config.database)
            .username(&self.config.username)
            .password(password);

        let secs = self.config.connect_timeout_secs;
        let conn = tokio::time::timeout(
            Duration::from_secs(secs),
            PgConnection::connect_with(&options),
        )
        .await
        .map_err(|_| StorageError::Timeout {
            target: target.clone(),
            secs,
        })?
        .map_err(|e| StorageError::connection(&target, e))?;

        debug!("Database connection established");
        Ok(conn)
    }

    /// Close a connection; a failed close is logged, never surfaced.
    async fn release(conn: PgConnection) {
        if let Err(e) = conn.close().await {
            warn!("Error while closing database connection: {}", e);
        }
    }
}

#[async_trait]
impl LanguageStore for PgLanguageStore {
    #[instrument(skip(self, entry), fields(name = %entry.name))]
    async fn insert(&self, entry: &NewLanguage) -> StorageResult<i64> {
        let mut conn = self.connect().await?;

        let result = sqlx::query_scalar::<_, i64>(INSERT_SQL)
            .bind(&entry.name)
            .bind(entry.is_static)
            .bind(&entry.creator)
            .fetch_one(&mut conn)
            .await;

        Self::release(conn).await;
        result.map_err(StorageError::query)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> StorageResult<Vec<LanguageEntry>> {
        let mut conn = self.connect().await?;

        let result = sqlx::query_as::<_, LanguageRow>(SELECT_ALL_SQL)
            .fetch_all(&mut conn)
            .await;

        Self::release(conn).await;
        let rows = result.map_err(StorageError::query)?;
        Ok(rows.into_iter().map(LanguageEntry::from).collect())
    }

    #[instrument(skip(self))]
    async fn status(&self) -> StorageResult<StoreStatus> {
        let mut conn = self.connect().await?;

        let version = sqlx::query_scalar::<_, String>("SELECT version()")
            .fetch_one(&mut conn)
            .await;
        let exists = match &version {
            Ok(_) => Some(
                sqlx::query_scalar::<_, bool>(TABLE_EXISTS_SQL)
                    .bind(TABLE_NAME)
                    .fetch_one(&mut conn)
                    .await,
            ),
            Err(_) => None,
        };

        Self::release(conn).await;

        let server_version = version.map_err(StorageError::query)?;
        let table_exists = match exists {
            Some(result) => result.map_err(StorageError::query)?,
            None => false,
        };

        Ok(StoreStatus {
            server_version,
            table_exists,
            target: self.config.target(),
        })
    }
}
