//! Core `SQLite` storage implementation.
//!
//! This module provides the main [`SqliteStorage`] struct and core database operations.

#![allow(clippy::missing_errors_doc)]

use crate::config::{Config, DEFAULT_MAX_CONNECTIONS};
use crate::error::StorageError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// `SQLite` storage backend.
///
/// Repository over the `activities` table and its `routine_activities`
/// links. Holds nothing but the shared connection pool.
#[derive(Debug, Clone)]
pub struct SqliteStorage {
    pub(crate) pool: SqlitePool,
}

impl SqliteStorage {
    /// Get a clone of the connection pool.
    ///
    /// Useful for collaborators that own the other tables (routines and
    /// their links) and want to share the pool.
    #[must_use]
    pub fn get_pool(&self) -> SqlitePool {
        self.pool.clone()
    }

    /// Wrap an existing pool without running migrations.
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create a new `SQLite` storage instance with the default pool size.
    ///
    /// # Arguments
    ///
    /// * `database_path` - Path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new(database_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        Self::connect(database_path, DEFAULT_MAX_CONNECTIONS).await
    }

    /// Create a storage instance from loaded configuration.
    pub async fn from_config(config: &Config) -> Result<Self, StorageError> {
        Self::connect(&config.database_path, config.max_connections).await
    }

    /// Open (creating if needed) the database file and run migrations.
    pub async fn connect(
        database_path: impl AsRef<Path>,
        max_connections: u32,
    ) -> Result<Self, StorageError> {
        let path = database_path.as_ref();

        // Create parent directories if they don't exist
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create database directory: {e}"),
            })?;
        }

        let options =
            SqliteConnectOptions::from_str(&format!("sqlite://{}?mode=rwc", path.display()))
                .map_err(|e| StorageError::ConnectionFailed {
                    message: format!("Invalid database path: {e}"),
                })?
                .journal_mode(SqliteJournalMode::Wal)
                .foreign_keys(true)
                .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to connect to database: {e}"),
            })?;

        tracing::debug!(path = %path.display(), max_connections, "database opened");

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Create a new in-memory `SQLite` storage instance for testing.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::ConnectionFailed`] if the connection fails.
    pub async fn new_in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Invalid memory database options: {e}"),
            })?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        // A second connection would see a different, empty memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed {
                message: format!("Failed to create in-memory database: {e}"),
            })?;

        let storage = Self { pool };
        storage.run_migrations().await?;

        Ok(storage)
    }

    /// Run database migrations.
    ///
    /// Each migration is idempotent (uses IF NOT EXISTS).
    pub(crate) async fn run_migrations(&self) -> Result<(), StorageError> {
        // Migration 001: activities, routines, routine_activities
        let schema_001 = include_str!("../../migrations/001_initial_schema.sql");
        sqlx::query(schema_001)
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::MigrationFailed {
                version: "001".to_string(),
                message: format!("Failed to run migration 001: {e}"),
            })?;

        Ok(())
    }

    /// Create a query error with the given query name and message.
    ///
    /// Every failed statement passes through here, so this is where the
    /// failure is reported.
    pub(crate) fn query_error(query: &str, message: String) -> StorageError {
        tracing::error!(query, error = %message, "storage query failed");
        StorageError::QueryFailed {
            query: query.to_string(),
            message,
        }
    }

    /// Map a driver error, turning unique-constraint violations into
    /// [`StorageError::NameConflict`].
    pub(crate) fn write_error(query: &str, name: &str, err: &sqlx::Error) -> StorageError {
        let unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if unique_violation {
            tracing::warn!(query, name, "activity name already taken");
            return StorageError::NameConflict {
                name: name.to_string(),
            };
        }

        Self::query_error(query, format!("{err}"))
    }

    /// Read a column from a row, reporting decode failures as internal errors.
    pub(crate) fn column<'r, T>(
        row: &'r sqlx::sqlite::SqliteRow,
        name: &str,
    ) -> Result<T, StorageError>
    where
        T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
    {
        use sqlx::Row;

        row.try_get(name).map_err(|e| StorageError::Internal {
            message: format!("Failed to decode column '{name}': {e}"),
        })
    }
}
