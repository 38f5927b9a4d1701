//! Error types for the activity store.
//!
//! This module defines a small error hierarchy:
//! - [`AppError`]: Top-level application errors
//! - [`StorageError`]: Database operation errors and repository outcomes
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level application error.
///
/// Returned by the binary entry point; wraps all subsystem errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output encoding error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Storage errors.
///
/// Besides genuine database failures, this covers the repository outcomes
/// callers must be able to tell apart: a missing row on update, an insert
/// ignored because of the unique name, and a rejected patch column.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Failed to connect to the database.
    #[error("Database connection failed: {message}")]
    ConnectionFailed {
        /// Description of the connection failure.
        message: String,
    },

    /// A database query failed.
    #[error("Query failed: {query} - {message}")]
    QueryFailed {
        /// The query that failed (may be truncated).
        query: String,
        /// Description of the failure.
        message: String,
    },

    /// Activity not found.
    #[error("Activity not found: {id}")]
    ActivityNotFound {
        /// The activity ID that was not found.
        id: i64,
    },

    /// Another activity already uses this name; the write was not applied.
    #[error("Activity name already exists: {name}")]
    NameConflict {
        /// The conflicting name.
        name: String,
    },

    /// A patch named a column that cannot be updated.
    #[error("Invalid field {field}: {reason}")]
    InvalidField {
        /// The rejected column name.
        field: String,
        /// Why the column was rejected.
        reason: String,
    },

    /// Database migration failed.
    #[error("Migration failed: {version} - {message}")]
    MigrationFailed {
        /// The migration version that failed.
        version: String,
        /// Description of the failure.
        message: String,
    },

    /// Internal storage error.
    #[error("Internal storage error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl StorageError {
    /// Returns true if this error is a repository outcome rather than a
    /// database failure.
    ///
    /// Not-found rows, ignored inserts and rejected patch columns are normal
    /// results of a well-formed call; everything else means the storage
    /// itself misbehaved.
    #[must_use]
    pub const fn is_outcome(&self) -> bool {
        matches!(
            self,
            Self::ActivityNotFound { .. } | Self::NameConflict { .. } | Self::InvalidField { .. }
        )
    }
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
