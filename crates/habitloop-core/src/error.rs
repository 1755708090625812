//! Core error types for habitloop-core.
//!
//! This module defines the error hierarchy using thiserror. Fallible
//! operations at the storage and scheduling boundaries return these types;
//! the pure engines (rollover, trigger computation) cannot fail at runtime.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Reminder scheduling errors
    #[error("Reminder error: {0}")]
    Reminder(#[from] ReminderError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the blob store
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Store schema migration failed
    #[error("Store migration failed: {0}")]
    MigrationFailed(String),

    /// Store is locked by another process
    #[error("Store is locked")]
    Locked,
}

/// Reminder scheduling errors.
#[derive(Error, Debug)]
pub enum ReminderError {
    /// Notification permission was denied; nothing was scheduled.
    /// Any previously scheduled reminder remains cancelled.
    #[error("Notification permission denied; reminder not scheduled")]
    PermissionDenied,

    /// The external notification collaborator failed.
    #[error("Notification gateway error: {0}")]
    Gateway(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Time-of-day component out of range
    #[error("Invalid time of day: {hour:02}:{minute:02}")]
    InvalidTimeOfDay { hour: u32, minute: u32 },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    StorageError::Locked
                } else {
                    StorageError::QueryFailed(err.to_string())
                }
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
