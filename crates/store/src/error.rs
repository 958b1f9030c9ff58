//! Error types for the storage layer.
//!
//! The taxonomy distinguishes the three failure classes callers care about:
//! a referenced identifier that does not resolve ([`StorageError::NotFound`]),
//! an identifier that is not even well-formed ([`StorageError::InvalidId`]),
//! and failures of the underlying store ([`BackendError`]). Each kind is
//! preserved all the way to the caller rather than collapsed into a single
//! generic failure.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use std::fmt;

use thiserror::Error;

use crate::id::InvalidIdError;

/// The kind of record an operation failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A patient demographic record.
    Patient,
    /// An encounter record.
    Encounter,
    /// A vitals record.
    Vitals,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Patient => write!(f, "patient"),
            RecordKind::Encounter => write!(f, "encounter"),
            RecordKind::Vitals => write!(f, "vitals"),
        }
    }
}

/// The primary error type for all storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The referenced identifier does not resolve to a record.
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },

    /// The identifier is not in the well-formed identifier format.
    #[error(transparent)]
    InvalidId(#[from] InvalidIdError),

    /// The underlying store is unreachable or rejected the operation.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Errors originating from the database backend.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Connection to the backend failed.
    #[error("connection failed: {message}")]
    ConnectionFailed { message: String },

    /// Connection pool exhausted.
    #[error("connection pool exhausted")]
    PoolExhausted,

    /// Query execution error.
    #[error("query execution failed: {message}")]
    QueryError { message: String },

    /// Serialization/deserialization error.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Internal backend error.
    #[error("internal storage error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

/// Result type alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// Implement conversions from common error types

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        StorageError::Backend(BackendError::Internal {
            message: err.to_string(),
            source: Some(Box::new(err)),
        })
    }
}

impl From<r2d2::Error> for StorageError {
    fn from(_err: r2d2::Error) -> Self {
        StorageError::Backend(BackendError::PoolExhausted)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Backend(BackendError::Serialization {
            message: err.to_string(),
        })
    }
}
