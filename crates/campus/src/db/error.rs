//! Database error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::model::{EntityKind, RecordId};

/// Errors from database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQLite error from rusqlite.
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error when creating directories or files.
    #[error("IO error for path '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A migration failed to apply.
    #[error("Migration failed at version {version}: {reason}")]
    Migration { version: u32, reason: String },

    /// The database lock was poisoned.
    #[error("Database lock poisoned")]
    LockPoisoned,

    /// A record with this identifier is already stored.
    #[error("A {kind} with id {id} already exists")]
    DuplicateId { kind: EntityKind, id: RecordId },

    /// A list column could not be encoded as JSON.
    #[error("Failed to encode column value: {0}")]
    Encode(#[from] serde_json::Error),
}
