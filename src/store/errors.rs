//! # Store Errors
//!
//! Error types for the persistence layer.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connection string names a backend we cannot talk to
    #[error("Unsupported database URL: {0}")]
    UnsupportedUrl(String),

    /// A user with this email already exists
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Migrated database does not match the schema descriptors
    #[error("Schema mismatch on table '{table}': {reason}")]
    SchemaMismatch { table: String, reason: String },

    /// Migration failed
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Any other driver error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Whether the driver rejected the write on a UNIQUE constraint
    pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
    }
}
