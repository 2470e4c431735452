//! Storage-specific error type wrapping sqlx errors.

use favhub_domain::error::FavoritesError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A stored favorites list could not be encoded or decoded.
    #[error("favorites list encoding error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for FavoritesError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
