//! Error taxonomy for store operations.
//!
//! A lookup that matches no row is not an error: it comes back as `Ok(None)`.

use sea_orm::DbErr;

/// Errors returned by [`crate::store::TodoStore`] and its backends.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failure raised by the database engine, forwarded unmodified.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// The database directory could not be created.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The caller passed an id, page or step the store refuses to use.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The configuration does not describe a usable database.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Returns `true` if the underlying database engine raised the error.
    pub fn is_database(&self) -> bool {
        matches!(self, Self::Database(_))
    }
}
