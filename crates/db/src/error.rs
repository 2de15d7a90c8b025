use lunchly_core::error::CoreError;

/// Error type for repository and startup operations.
///
/// Wraps [`CoreError`] for domain failures and passes store failures through
/// untouched.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A domain-level error from `lunchly_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience alias for repository return values.
pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// HTTP status a route handler should answer with for this error.
    ///
    /// Store failures other than `RowNotFound` are reported as 500.
    pub fn http_status(&self) -> u16 {
        match self {
            DbError::Core(core) => core.http_status(),
            DbError::Database(sqlx::Error::RowNotFound) => 404,
            DbError::Database(_) | DbError::Config(_) => 500,
        }
    }
}
