use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The targeted row does not exist; carries the entity label used in messages.
    #[error("{0} not found")]
    NotFound(&'static str),
}

pub type Result<T> = std::result::Result<T, StorageError>;

// SQLITE_BUSY, returned once the busy timeout has elapsed
const SQLITE_BUSY: &str = "5";

impl StorageError {
    /// The lock-wait timeout elapsed while another writer held the database.
    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            StorageError::Database(sqlx::Error::Database(e))
                if e.code().as_deref() == Some(SQLITE_BUSY)
        )
    }
}
