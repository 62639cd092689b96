use thiserror::Error;

/// Failure inserting a row, passed through from the storage backend as is.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("{0}")]
    Backend(String),
}
