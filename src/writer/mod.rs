mod error;


pub use error::PersistenceError;

use crate::message::Message;
use tracing::debug;

/// Filename stored when a message has no usable `file_name` header
pub const UNKNOWN_FILE_NAME: &str = "unknown";

/// Storage capability needed by [`FileMessageWriter`]: insert one
/// `(filename, content)` pair into `file_data`.
pub trait RowInserter {
    fn insert_row(&self, filename: &str, content: &str) -> Result<(), PersistenceError>;
}

impl<T: RowInserter + ?Sized> RowInserter for &T {
    fn insert_row(&self, filename: &str, content: &str) -> Result<(), PersistenceError> {
        (**self).insert_row(filename, content)
    }
}

/// Writes the file name and content carried by a message as one row
pub struct FileMessageWriter<I> {
    inserter: I,
}

impl<I: RowInserter> FileMessageWriter<I> {
    pub fn new(inserter: I) -> Self {
        Self { inserter }
    }

    /// Insert one row for `message`.
    ///
    /// A missing or empty `file_name` header is stored as `"unknown"`.
    /// Insert failures are returned unchanged; there is no retry.
    pub fn write(&self, message: &Message) -> Result<(), PersistenceError> {
        let filename = row_file_name(message);
        let content = message.payload();

        debug!(filename, bytes = content.len(), "writing file_data row");
        self.inserter.insert_row(filename, content)
    }

    pub fn inserter(&self) -> &I {
        &self.inserter
    }

    pub fn into_inner(self) -> I {
        self.inserter
    }
}

// Empty and missing are treated alike.
fn row_file_name(message: &Message) -> &str {
    match message.file_name() {
        Some(name) if !name.is_empty() => name,
        _ => UNKNOWN_FILE_NAME,
    }
}
