mod error;


pub use error::{TransformError, TransformErrorKind};

use crate::message::{Message, FILE_NAME_HEADER};
use std::path::Path;
use tracing::debug;

/// Converts a file into a [`Message`] whose payload is the file's UTF-8 text
/// and whose only header is `file_name` (the base name of the file).
#[derive(Debug, Clone, Copy, Default)]
pub struct FileToMessageTransformer;

impl FileToMessageTransformer {
    pub fn new() -> Self {
        Self
    }

    /// Read and decode `path` into a message.
    ///
    /// Any read or decode failure is terminal and reported with the absolute
    /// path that was attempted.
    pub fn transform(&self, path: &Path) -> Result<Message, TransformError> {
        let bytes = std::fs::read(path).map_err(|e| TransformError {
            path: absolute(path),
            kind: TransformErrorKind::Read(e),
        })?;

        let content = String::from_utf8(bytes).map_err(|e| TransformError {
            path: absolute(path),
            kind: TransformErrorKind::Decode(e),
        })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        debug!(file_name = %file_name, bytes = content.len(), "transformed file");

        Ok(Message::with_payload(content)
            .header(FILE_NAME_HEADER, file_name)
            .build())
    }
}

fn absolute(path: &Path) -> std::path::PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
