use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Failed to transform file: {}", path.display())]
pub struct TransformError {
    /// Absolute path of the file that was attempted
    pub path: PathBuf,
    #[source]
    pub kind: TransformErrorKind,
}

#[derive(Error, Debug)]
pub enum TransformErrorKind {
    #[error("Failed to read file: {0}")]
    Read(#[source] std::io::Error),

    #[error("File is not valid UTF-8: {0}")]
    Decode(#[source] std::string::FromUtf8Error),
}
