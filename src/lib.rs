// Public API exports
pub mod config;
pub mod db;
pub mod logging;
pub mod message;
pub mod pipeline;
pub mod transformer;
pub mod writer;

// Re-export main types for convenience
pub use message::{Headers, Message, MessageBuilder, FILE_NAME_HEADER};

pub use transformer::{FileToMessageTransformer, TransformError, TransformErrorKind};

pub use writer::{FileMessageWriter, PersistenceError, RowInserter, UNKNOWN_FILE_NAME};

pub use db::{FileDataStore, FileRow};

pub use config::{ConfigError, ConfigOverrides, IngestConfig};

pub use pipeline::{FailedFile, IngestReport, Ingester};
