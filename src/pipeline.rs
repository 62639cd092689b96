use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use uuid::Uuid;
use walkdir::WalkDir;

use crate::config::IngestConfig;
use crate::transformer::FileToMessageTransformer;
use crate::writer::{FileMessageWriter, RowInserter};

/// A file that could not be turned into a message
#[derive(Debug, Clone, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of one ingestion run
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    pub run_id: Uuid,
    pub started_at: String,
    pub finished_at: String,
    /// Paths stored as rows, in processing order
    pub ingested: Vec<PathBuf>,
    pub failed: Vec<FailedFile>,
}

/// One-shot directory ingestion: every accepted file is transformed into a
/// message and written as a `file_data` row.
pub struct Ingester<I> {
    config: IngestConfig,
    transformer: FileToMessageTransformer,
    writer: FileMessageWriter<I>,
}

impl<I: RowInserter> Ingester<I> {
    pub fn new(config: IngestConfig, inserter: I) -> Self {
        Self {
            config,
            transformer: FileToMessageTransformer::new(),
            writer: FileMessageWriter::new(inserter),
        }
    }

    /// Candidate files under the input directory, sorted by path
    pub fn discover(&self) -> Result<Vec<PathBuf>> {
        let mut walker = WalkDir::new(&self.config.input_dir).min_depth(1);
        if !self.config.recursive {
            walker = walker.max_depth(1);
        }

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.with_context(|| {
                format!(
                    "Failed to scan input directory {}",
                    self.config.input_dir.display()
                )
            })?;

            if entry.file_type().is_file() && self.config.accepts(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// Process every discovered file.
    ///
    /// Unreadable files are recorded in the report and skipped. A failed insert
    /// stops the run.
    pub fn run(&self) -> Result<IngestReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now().to_rfc3339();
        info!(%run_id, input_dir = %self.config.input_dir.display(), "starting ingestion run");

        let files = self.discover()?;
        let mut ingested = Vec::new();
        let mut failed = Vec::new();

        for path in files {
            let message = match self.transformer.transform(&path) {
                Ok(message) => message,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    failed.push(FailedFile {
                        path,
                        error: format!("{}: {}", e, e.kind),
                    });
                    continue;
                }
            };

            self.writer
                .write(&message)
                .with_context(|| format!("Failed to store {}", path.display()))?;
            ingested.push(path);
        }

        info!(
            %run_id,
            ingested = ingested.len(),
            failed = failed.len(),
            "ingestion run finished"
        );

        Ok(IngestReport {
            run_id,
            started_at,
            finished_at: Utc::now().to_rfc3339(),
            ingested,
            failed,
        })
    }

    pub fn writer(&self) -> &FileMessageWriter<I> {
        &self.writer
    }
}
