//! End-of-session feedback capture and persistence.

use chrono::{DateTime, Local};
use std::fs::OpenOptions;
use std::path::PathBuf;
use thiserror::Error;

/// Header row written when the feedback file is first created
pub const FEEDBACK_HEADER: [&str; 2] = ["Timestamp", "Suggestion"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// One improvement suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackEntry {
    pub timestamp: DateTime<Local>,
    pub suggestion: String,
}

impl FeedbackEntry {
    /// Stamp a suggestion with the current local time
    pub fn new(suggestion: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            suggestion: suggestion.into(),
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Failure to store feedback. Reported to the user, never fatal.
#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("could not open feedback file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not write feedback row: {0}")]
    Csv(#[from] csv::Error),
}

/// Append-only destination for feedback
pub trait FeedbackSink {
    fn append(&mut self, entry: &FeedbackEntry) -> Result<(), PersistenceError>;
}

/// Appends rows to a CSV file with `Timestamp,Suggestion` columns
#[derive(Debug, Clone)]
pub struct CsvFeedbackSink {
    path: PathBuf,
}

impl CsvFeedbackSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FeedbackSink for CsvFeedbackSink {
    fn append(&mut self, entry: &FeedbackEntry) -> Result<(), PersistenceError> {
        // An existing but empty file still needs the header
        let needs_header = std::fs::metadata(&self.path)
            .map(|m| m.len() == 0)
            .unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if needs_header {
            writer.write_record(FEEDBACK_HEADER)?;
        }
        writer.write_record([entry.formatted_timestamp().as_str(), entry.suggestion.as_str()])?;
        writer.flush()?;

        tracing::info!("Feedback appended to {:?}", self.path);
        Ok(())
    }
}
