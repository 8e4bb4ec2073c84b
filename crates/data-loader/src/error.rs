//! Error types for the data-loader crate.
//!
//! Every failure while turning a dataset file into an [`AnimeCatalog`] is
//! fatal for the caller: no partially loaded catalog is ever handed out.
//! The variants are kept distinct so the binary can print a specific
//! message for each kind.
//!
//! [`AnimeCatalog`]: crate::AnimeCatalog

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during dataset loading and lookup
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The dataset file does not exist
    #[error("Dataset file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file has no header, or a header with no data rows
    #[error("Dataset is empty")]
    Empty,

    /// A row in the dataset couldn't be parsed
    ///
    /// `line` is 1-based and counts the header row.
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: u64, reason: String },

    /// The raw bytes are not valid in the declared encoding
    #[error("Invalid {encoding} data at byte {offset}")]
    EncodingError {
        encoding: &'static str,
        offset: usize,
    },

    /// One or more required columns are absent from the header row
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// I/O error other than a missing file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Title lookup miss
    #[error("No anime titled '{0}' in the catalog")]
    TitleNotFound(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
