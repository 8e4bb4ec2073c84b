//! Parser for the anime dataset file.
//!
//! The dataset is a CSV file with a header row. Required columns:
//! `title, genre, episode_range, description, disclaimer`. Any other
//! columns are ignored.
//!
//! Parsing happens in two steps:
//! 1. Decode the raw bytes using the declared [`Encoding`]
//! 2. Read the header, check required columns, deserialize every row
//!
//! A row may stop short of the header; absent trailing optional cells load
//! as `None`. A row longer than the header is a parse error.

use crate::error::{DataLoadError, Result};
use crate::types::AnimeRecord;

/// Columns the dataset must provide, in the order they are reported when missing
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "title",
    "genre",
    "episode_range",
    "description",
    "disclaimer",
];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Character encoding of the dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// ISO-8859-1. Every byte is a valid character, so decoding never fails.
    #[default]
    Latin1,
    /// Strict UTF-8. A leading byte-order mark is skipped.
    Utf8,
}

impl Encoding {
    pub fn name(self) -> &'static str {
        match self {
            Encoding::Latin1 => "ISO-8859-1",
            Encoding::Utf8 => "UTF-8",
        }
    }
}

/// Decode raw file bytes into a `String`
pub fn decode(bytes: &[u8], encoding: Encoding) -> Result<String> {
    match encoding {
        // ISO-8859-1 is a single-byte encoding where each byte maps directly to a Unicode code point
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
        Encoding::Utf8 => {
            let (body, skipped) = match bytes.strip_prefix(UTF8_BOM) {
                Some(rest) => (rest, UTF8_BOM.len()),
                None => (bytes, 0),
            };
            std::str::from_utf8(body)
                .map(str::to_owned)
                .map_err(|e| DataLoadError::EncodingError {
                    encoding: encoding.name(),
                    offset: skipped + e.valid_up_to(),
                })
        }
    }
}

/// Parse a whole dataset file into records, preserving row order
pub fn parse_catalog(bytes: &[u8], encoding: Encoding) -> Result<Vec<AnimeRecord>> {
    let content = decode(bytes, encoding)?;
    if content.trim().is_empty() {
        return Err(DataLoadError::Empty);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    let missing = missing_columns(&headers);
    if !missing.is_empty() {
        return Err(DataLoadError::MissingColumns(missing));
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let line = row.position().map(|p| p.line()).unwrap_or(0);

        if row.len() > headers.len() {
            return Err(DataLoadError::ParseError {
                line,
                reason: format!(
                    "Expected {} fields, saw {}",
                    headers.len(),
                    row.len()
                ),
            });
        }

        let mut record: AnimeRecord =
            row.deserialize(Some(&headers))
                .map_err(|e| DataLoadError::ParseError {
                    line,
                    reason: e.to_string(),
                })?;

        if record.title.trim().is_empty() {
            return Err(DataLoadError::ParseError {
                line,
                reason: "Missing title".to_string(),
            });
        }

        record.description = non_blank(record.description);
        record.disclaimer = non_blank(record.disclaimer);
        records.push(record);
    }

    if records.is_empty() {
        return Err(DataLoadError::Empty);
    }

    tracing::debug!("Parsed {} rows ({})", records.len(), encoding.name());
    Ok(records)
}

/// Required columns absent from `headers`, in canonical order
fn missing_columns(headers: &csv::StringRecord) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| column.to_string())
        .collect()
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn csv_error(err: csv::Error) -> DataLoadError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    DataLoadError::ParseError {
        line,
        reason: err.to_string(),
    }
}
