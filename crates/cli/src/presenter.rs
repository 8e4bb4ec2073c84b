//! Rendering of recommendations, descriptions and load failures.
//!
//! Everything here returns plain strings; colouring is left to the console.

use data_loader::{AnimeRecord, DataLoadError};
use pipeline::Recommendation;

pub const NO_RECOMMENDATIONS: &str = "No anime recommendations found for your preferences!";
pub const NO_DISCLAIMER: &str = "No specific disclaimer available.";
pub const NO_DESCRIPTION: &str = "No detailed description available.";

const HEADERS: [&str; 2] = ["No.", "Anime"];

/// Numbered two-column grid of the recommended titles.
///
/// [`Recommendation::Empty`] renders [`NO_RECOMMENDATIONS`] instead of an
/// empty table.
pub fn format_table(recommendation: &Recommendation<'_>) -> String {
    let rows: Vec<[String; 2]> = match recommendation {
        Recommendation::Matches(set) => set
            .iter()
            .enumerate()
            .map(|(i, record)| [(i + 1).to_string(), record.title.clone()])
            .collect(),
        Recommendation::Empty => return NO_RECOMMENDATIONS.to_string(),
    };

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |left: char, fill: char, mid: char, right: char| {
        let segments: Vec<String> = widths
            .iter()
            .map(|w| fill.to_string().repeat(w + 2))
            .collect();
        format!("{left}{}{right}", segments.join(&mid.to_string()))
    };
    let line = |cells: [&str; 2]| {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!(" {cell:<w$} "))
            .collect();
        format!("│{}│", padded.join("│"))
    };

    let mut out = vec![rule('╒', '═', '╤', '╕'), line(HEADERS), rule('╞', '═', '╪', '╡')];
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(rule('├', '─', '┼', '┤'));
        }
        out.push(line([row[0].as_str(), row[1].as_str()]));
    }
    out.push(rule('╘', '═', '╧', '╛'));
    out.join("\n")
}

/// Title, disclaimer and synopsis sections for one record.
///
/// Missing or whitespace-only fields are replaced by fixed placeholders;
/// anything else is shown verbatim.
pub fn format_description(record: &AnimeRecord) -> String {
    let disclaimer = text_or(record.disclaimer.as_deref(), NO_DISCLAIMER);
    let description = text_or(record.description.as_deref(), NO_DESCRIPTION);

    format!(
        "\nAnime: {}\n\nDisclaimer:\n{}\n\nSynopsis:\n{}",
        record.title, disclaimer, description
    )
}

fn text_or<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value {
        Some(text) if !text.trim().is_empty() => text,
        _ => placeholder,
    }
}

/// User-facing message for a fatal load failure
pub fn format_load_error(err: &DataLoadError) -> String {
    match err {
        DataLoadError::NotFound { path } => {
            format!("Error: The specified file was not found ({}).", path.display())
        }
        DataLoadError::Empty => "Error: The file is empty.".to_string(),
        DataLoadError::ParseError { line, reason } => {
            format!("Error: There was an issue parsing the file (line {line}: {reason}).")
        }
        DataLoadError::EncodingError { encoding, offset } => format!(
            "Error: The file encoding is invalid (not {encoding} at byte {offset}). Please check the file encoding."
        ),
        DataLoadError::MissingColumns(columns) => {
            format!("Error: Missing required columns: {}", columns.join(", "))
        }
        other => format!("An error occurred while loading the file: {other}"),
    }
}
