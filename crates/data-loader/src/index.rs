//! AnimeCatalog loading and query logic.
//!
//! This module builds the catalog from a dataset file and exposes the
//! column-based queries the rest of the system needs:
//! - unique genre tags (first-seen order)
//! - genre filtering (case-insensitive substring)
//! - episode-range filtering (exact label)
//! - lookup by title

use crate::error::{DataLoadError, Result};
use crate::parser::{self, Encoding};
use crate::types::*;
use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

impl AnimeCatalog {
    /// Load the dataset from a CSV file.
    ///
    /// This is the main entry point for loading data. Any failure aborts the
    /// load; a partially parsed catalog is never returned.
    pub fn load_from_file(path: &Path, encoding: Encoding) -> Result<Self> {
        tracing::info!("Loading anime dataset from {:?} ({})", path, encoding.name());

        let bytes = std::fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::NotFound {
                path: path.to_path_buf(),
            },
            _ => DataLoadError::Io(e),
        })?;

        let records = parser::parse_catalog(&bytes, encoding)?;
        let catalog = AnimeCatalog::new(records);

        tracing::info!(
            "Loaded {} titles across {} genres",
            catalog.len(),
            catalog.unique_genres().len()
        );
        Ok(catalog)
    }

    /// Records whose raw genre field contains `tag`, ignoring case.
    ///
    /// Dataset order is preserved.
    pub fn filter_by_genre(&self, tag: &str) -> Vec<&AnimeRecord> {
        self.records
            .iter()
            .filter(|record| record.matches_genre(tag))
            .collect()
    }

    /// Narrow `records` to those in the given episode range
    pub fn filter_by_episode_range<'a>(
        records: &[&'a AnimeRecord],
        range: EpisodeRange,
    ) -> Vec<&'a AnimeRecord> {
        records
            .iter()
            .copied()
            .filter(|record| record.in_episode_range(range))
            .collect()
    }

    /// Episode ranges that at least one record matching `tag` falls into
    pub fn episode_ranges_for(&self, tag: &str) -> HashSet<EpisodeRange> {
        let matches = self.filter_by_genre(tag);
        EpisodeRange::ALL
            .into_iter()
            .filter(|&range| matches.iter().any(|r| r.in_episode_range(range)))
            .collect()
    }

    /// Find a record by title. The first match wins if titles repeat.
    pub fn lookup_by_title(&self, title: &str) -> Result<&AnimeRecord> {
        self.records
            .iter()
            .find(|record| record.title == title)
            .ok_or_else(|| DataLoadError::TitleNotFound(title.to_string()))
    }
}

/// Split every genre field, flatten, and dedupe keeping the first occurrence
pub(crate) fn collect_unique_genres(records: &[AnimeRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut genres = Vec::new();

    for tag in records.iter().flat_map(|r| r.genre_tags()) {
        if tag.is_empty() {
            continue;
        }
        if seen.insert(tag) {
            genres.push(tag.to_string());
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(title: &str, genre: &str, episode_range: &str) -> AnimeRecord {
        AnimeRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            episode_range: episode_range.to_string(),
            description: Some(format!("{title} description")),
            disclaimer: Some(format!("{title} disclaimer")),
        }
    }

    fn create_test_catalog() -> AnimeCatalog {
        AnimeCatalog::new(vec![
            record("Naruto", "Action, Adventure, Fantasy", "Very Long"),
            record("Spy x Family", "Action, Comedy", "Long"),
            record("Your Lie in April", "Drama, Romance", "Medium"),
            record("Violet Evergarden", "Drama", "Short"),
        ])
    }

    #[test]
    fn test_unique_genres_first_seen_order() {
        let catalog = create_test_catalog();
        assert_eq!(
            catalog.unique_genres(),
            &["Action", "Adventure", "Fantasy", "Comedy", "Drama", "Romance"]
        );
    }

    #[test]
    fn test_unique_genres_skips_empty_tags() {
        let catalog = AnimeCatalog::new(vec![record("A", "", "Short"), record("B", "Drama", "Short")]);
        assert_eq!(catalog.unique_genres(), &["Drama"]);
    }

    #[test]
    fn test_filter_by_genre() {
        let catalog = create_test_catalog();

        let titles: Vec<&str> = catalog
            .filter_by_genre("action")
            .iter()
            .map(|r| r.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Naruto", "Spy x Family"]);

        // Substring, not tag equality
        assert_eq!(catalog.filter_by_genre("dra").len(), 2);
        assert!(catalog.filter_by_genre("Horror").is_empty());
    }

    #[test]
    fn test_filter_by_episode_range() {
        let catalog = create_test_catalog();
        let drama = catalog.filter_by_genre("Drama");

        let short = AnimeCatalog::filter_by_episode_range(&drama, EpisodeRange::Short);
        assert_eq!(short.len(), 1);
        assert_eq!(short[0].title, "Violet Evergarden");

        assert!(AnimeCatalog::filter_by_episode_range(&drama, EpisodeRange::Long).is_empty());
    }

    #[test]
    fn test_episode_ranges_for_genre() {
        let catalog = create_test_catalog();
        let ranges = catalog.episode_ranges_for("Action");

        assert!(ranges.contains(&EpisodeRange::VeryLong));
        assert!(ranges.contains(&EpisodeRange::Long));
        assert!(!ranges.contains(&EpisodeRange::Short));
        assert!(!ranges.contains(&EpisodeRange::Medium));
    }

    #[test]
    fn test_lookup_by_title() {
        let catalog = create_test_catalog();
        let found = catalog.lookup_by_title("Spy x Family").unwrap();
        assert_eq!(found.episode_range, "Long");

        assert!(matches!(
            catalog.lookup_by_title("Bleach"),
            Err(DataLoadError::TitleNotFound(_))
        ));
    }

    #[test]
    fn test_lookup_first_match_wins() {
        let catalog = AnimeCatalog::new(vec![
            record("Hunter x Hunter", "Action", "Medium"),
            record("Hunter x Hunter", "Action", "Very Long"),
        ]);
        let found = catalog.lookup_by_title("Hunter x Hunter").unwrap();
        assert_eq!(found.episode_range, "Medium");
    }
}
