//! Core domain types for the anime dataset.
//!
//! This module defines the fundamental data structures used throughout the system:
//! - [`AnimeRecord`]: one row of the dataset
//! - [`EpisodeRange`]: the four fixed story-length buckets
//! - [`AnimeCatalog`]: the read-only, in-memory dataset

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Record Type
// =============================================================================

/// Separator between genre tags inside the `genre` column
pub const GENRE_DELIMITER: &str = ", ";

/// One anime title from the dataset.
///
/// The `genre` column is kept verbatim ("Action, Comedy"); tags are derived
/// on demand by splitting on [`GENRE_DELIMITER`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeRecord {
    pub title: String,
    pub genre: String,
    /// Raw bucket label as stored in the file, e.g. "Very Long"
    pub episode_range: String,
    /// Blank cells load as `None`
    pub description: Option<String>,
    pub disclaimer: Option<String>,
}

impl AnimeRecord {
    /// Iterate over the individual genre tags of this record
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genre.split(GENRE_DELIMITER)
    }

    /// Case-insensitive substring test against the raw genre field.
    ///
    /// This is intentionally looser than tag equality: "Drama" also matches a
    /// record whose genre reads "Dramatic, Mystery".
    pub fn matches_genre(&self, tag: &str) -> bool {
        self.genre.to_lowercase().contains(&tag.to_lowercase())
    }

    /// Exact label equality against the record's episode range
    pub fn in_episode_range(&self, range: EpisodeRange) -> bool {
        self.episode_range == range.label()
    }
}

// =============================================================================
// Episode Range Buckets
// =============================================================================

/// Story-length buckets, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EpisodeRange {
    Short,
    Medium,
    Long,
    VeryLong,
}

impl EpisodeRange {
    /// All buckets in display order
    pub const ALL: [EpisodeRange; 4] = [
        EpisodeRange::Short,
        EpisodeRange::Medium,
        EpisodeRange::Long,
        EpisodeRange::VeryLong,
    ];

    /// Label as it appears in the `episode_range` column
    pub fn label(self) -> &'static str {
        match self {
            EpisodeRange::Short => "Short",
            EpisodeRange::Medium => "Medium",
            EpisodeRange::Long => "Long",
            EpisodeRange::VeryLong => "Very Long",
        }
    }

    /// Human-readable episode count for the menu
    pub fn description(self) -> &'static str {
        match self {
            EpisodeRange::Short => "1 to 15 episodes",
            EpisodeRange::Medium => "16 to 30 episodes",
            EpisodeRange::Long => "31 to 100 episodes",
            EpisodeRange::VeryLong => "101+ episodes",
        }
    }

    /// 1-based menu position. Only used for display.
    pub fn ordinal(self) -> usize {
        match self {
            EpisodeRange::Short => 1,
            EpisodeRange::Medium => 2,
            EpisodeRange::Long => 3,
            EpisodeRange::VeryLong => 4,
        }
    }
}

impl fmt::Display for EpisodeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// AnimeCatalog - The In-Memory Dataset
// =============================================================================

/// The loaded dataset.
///
/// Owns every record for the lifetime of the process and is never mutated
/// after construction. The unique genre list is derived once, here.
#[derive(Debug, Clone)]
pub struct AnimeCatalog {
    pub(crate) records: Vec<AnimeRecord>,
    /// Unique genre tags in first-seen order
    pub(crate) genres: Vec<String>,
}

impl AnimeCatalog {
    /// Build a catalog from already parsed records
    pub fn new(records: Vec<AnimeRecord>) -> Self {
        let genres = crate::index::collect_unique_genres(&records);
        Self { records, genres }
    }

    /// All records in dataset order
    pub fn records(&self) -> &[AnimeRecord] {
        &self.records
    }

    /// Unique genre tags in the order they first appear in the dataset
    pub fn unique_genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
