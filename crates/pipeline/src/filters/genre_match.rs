//! Filter to keep only titles whose genre field mentions the chosen genre.
//!
//! Matching is a case-insensitive substring test on the raw genre column,
//! so "Action, Comedy" matches "action" and "Dramatic" matches "drama".

use crate::preferences::Preferences;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::AnimeRecord;

/// Keeps candidates whose genre field contains the preferred genre.
pub struct GenreMatchFilter;

impl Filter for GenreMatchFilter {
    fn name(&self) -> &str {
        "GenreMatchFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a AnimeRecord>,
        preferences: &Preferences,
    ) -> Result<Vec<&'a AnimeRecord>> {
        let filtered = candidates
            .into_iter()
            .filter(|record| record.matches_genre(&preferences.genre))
            .collect();
        Ok(filtered)
    }
}
