//! Filter to keep only titles in the chosen episode-range bucket.

use crate::preferences::Preferences;
use crate::traits::Filter;
use anyhow::Result;
use data_loader::AnimeRecord;

/// Keeps candidates whose `episode_range` equals the bucket label exactly.
pub struct EpisodeRangeFilter;

impl Filter for EpisodeRangeFilter {
    fn name(&self) -> &str {
        "EpisodeRangeFilter"
    }

    fn apply<'a>(
        &self,
        candidates: Vec<&'a AnimeRecord>,
        preferences: &Preferences,
    ) -> Result<Vec<&'a AnimeRecord>> {
        let filtered = candidates
            .into_iter()
            .filter(|record| record.in_episode_range(preferences.episode_range))
            .collect();
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use data_loader::EpisodeRange;

    fn record(title: &str, episode_range: &str) -> AnimeRecord {
        AnimeRecord {
            title: title.to_string(),
            genre: "Action".to_string(),
            episode_range: episode_range.to_string(),
            description: None,
            disclaimer: None,
        }
    }

    #[test]
    fn test_episode_range_filter() {
        let records = vec![
            record("One Piece", "Very Long"),
            record("Chainsaw Man", "Short"),
            record("Bleach", "very long"), // label case differs - should NOT match
        ];
        let preferences = Preferences::new("Action", EpisodeRange::VeryLong);

        let filtered = EpisodeRangeFilter
            .apply(records.iter().collect(), &preferences)
            .unwrap();

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "One Piece");
    }
}
