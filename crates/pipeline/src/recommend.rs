//! Recommendation pass: genre filter, then episode-range filter.
//!
//! An empty result is reported as [`Recommendation::Empty`] rather than an
//! empty set, so callers show a "no results" message instead of a table.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{EpisodeRangeFilter, GenreMatchFilter};
use crate::preferences::Preferences;
use anyhow::Result;
use data_loader::{AnimeCatalog, AnimeRecord};

/// Ordered titles produced by one filter pass, in dataset order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationSet<'a> {
    records: Vec<&'a AnimeRecord>,
}

impl<'a> RecommendationSet<'a> {
    pub(crate) fn new(records: Vec<&'a AnimeRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record at a 0-based position
    pub fn get(&self, index: usize) -> Option<&'a AnimeRecord> {
        self.records.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a AnimeRecord> + '_ {
        self.records.iter().copied()
    }

    pub fn titles(&self) -> Vec<&'a str> {
        self.records.iter().map(|r| r.title.as_str()).collect()
    }
}

/// Outcome of a recommendation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation<'a> {
    Matches(RecommendationSet<'a>),
    /// Nothing satisfied both preferences
    Empty,
}

impl<'a> Recommendation<'a> {
    /// Wrap filter output, mapping zero rows to [`Recommendation::Empty`]
    pub fn from_matches(records: Vec<&'a AnimeRecord>) -> Self {
        if records.is_empty() {
            Recommendation::Empty
        } else {
            Recommendation::Matches(RecommendationSet::new(records))
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Recommendation::Empty)
    }

    pub fn as_set(&self) -> Option<&RecommendationSet<'a>> {
        match self {
            Recommendation::Matches(set) => Some(set),
            Recommendation::Empty => None,
        }
    }

    pub fn into_set(self) -> Option<RecommendationSet<'a>> {
        match self {
            Recommendation::Matches(set) => Some(set),
            Recommendation::Empty => None,
        }
    }
}

/// The standard pipeline: genre first, then episode range
pub fn recommendation_pipeline() -> FilterPipeline {
    FilterPipeline::new()
        .add_filter(GenreMatchFilter)
        .add_filter(EpisodeRangeFilter)
}

/// Run one recommendation pass over the whole catalog
pub fn recommend<'a>(
    catalog: &'a AnimeCatalog,
    preferences: &Preferences,
) -> Result<Recommendation<'a>> {
    let candidates: Vec<&AnimeRecord> = catalog.records().iter().collect();
    let matches = recommendation_pipeline().apply(candidates, preferences)?;

    tracing::info!(
        genre = %preferences.genre,
        episode_range = %preferences.episode_range,
        "{} recommendation(s)",
        matches.len()
    );
    Ok(Recommendation::from_matches(matches))
}
