//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to candidate sets.

use crate::preferences::Preferences;
use anyhow::Result;
use data_loader::AnimeRecord;

/// Core trait for filtering candidates.
///
/// All filters must implement this trait to be used in the FilterPipeline.
/// Candidates are borrowed records from the catalog; a filter takes the
/// list by value and returns the survivors in their original order.
pub trait Filter {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidates.
    ///
    /// # Arguments
    /// * `candidates` - The candidates to filter (takes ownership)
    /// * `preferences` - The user's genre and episode-range choice
    fn apply<'a>(
        &self,
        candidates: Vec<&'a AnimeRecord>,
        preferences: &Preferences,
    ) -> Result<Vec<&'a AnimeRecord>>;
}
