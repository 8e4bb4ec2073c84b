//! Filter implementations for the candidate pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod episode_range;
pub mod genre_match;

// Re-export for convenience
pub use episode_range::EpisodeRangeFilter;
pub use genre_match::GenreMatchFilter;
