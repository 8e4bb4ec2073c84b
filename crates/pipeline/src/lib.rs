//! Pipeline for turning user preferences into anime recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for candidate filtering
//! - FilterPipeline for composing filters
//! - `recommend`, which runs the genre and episode-range filters in order
//!
//! ## Architecture
//! Every record in the catalog starts as a candidate:
//! 1. GenreMatchFilter keeps records whose genre field contains the chosen genre
//! 2. EpisodeRangeFilter keeps records in the chosen episode-range bucket
//! 3. Survivors become a RecommendationSet, or `Recommendation::Empty`
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend, Preferences, Recommendation};
//! use data_loader::EpisodeRange;
//!
//! let preferences = Preferences::new("Action", EpisodeRange::Long);
//! match recommend(&catalog, &preferences)? {
//!     Recommendation::Matches(set) => println!("{:?}", set.titles()),
//!     Recommendation::Empty => println!("nothing found"),
//! }
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod preferences;
pub mod recommend;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use preferences::Preferences;
pub use recommend::{recommend, recommendation_pipeline, Recommendation, RecommendationSet};
