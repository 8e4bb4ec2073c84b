//! # Data Loader Crate
//!
//! This crate loads the anime dataset and answers the column-based queries
//! the recommender needs.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (AnimeRecord, EpisodeRange, AnimeCatalog)
//! - **parser**: Decode and parse the CSV dataset
//! - **index**: Load the catalog and query it (genres, filters, title lookup)
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{AnimeCatalog, Encoding, EpisodeRange};
//! use std::path::Path;
//!
//! let catalog = AnimeCatalog::load_from_file(Path::new("anime_data.csv"), Encoding::Latin1)?;
//!
//! for genre in catalog.unique_genres() {
//!     println!("{genre}");
//! }
//!
//! let action = catalog.filter_by_genre("Action");
//! let long = AnimeCatalog::filter_by_episode_range(&action, EpisodeRange::Long);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use parser::{Encoding, REQUIRED_COLUMNS};
pub use types::{AnimeCatalog, AnimeRecord, EpisodeRange, GENRE_DELIMITER};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = AnimeCatalog::new(Vec::new());
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.unique_genres().is_empty());
    }

    #[test]
    fn test_empty_queries() {
        let catalog = AnimeCatalog::new(Vec::new());

        assert!(catalog.filter_by_genre("Action").is_empty());
        assert!(catalog.episode_ranges_for("Action").is_empty());
        assert!(catalog.lookup_by_title("Naruto").is_err());
    }
}
