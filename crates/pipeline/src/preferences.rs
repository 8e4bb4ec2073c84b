//! The choices a user makes before a recommendation pass.

use data_loader::EpisodeRange;

/// One genre tag plus one episode-range bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub genre: String,
    pub episode_range: EpisodeRange,
}

impl Preferences {
    pub fn new(genre: impl Into<String>, episode_range: EpisodeRange) -> Self {
        Self {
            genre: genre.into(),
            episode_range,
        }
    }
}
