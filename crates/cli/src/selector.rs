//! Preference selection: genre menu and story-length menu.

use crate::console::{Console, PromptError, Tone};
use crate::input::{ask_choice, ask_until_valid, parse_choice, ValidationError};
use data_loader::{AnimeCatalog, EpisodeRange};
use std::io::{BufRead, Write};

const GENRE_QUESTION: &str = "\n\tEnter a number corresponding to your preferred genre: ";
const EPISODE_QUESTION: &str = "\n\tEnter a number corresponding to your preferred episode range: ";

/// One line of the story-length menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeOption {
    pub range: EpisodeRange,
    /// At least one title matching the chosen genre is in this range
    pub available: bool,
}

/// All four buckets, in menu order, annotated for `genre`
pub fn episode_options(catalog: &AnimeCatalog, genre: &str) -> Vec<EpisodeOption> {
    let present = catalog.episode_ranges_for(genre);
    EpisodeRange::ALL
        .into_iter()
        .map(|range| EpisodeOption {
            range,
            available: present.contains(&range),
        })
        .collect()
}

/// Map a menu answer to an available bucket.
///
/// The range check runs first; an in-range but unavailable bucket is a
/// separate error.
pub fn validate_episode_choice(
    answer: &str,
    options: &[EpisodeOption],
) -> Result<EpisodeRange, ValidationError> {
    let choice = parse_choice(answer, 1..=options.len())?;
    let option = options[choice - 1];
    if option.available {
        Ok(option.range)
    } else {
        Err(ValidationError::Unavailable {
            label: option.range.label().to_string(),
        })
    }
}

/// Show the genre menu and return the chosen tag
pub fn select_genre<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    genres: &[String],
) -> Result<String, PromptError> {
    if genres.is_empty() {
        return Err(PromptError::NoOptions("genres"));
    }

    console.say(Tone::Heading, "1. Genre Preferences")?;
    console.say(Tone::Info, "\n\tWhat kind of anime are you in the mood for today?")?;
    for (i, genre) in genres.iter().enumerate() {
        console.say(Tone::Info, &format!("\t{}. {}", i + 1, genre))?;
    }

    let choice = ask_choice(console, GENRE_QUESTION, 1..=genres.len())?;
    let genre = genres[choice - 1].clone();
    tracing::debug!(%genre, "genre selected");
    Ok(genre)
}

/// Show the story-length menu for `genre` and return an available bucket
pub fn select_episode_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &AnimeCatalog,
    genre: &str,
) -> Result<EpisodeRange, PromptError> {
    let options = episode_options(catalog, genre);

    console.say(Tone::Heading, "\n2. Story Length")?;
    console.say(Tone::Info, "\n\tHow long do you prefer the anime to be?")?;
    for option in &options {
        let range = option.range;
        let (tone, status) = if option.available {
            (Tone::Success, "Available")
        } else {
            (Tone::Error, "Not available")
        };
        let line = format!(
            "\t{}. {} ({}) \t-- {}",
            range.ordinal(),
            range.label(),
            range.description(),
            status
        );
        console.say(tone, &line)?;
    }

    let range = ask_until_valid(console, EPISODE_QUESTION, |answer| {
        validate_episode_choice(answer, &options)
    })?;
    tracing::debug!(%range, "episode range selected");
    Ok(range)
}
