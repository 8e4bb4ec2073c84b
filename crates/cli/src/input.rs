//! Parsing and validation of user answers.
//!
//! The parse functions are pure. [`ask_until_valid`] is the only retry loop:
//! it re-prompts on every [`ValidationError`] with no upper bound, and only
//! stops early when the console itself fails.

use crate::console::{Console, PromptError, Tone};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use thiserror::Error;

/// A recoverable problem with one answer. The caller re-prompts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input '{input}'. Please enter a valid number from the list.")]
    NotANumber { input: String },

    #[error("Invalid choice {choice}. Please select a number from {min} to {max}.")]
    OutOfRange { choice: i64, min: usize, max: usize },

    #[error("'{label}' is not currently available. Please choose an episode range that is currently available.")]
    Unavailable { label: String },

    #[error("Invalid input, please answer with 'Y' or 'N'.")]
    NotYesNo { input: String },
}

/// Parse a 1-based menu number and check it against `valid`
pub fn parse_choice(input: &str, valid: RangeInclusive<usize>) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    let choice: i64 = trimmed.parse().map_err(|_| ValidationError::NotANumber {
        input: trimmed.to_string(),
    })?;

    usize::try_from(choice)
        .ok()
        .filter(|n| valid.contains(n))
        .ok_or(ValidationError::OutOfRange {
            choice,
            min: *valid.start(),
            max: *valid.end(),
        })
}

/// Accept 'y' or 'n' in any case, ignoring surrounding whitespace
pub fn parse_yes_no(input: &str) -> Result<bool, ValidationError> {
    match input.trim().to_lowercase().as_str() {
        "y" => Ok(true),
        "n" => Ok(false),
        _ => Err(ValidationError::NotYesNo {
            input: input.trim().to_string(),
        }),
    }
}

/// Prompt until `validate` accepts the answer.
///
/// Each rejection is shown to the user before asking again.
pub fn ask_until_valid<R, W, T, F>(
    console: &mut Console<R, W>,
    question: &str,
    mut validate: F,
) -> Result<T, PromptError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T, ValidationError>,
{
    loop {
        let answer = console.prompt(Tone::Prompt, question)?;
        match validate(&answer) {
            Ok(value) => return Ok(value),
            Err(err) => {
                tracing::debug!(?err, "rejected answer");
                console.say(Tone::Error, &format!("\t{err}"))?;
            }
        }
    }
}

/// Ask for a number in `valid`
pub fn ask_choice<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
    valid: RangeInclusive<usize>,
) -> Result<usize, PromptError> {
    ask_until_valid(console, question, |answer| parse_choice(answer, valid.clone()))
}

/// Ask a yes/no question
pub fn ask_yes_no<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    question: &str,
) -> Result<bool, PromptError> {
    ask_until_valid(console, question, parse_yes_no)
}
