//! The interactive session: a small state machine driving one user through
//! repeated preference cycles, then a single feedback question.
//!
//! ```text
//! SelectingGenre -> SelectingEpisodeRange -> Recommending
//!     Recommending -> ShowingTable -> DescriptionLoop -> ContinueOrExit
//!     Recommending -> NoResults -> ContinueOrExit
//! ContinueOrExit -> SelectingGenre | FeedbackCapture -> Finished
//! ```

use crate::console::{Console, PromptError, Tone};
use crate::feedback::{FeedbackEntry, FeedbackSink};
use crate::input::{ask_choice, ask_yes_no};
use crate::presenter::{format_description, format_table};
use crate::selector::{select_episode_range, select_genre};
use anyhow::{Context, Result};
use data_loader::{AnimeCatalog, AnimeRecord};
use pipeline::{recommend, Preferences, Recommendation, RecommendationSet};
use std::io::{BufRead, Write};

const WELCOME: &str = "Hi!👋  Welcome to Anime Recommendation System!😊";
const MAIN_MENU: &str = "\nMAIN MENU: ";
const INTRO: &str = "\nPlease select your preferences so we can recommend the perfect anime for you!\n";
const RESULTS_INTRO: &str =
    "\nThanks for your answers! Based on your preferences, here are the anime series we recommend:\n";
const NO_RESULTS: &str =
    "Sorry! No anime is currently available in our system for the given genre and episode range 😟";
const DESCRIBE_ONE: &str = "\nWould you like to get a description for the above recommended anime? (Enter 'Y' for Yes/'N' for No): ";
const DESCRIBE_ANY: &str = "\nWould you like to get a description for any of the above recommended anime? (Enter 'Y' for Yes/'N' for No): ";
const DESCRIBE_ANOTHER: &str = "\nWould you like to continue seeing the description for any other anime from above? (Enter 'Y' for Yes/'N' for No): ";
const DESCRIBE_INDEX: &str = "\nPlease enter the number corresponding to the anime you want a description for: ";
const BACK_TO_MENU: &str = "\nWould you like to go back to the main menu to explore more options? (Enter 'Y' to go back to Main menu/Enter 'N' to exit the system): ";
const EXITED: &str = "\t\t\tYou have successfully exited the main menu!";
const FEEDBACK_INTRO: &str = "\nTell us what you think?";
const SATISFIED: &str = "\nDid you enjoy the Anime Recommendation System? (Enter 'Y' for Yes/'N' for No): ";
const GLAD: &str = "\nWe're so glad you enjoyed it!😊 (Feel free to try again anytime!)";
const SORRY: &str = "\nWe're sorry to hear that!😔 Could you please let us know how we can improve.";
const THOUGHTS: &str = "\nYour thoughts: ";
const THANKS_FEEDBACK: &str = "\nThank you for your valuable feedback!";
const FAREWELL: &str = "Thanks you for exploring our anime recommendation system! Happy watching!😄";

/// Where the session currently is
#[derive(Debug)]
enum Stage<'a> {
    SelectingGenre,
    SelectingEpisodeRange { genre: String },
    Recommending(Preferences),
    ShowingTable(Recommendation<'a>),
    NoResults,
    DescriptionLoop(RecommendationSet<'a>),
    ContinueOrExit,
    FeedbackCapture,
    Finished,
}

/// What happened to the end-of-session feedback question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    /// The user enjoyed the session; nothing was recorded
    Satisfied,
    Saved,
    /// The suggestion could not be stored; the error was shown to the user
    NotSaved(String),
}

/// Summary returned once the session has ended normally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Completed preference cycles
    pub cycles: usize,
    pub feedback: FeedbackOutcome,
}

/// One interactive run over a loaded catalog
pub struct Session<'a, R, W, S> {
    catalog: &'a AnimeCatalog,
    console: Console<R, W>,
    sink: S,
}

impl<'a, R, W, S> Session<'a, R, W, S>
where
    R: BufRead,
    W: Write,
    S: FeedbackSink,
{
    pub fn new(catalog: &'a AnimeCatalog, console: Console<R, W>, sink: S) -> Self {
        Self {
            catalog,
            console,
            sink,
        }
    }

    pub fn console_mut(&mut self) -> &mut Console<R, W> {
        &mut self.console
    }

    /// Give back the console and sink (used by tests to inspect them)
    pub fn into_parts(self) -> (Console<R, W>, S) {
        (self.console, self.sink)
    }

    /// Run until the user exits and the feedback question is settled
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.greet()?;

        let mut cycles = 0;
        let mut feedback = FeedbackOutcome::Satisfied;
        let mut stage = Stage::SelectingGenre;

        loop {
            tracing::trace!(?stage, "session stage");
            stage = match stage {
                Stage::SelectingGenre => {
                    self.console.say(Tone::Heading, MAIN_MENU)?;
                    self.console.say(Tone::Info, INTRO)?;
                    let genre = select_genre(&mut self.console, self.catalog.unique_genres())?;
                    self.console.say(
                        Tone::Info,
                        &format!(
                            "\nAwesome! Since you prefer {genre} let's narrow down your preferences by choosing the story length. Once we have that, we can give you some tailored anime recommendations!"
                        ),
                    )?;
                    Stage::SelectingEpisodeRange { genre }
                }
                Stage::SelectingEpisodeRange { genre } => {
                    let range = select_episode_range(&mut self.console, self.catalog, &genre)?;
                    Stage::Recommending(Preferences::new(genre, range))
                }
                Stage::Recommending(preferences) => {
                    cycles += 1;
                    let recommendation = recommend(self.catalog, &preferences)?;
                    if recommendation.is_empty() {
                        Stage::NoResults
                    } else {
                        Stage::ShowingTable(recommendation)
                    }
                }
                Stage::ShowingTable(recommendation) => {
                    self.console.say(Tone::Info, RESULTS_INTRO)?;
                    self.console.say(Tone::Plain, &format_table(&recommendation))?;
                    match recommendation.into_set() {
                        Some(set) => Stage::DescriptionLoop(set),
                        None => Stage::ContinueOrExit,
                    }
                }
                Stage::NoResults => {
                    self.console.say(Tone::Warning, NO_RESULTS)?;
                    Stage::ContinueOrExit
                }
                Stage::DescriptionLoop(set) => {
                    self.description_loop(&set)?;
                    Stage::ContinueOrExit
                }
                Stage::ContinueOrExit => {
                    if ask_yes_no(&mut self.console, BACK_TO_MENU)? {
                        self.console.say(Tone::Plain, "")?;
                        self.console.separator()?;
                        Stage::SelectingGenre
                    } else {
                        self.console.say(Tone::Plain, "")?;
                        self.console.separator()?;
                        self.console.say(Tone::Warning, EXITED)?;
                        self.console.separator()?;
                        Stage::FeedbackCapture
                    }
                }
                Stage::FeedbackCapture => {
                    feedback = self.capture_feedback()?;
                    Stage::Finished
                }
                Stage::Finished => break,
            };
        }

        self.farewell()?;
        tracing::info!(cycles, ?feedback, "session finished");
        Ok(SessionSummary { cycles, feedback })
    }

    fn greet(&mut self) -> Result<(), PromptError> {
        self.console.separator()?;
        self.console.say(Tone::Heading, WELCOME)?;
        self.console.separator()
    }

    fn farewell(&mut self) -> Result<(), PromptError> {
        self.console.say(Tone::Plain, "")?;
        self.console.separator()?;
        self.console.say(Tone::Heading, FAREWELL)?;
        self.console.separator()
    }

    fn description_loop(&mut self, set: &RecommendationSet<'a>) -> Result<()> {
        let question = if set.len() > 1 { DESCRIBE_ANY } else { DESCRIBE_ONE };
        if !ask_yes_no(&mut self.console, question)? {
            return Ok(());
        }

        self.show_description(set)?;
        if set.len() > 1 {
            while ask_yes_no(&mut self.console, DESCRIBE_ANOTHER)? {
                self.show_description(set)?;
            }
        }
        Ok(())
    }

    fn show_description(&mut self, set: &RecommendationSet<'a>) -> Result<()> {
        let record = choose_for_description(&mut self.console, self.catalog, set)?;
        self.console.say(Tone::Info, &format_description(record))?;
        Ok(())
    }

    fn capture_feedback(&mut self) -> Result<FeedbackOutcome, PromptError> {
        self.console.say(Tone::Warning, FEEDBACK_INTRO)?;
        if ask_yes_no(&mut self.console, SATISFIED)? {
            self.console.say(Tone::Warning, GLAD)?;
            return Ok(FeedbackOutcome::Satisfied);
        }

        self.console.say(Tone::Warning, SORRY)?;
        let suggestion = self.console.prompt(Tone::Warning, THOUGHTS)?;
        let entry = FeedbackEntry::new(suggestion);

        match self.sink.append(&entry) {
            Ok(()) => {
                self.console.say(Tone::Warning, THANKS_FEEDBACK)?;
                Ok(FeedbackOutcome::Saved)
            }
            Err(err) => {
                tracing::warn!(%err, "feedback not saved");
                self.console
                    .say(Tone::Error, &format!("Error saving feedback: {err}"))?;
                Ok(FeedbackOutcome::NotSaved(err.to_string()))
            }
        }
    }
}

/// Pick the record whose description should be shown.
///
/// A single recommendation is chosen without asking; otherwise the user
/// enters a 1-based position, re-prompted until it is valid. The chosen
/// title is resolved through the catalog.
pub fn choose_for_description<'a, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    catalog: &'a AnimeCatalog,
    set: &RecommendationSet<'_>,
) -> Result<&'a AnimeRecord> {
    let index = match set.len() {
        0 => anyhow::bail!("no recommendations to describe"),
        1 => 0,
        n => ask_choice(console, DESCRIBE_INDEX, 1..=n)? - 1,
    };

    let title = set
        .get(index)
        .map(|record| record.title.as_str())
        .context("description index outside the recommendation set")?;
    let record = catalog
        .lookup_by_title(title)
        .context("recommended title is missing from the catalog")?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::PersistenceError;
    use std::io::Cursor;

    #[derive(Default)]
    struct MemorySink {
        entries: Vec<FeedbackEntry>,
    }

    impl FeedbackSink for MemorySink {
        fn append(&mut self, entry: &FeedbackEntry) -> Result<(), PersistenceError> {
            self.entries.push(entry.clone());
            Ok(())
        }
    }

    struct BrokenSink;

    impl FeedbackSink for BrokenSink {
        fn append(&mut self, _entry: &FeedbackEntry) -> Result<(), PersistenceError> {
            Err(PersistenceError::Io(std::io::Error::other("disk full")))
        }
    }

    fn record(title: &str, genre: &str, episode_range: &str) -> AnimeRecord {
        AnimeRecord {
            title: title.to_string(),
            genre: genre.to_string(),
            episode_range: episode_range.to_string(),
            description: Some(format!("{title} description")),
            disclaimer: Some(format!("{title} disclaimer")),
        }
    }

    fn create_test_catalog() -> AnimeCatalog {
        AnimeCatalog::new(vec![
            record("Naruto", "Action, Adventure, Fantasy", "Very Long"),
            record("Spy x Family", "Action, Comedy", "Long"),
            record("Your Lie in April", "Drama, Romance", "Medium"),
            record("Violet Evergarden", "Drama", "Short"),
        ])
    }

    fn set_of(records: Vec<&AnimeRecord>) -> RecommendationSet<'_> {
        Recommendation::from_matches(records).into_set().unwrap()
    }

    fn scripted(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_single_cycle_exit_satisfied() {
        let catalog = create_test_catalog();
        // Drama -> Short -> describe? n -> menu? n -> enjoyed? y
        let input = "5\n1\nn\nn\ny\n";
        let mut session = Session::new(&catalog, scripted(input), MemorySink::default());

        let summary = session.run().unwrap();
        assert_eq!(summary.cycles, 1);
        assert_eq!(summary.feedback, FeedbackOutcome::Satisfied);

        let (console, sink) = session.into_parts();
        assert!(sink.entries.is_empty());
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Violet Evergarden"));
        assert!(out.contains(GLAD));
    }

    #[test]
    fn test_single_result_description_is_automatic() {
        let catalog = create_test_catalog();
        // Action -> Long -> describe? y -> menu? n -> enjoyed? y
        let input = "1\n3\ny\nn\ny\n";
        let mut session = Session::new(&catalog, scripted(input), MemorySink::default());
        session.run().unwrap();

        let (console, _) = session.into_parts();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Synopsis:\nSpy x Family description"));
        assert!(!out.contains(DESCRIBE_INDEX));
        assert!(!out.contains(DESCRIBE_ANOTHER));
    }

    #[test]
    fn test_two_cycles_and_feedback_saved() {
        let catalog = create_test_catalog();
        let input = "1\n3\nn\ny\n2\n4\nn\nn\nn\nMore mecha please\n";
        let mut session = Session::new(&catalog, scripted(input), MemorySink::default());

        let summary = session.run().unwrap();
        assert_eq!(summary.cycles, 2);
        assert_eq!(summary.feedback, FeedbackOutcome::Saved);

        let (_, sink) = session.into_parts();
        assert_eq!(sink.entries.len(), 1);
        assert_eq!(sink.entries[0].suggestion, "More mecha please");
    }

    #[test]
    fn test_feedback_failure_is_not_fatal() {
        let catalog = create_test_catalog();
        let input = "1\n3\nn\nn\nn\nmeh\n";
        let mut session = Session::new(&catalog, scripted(input), BrokenSink);

        let summary = session.run().unwrap();
        assert!(matches!(summary.feedback, FeedbackOutcome::NotSaved(_)));

        let (console, _) = session.into_parts();
        let out = String::from_utf8(console.into_output()).unwrap();
        assert!(out.contains("Error saving feedback"));
        assert!(out.contains(FAREWELL));
    }

    #[test]
    fn test_closed_input_ends_run_with_prompt_error() {
        let catalog = create_test_catalog();
        let mut session = Session::new(&catalog, scripted("1\n"), MemorySink::default());

        let err = session.run().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PromptError>(),
            Some(PromptError::InputClosed)
        ));
    }

    #[test]
    fn test_choose_single_record_without_prompt() {
        let catalog = create_test_catalog();
        let set = set_of(vec![&catalog.records()[1]]);
        let mut console = scripted("");

        let chosen = choose_for_description(&mut console, &catalog, &set).unwrap();
        assert_eq!(chosen.title, "Spy x Family");
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_choose_retries_invalid_index() {
        let catalog = create_test_catalog();
        let set = set_of(catalog.records()[..2].iter().collect());

        let mut console = scripted("3\n2\n");
        let chosen = choose_for_description(&mut console, &catalog, &set).unwrap();
        assert_eq!(chosen.title, "Spy x Family");

        let mut console = scripted("\n1\n");
        let chosen = choose_for_description(&mut console, &catalog, &set).unwrap();
        assert_eq!(chosen.title, "Naruto");
    }

    #[test]
    fn test_choose_unknown_title_is_internal_error() {
        let catalog = create_test_catalog();
        let stray = record("Bleach", "Action", "Very Long");
        let set = set_of(vec![&stray]);

        let err = choose_for_description(&mut scripted(""), &catalog, &set).unwrap_err();
        assert!(err.to_string().contains("missing from the catalog"));
    }
}
