//! Interactive front end for the anime recommender.
//!
//! ## Modules
//! - **console**: explicit input/output capability with optional colour
//! - **input**: answer parsing and the single re-prompt loop
//! - **selector**: genre and story-length menus
//! - **presenter**: tables, descriptions and error messages as plain strings
//! - **feedback**: feedback entries and the CSV sink
//! - **session**: the state machine tying it all together

pub mod console;
pub mod feedback;
pub mod input;
pub mod presenter;
pub mod selector;
pub mod session;

pub use console::{terminal_width, Console, PromptError, Tone};
pub use feedback::{CsvFeedbackSink, FeedbackEntry, FeedbackSink, PersistenceError};
pub use input::{parse_choice, parse_yes_no, ValidationError};
pub use session::{FeedbackOutcome, Session, SessionSummary};
