//! Line-oriented console used by every interactive step.
//!
//! The console is passed explicitly to whatever needs to talk to the user.
//! It owns the input and output streams and decides whether text is
//! coloured, so no global styling state is involved.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use terminal_size::{terminal_size, Width};
use thiserror::Error;

/// Separator width when the terminal size can't be determined
pub const DEFAULT_WIDTH: usize = 80;

/// Errors from reading a line or writing to the console
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("console I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input stream reached end-of-file
    #[error("input closed")]
    InputClosed,

    #[error("nothing to choose from: no {0} in the dataset")]
    NoOptions(&'static str),
}

/// How a piece of text is styled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Banner,
    Heading,
    Info,
    Prompt,
    Success,
    Warning,
    Error,
    Plain,
}

/// Console over any buffered reader and writer.
///
/// Production code uses stdin/stdout; tests use a `Cursor` and a `Vec<u8>`.
pub struct Console<R, W> {
    input: R,
    output: W,
    styled: bool,
    width: usize,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Unstyled console with the default separator width
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            styled: false,
            width: DEFAULT_WIDTH,
        }
    }

    /// Enable or disable ANSI colours (builder pattern)
    pub fn styled(mut self, styled: bool) -> Self {
        self.styled = styled;
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Write a line of text
    pub fn say(&mut self, tone: Tone, text: &str) -> Result<(), PromptError> {
        let rendered = self.paint(tone, text);
        writeln!(self.output, "{rendered}")?;
        Ok(())
    }

    /// Write a full-width dashed line
    pub fn separator(&mut self) -> Result<(), PromptError> {
        let line = "-".repeat(self.width);
        self.say(Tone::Banner, &line)
    }

    /// Show `question` without a newline and read one line of input.
    ///
    /// The trailing line break is removed; everything else is returned as typed.
    pub fn prompt(&mut self, tone: Tone, question: &str) -> Result<String, PromptError> {
        let rendered = self.paint(tone, question);
        write!(self.output, "{rendered}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Recover the output stream (used by tests to inspect what was written)
    pub fn into_output(self) -> W {
        self.output
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if !self.styled {
            return text.to_string();
        }
        match tone {
            Tone::Banner => text.bold().purple().to_string(),
            Tone::Heading => text.bold().bright_blue().to_string(),
            Tone::Info => text.italic().bright_white().to_string(),
            Tone::Prompt => text.bold().bright_green().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Warning => text.bold().yellow().to_string(),
            Tone::Error => text.bold().red().to_string(),
            Tone::Plain => text.to_string(),
        }
    }
}

/// Current terminal width, or [`DEFAULT_WIDTH`] when it can't be queried
pub fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| usize::from(w))
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn output_of(console: Console<Cursor<&str>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_prompt_strips_line_ending_only() {
        let mut console = Console::new(Cursor::new("  hello there \r\n"), Vec::new());
        let line = console.prompt(Tone::Prompt, "Say: ").unwrap();
        assert_eq!(line, "  hello there ");
        assert_eq!(output_of(console), "Say: ");
    }

    #[test]
    fn test_prompt_at_eof_is_input_closed() {
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let err = console.prompt(Tone::Prompt, "? ").unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }

    #[test]
    fn test_unstyled_output_has_no_escape_codes() {
        let mut console = Console::new(Cursor::new(""), Vec::new()).with_width(5);
        console.say(Tone::Error, "oops").unwrap();
        console.separator().unwrap();
        assert_eq!(output_of(console), "oops\n-----\n");
    }

    #[test]
    fn test_styled_output_differs_from_plain() {
        colored::control::set_override(true);
        let mut console = Console::new(Cursor::new(""), Vec::new()).styled(true);
        console.say(Tone::Error, "oops").unwrap();
        let out = output_of(console);
        assert!(out.contains("oops"));
        assert_ne!(out, "oops\n");
    }
}
