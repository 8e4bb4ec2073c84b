use anyhow::Result;
use clap::{Parser, ValueEnum};
use cli::presenter::format_load_error;
use cli::{terminal_width, Console, CsvFeedbackSink, PromptError, Session, Tone};
use data_loader::{AnimeCatalog, Encoding};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

/// Anime Recommendation System
#[derive(Parser)]
#[command(name = "anime-recs")]
#[command(about = "Interactive anime recommendations by genre and story length", long_about = None)]
struct Cli {
    /// Path to the anime dataset (CSV with title, genre, episode_range, description, disclaimer)
    #[arg(short, long, default_value = "anime_data.csv")]
    data: PathBuf,

    /// File that improvement suggestions are appended to
    #[arg(short, long, default_value = "user_feedback.csv")]
    feedback: PathBuf,

    /// Character encoding of the dataset file
    #[arg(long, value_enum, default_value_t = EncodingArg::Latin1)]
    encoding: EncodingArg,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum EncodingArg {
    Latin1,
    Utf8,
}

impl From<EncodingArg> for Encoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Latin1 => Encoding::Latin1,
            EncodingArg::Utf8 => Encoding::Utf8,
        }
    }
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so they don't interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdout = io::stdout();
    let styled = !cli.no_color && stdout.is_terminal();
    let mut console = Console::new(io::stdin().lock(), stdout.lock())
        .styled(styled)
        .with_width(terminal_width());

    let catalog = match AnimeCatalog::load_from_file(&cli.data, cli.encoding.into()) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!(%err, "failed to load dataset");
            console.say(Tone::Error, &format_load_error(&err))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    let mut session = Session::new(&catalog, console, CsvFeedbackSink::new(cli.feedback));
    match session.run() {
        Ok(summary) => {
            tracing::debug!(?summary, "exiting");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) if matches!(err.downcast_ref::<PromptError>(), Some(PromptError::InputClosed)) => {
            session.console_mut().say(Tone::Plain, "\nInput closed. Goodbye!")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => Err(err),
    }
}
