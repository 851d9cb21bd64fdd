//! askrate CLI — interactive yes/no questionnaire with persistent ratings.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

mod commands;
mod session;

#[derive(Parser)]
#[command(
    name = "askrate",
    version,
    about = "Interactive yes/no questionnaire with persistent ratings",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Used when no subcommand is given: run the questionnaire.
    #[command(flatten)]
    ask: AskArgs,
}

#[derive(Args)]
struct AskArgs {
    /// Question set TOML file (uses the builtin set when omitted)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Answers store file
    #[arg(long, default_value = "answers.pstore")]
    answers_store: PathBuf,

    /// Ratings store file
    #[arg(long, default_value = "ratings.pstore")]
    ratings_store: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the questionnaire, then print the rating report
    Ask(AskArgs),

    /// Show all recorded session ratings and the running average
    History {
        /// Ratings store file
        #[arg(long, default_value = "ratings.pstore")]
        ratings_store: PathBuf,
    },

    /// Validate a question set TOML file
    Validate {
        /// Path to the question set file
        #[arg(long)]
        questions: PathBuf,
    },

    /// Create a starter questions.toml
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("askrate=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Ask(args)) => {
            commands::ask::execute(args.questions, args.answers_store, args.ratings_store)
        }
        Some(Commands::History { ratings_store }) => commands::history::execute(ratings_store),
        Some(Commands::Validate { questions }) => commands::validate::execute(questions),
        Some(Commands::Init) => commands::init::execute(),
        None => commands::ask::execute(cli.ask.questions, cli.ask.answers_store, cli.ask.ratings_store),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
