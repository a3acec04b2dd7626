//! Kleene CLI - validate finite-state automata and convert them to regular
//! expressions.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;

mod commands;
mod parse;
mod report;

use commands::validate::OutputFormat;

/// Kleene: FSA validation and FSA-to-regex conversion.
///
/// Descriptions use the five-line `states=/alpha=/init.st=/fin.st=/trans=`
/// format; see the repository README for examples.
#[derive(Parser, Debug)]
#[command(
    name = "kleene",
    author,
    version,
    about = "Validate finite-state automata and convert them to regular expressions",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Check an automaton description and print the validation report.
    Validate {
        /// Path to the description file.
        file: PathBuf,

        /// Output format: text (legacy report) or json.
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Synthesize the equivalent regular expression via Kleene's construction.
    Convert {
        /// Path to the description file.
        file: PathBuf,

        /// Write the result here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render the automaton as Graphviz dot.
    Dot {
        /// Path to the description file.
        file: PathBuf,

        /// Write the rendering here instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Validate { file, format } => {
            let format: OutputFormat = format.parse()?;
            commands::validate::execute(&file, format)
        }
        Commands::Convert { file, output } => {
            commands::convert::execute(&file, output.as_deref())
        }
        Commands::Dot { file, output } => commands::dot::execute(&file, output.as_deref()),
    }
}
