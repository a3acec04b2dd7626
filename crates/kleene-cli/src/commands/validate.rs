//! Validate command implementation.
//!
//! Parses a description file, runs the structural checks, and prints the
//! report. A disjoint automaton aborts the text report with the legacy E2
//! error; the JSON format always emits the full boolean bundle and leaves
//! the policy to the consumer.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kleene_core::FsaError;
use tracing::debug;

use crate::parse;
use crate::report;

/// Output format for the validation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'text' or 'json'", s),
        }
    }
}

/// Validate a description file and print the outcome.
pub fn execute(file: &Path, format: OutputFormat) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read description file: {}", file.display()))?;

    let fsa = match parse::parse_description(&text) {
        Ok(fsa) => fsa,
        Err(err) => {
            debug!(%err, "description rejected");
            print!("{}", report::error_report(&err));
            return Ok(());
        }
    };

    let outcome = kleene_core::validate(&fsa);
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
        OutputFormat::Text if outcome.disjoint => {
            print!("{}", report::error_report(&FsaError::DisjointStates));
        }
        OutputFormat::Text => print!("{}", report::validation_report(&outcome)),
    }
    Ok(())
}
