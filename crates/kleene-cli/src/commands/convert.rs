//! Convert command implementation.
//!
//! Full pipeline: parse, validate, synthesize. Non-fatal findings
//! (unreachable states, nondeterminism) are logged and do not block
//! synthesis; structural failures produce the legacy error block instead of
//! a pattern.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::parse;
use crate::report;

/// Convert a description file to a regular expression, writing it to stdout
/// or the given output file.
pub fn execute(file: &Path, output: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read description file: {}", file.display()))?;

    let rendered = run_pipeline(&text);

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write result file: {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn run_pipeline(text: &str) -> String {
    let fsa = match parse::parse_description(text) {
        Ok(fsa) => fsa,
        Err(err) => return report::error_report(&err),
    };

    let outcome = kleene_core::validate(&fsa);
    debug!(?outcome, "pre-synthesis validation");
    if !outcome.all_reachable && !outcome.disjoint {
        warn!("some states are not reachable from the initial state");
    }
    if !outcome.deterministic {
        warn!("automaton is nondeterministic; Kleene's construction handles NFAs");
    }

    match kleene_core::synthesize_regex(&fsa) {
        Ok(regex) => format!("{regex}\n"),
        Err(err) => report::error_report(&err),
    }
}
