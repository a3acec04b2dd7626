//! Human-readable report formatting.
//!
//! The texts reproduce the legacy converter's numbered warnings and errors,
//! so existing consumers of its output keep working.

use kleene_core::{FsaError, ValidationReport};

/// Render a fatal error as the legacy `Error:` block.
pub fn error_report(err: &FsaError) -> String {
    let message = match err {
        FsaError::UnknownState { name } => {
            format!("E1: A state '{name}' is not in the set of states")
        }
        FsaError::DisjointStates => "E2: Some states are disjoint".to_string(),
        FsaError::UnknownSymbol { name } => {
            format!("E3: A transition '{name}' is not represented in the alphabet")
        }
        FsaError::InitialStateMissing => "E4: Initial state is not defined".to_string(),
        FsaError::MalformedDescription { .. } | FsaError::MultipleInitialStates => {
            "E5: Input file is malformed".to_string()
        }
        FsaError::EmptyAcceptingSet => "E6: Set of accepting states is empty".to_string(),
        FsaError::Nondeterministic => "E7: FSA is nondeterministic".to_string(),
    };
    format!("Error:\n{message}\n")
}

/// Render the validation outcome: completeness verdict plus any warnings.
/// The warning block is omitted entirely when nothing applies.
pub fn validation_report(report: &ValidationReport) -> String {
    let mut out = String::from(if report.complete {
        "FSA is complete\n"
    } else {
        "FSA is incomplete\n"
    });

    let mut warnings = Vec::new();
    if report.accepting_empty {
        warnings.push("W1: Accepting state is not defined");
    }
    if !report.all_reachable {
        warnings.push("W2: Some states are not reachable from the initial state");
    }
    if !report.deterministic {
        warnings.push("W3: FSA is nondeterministic");
    }

    if !warnings.is_empty() {
        out.push_str("Warning:\n");
        for warning in warnings {
            out.push_str(warning);
            out.push('\n');
        }
    }
    out
}
