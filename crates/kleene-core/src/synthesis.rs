//! Regular-expression synthesis via Kleene's construction.
//!
//! The construction is a dynamic program over expressions `R[k][i][j]`
//! matching every path from state `i` to state `j` whose intermediate hops
//! are restricted to states indexed `0..=k`. Raising `k` one state at a time
//! eventually admits every state as an intermediate hop, and the language of
//! the automaton is the alternation of `R[n-1][initial][f]` over accepting
//! states `f`.
//!
//! The emitted expression is not simplified: the empty-language and epsilon
//! placeholders appear verbatim wherever the table produced them. Consumers
//! that process the expression further must treat [`EMPTY_LANGUAGE`] and
//! [`EPSILON`] specially - they are algebraic markers, not match tokens.

use tracing::debug;

use crate::automaton::Automaton;
use crate::error::{FsaError, FsaResult};
use crate::validator;

/// Placeholder for "no string matches".
pub const EMPTY_LANGUAGE: &str = "{}";

/// Placeholder for "the empty string matches".
pub const EPSILON: &str = "eps";

/// Caller-selectable synthesis policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SynthesisOptions {
    /// Refuse nondeterministic automata. Kleene's construction is correct
    /// for NFAs, so this defaults to off; some deployments want the stricter
    /// contract anyway.
    pub require_deterministic: bool,
}

/// Synthesize a regular expression for the automaton's language with the
/// default policy.
pub fn synthesize_regex(fsa: &Automaton) -> FsaResult<String> {
    synthesize_regex_with(fsa, SynthesisOptions::default())
}

/// Synthesize a regular expression under an explicit policy.
///
/// Fails fast, producing no partial output, when the accepting set is empty,
/// when the automaton is disjoint, or (if required) when it is
/// nondeterministic. Two runs over the same automaton yield byte-identical
/// output: the base-case alternations are sorted and everything downstream
/// of them is deterministic.
pub fn synthesize_regex_with(fsa: &Automaton, options: SynthesisOptions) -> FsaResult<String> {
    if fsa.accepting().is_empty() {
        return Err(FsaError::EmptyAcceptingSet);
    }
    if validator::is_disjoint(fsa) {
        return Err(FsaError::DisjointStates);
    }
    if options.require_deterministic && !validator::is_deterministic(fsa) {
        return Err(FsaError::Nondeterministic);
    }

    let n = fsa.state_count();
    debug!(states = n, "running Kleene elimination");

    // R[-1]: direct transitions only.
    let mut table = base_table(fsa);

    // Step k admits state k as an intermediate hop. The step reads row k and
    // column k of the *previous* table while every (i, j) is rewritten, so
    // each step builds a fresh table instead of updating in place.
    for k in 0..n {
        let mut next = vec![vec![String::new(); n]; n];
        for (i, row) in next.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = format!(
                    "({})|({})({})*({})",
                    table[i][j], table[i][k], table[k][k], table[k][j]
                );
            }
        }
        table = next;
    }

    let initial = fsa.initial().index();
    let result = fsa
        .accepting()
        .iter()
        .map(|f| format!("({})", table[initial][f.index()]))
        .collect::<Vec<_>>()
        .join("|");
    Ok(result)
}

/// Build `R[-1]`: for each ordered state pair the sorted alternation of the
/// symbols connecting them directly. Off-diagonal cells with no direct
/// transition hold the empty-language placeholder; diagonal cells always
/// admit epsilon, after any self-loop symbols.
fn base_table(fsa: &Automaton) -> Vec<Vec<String>> {
    let n = fsa.state_count();
    let mut table = vec![vec![String::new(); n]; n];

    for (i, row) in table.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            let src = fsa.states()[i].id;
            let dst = fsa.states()[j].id;
            // BTreeSet iteration is already lexicographic.
            let mut parts: Vec<&str> = fsa
                .symbols_between(src, dst)
                .map(|symbols| symbols.iter().map(String::as_str).collect())
                .unwrap_or_default();

            if i == j {
                parts.push(EPSILON);
            }
            *cell = if parts.is_empty() {
                EMPTY_LANGUAGE.to_string()
            } else {
                parts.join("|")
            };
        }
    }
    table
}
