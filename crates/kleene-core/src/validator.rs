//! Structural validation of a built automaton.
//!
//! Every check takes the automaton read-only and returns a boolean; callers
//! decide which results are fatal and which are mere warnings. All scratch
//! state (visited sets, rebuilt adjacency views) is local to the invocation,
//! so the validator is freely reusable across automata and call sites.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::automaton::{Automaton, StateId};

/// Bundled outcome of all structural checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Some state is unreachable even over the undirected transition graph.
    pub disjoint: bool,
    /// Every state is reachable from the initial state along directed edges.
    pub all_reachable: bool,
    /// No state has two outgoing transitions sharing a symbol.
    pub deterministic: bool,
    /// Every state covers the whole alphabet with outgoing transitions.
    pub complete: bool,
    /// The accepting set is empty. Whether that is a warning or an error is
    /// caller policy; synthesis treats it as fatal.
    pub accepting_empty: bool,
}

/// Run all checks and bundle the results.
pub fn validate(fsa: &Automaton) -> ValidationReport {
    let report = ValidationReport {
        disjoint: is_disjoint(fsa),
        all_reachable: are_all_states_reachable(fsa),
        deterministic: is_deterministic(fsa),
        complete: is_complete(fsa),
        accepting_empty: fsa.accepting().is_empty(),
    };
    debug!(states = fsa.state_count(), ?report, "validated automaton");
    report
}

/// True iff some state is unreachable from the initial state when all
/// transitions are treated as bidirectional.
pub fn is_disjoint(fsa: &Automaton) -> bool {
    let adjacency = undirected_adjacency(fsa);
    let visited = traverse(&adjacency, fsa.initial());
    visited.iter().filter(|v| **v).count() != fsa.state_count()
}

/// True iff every state is reachable from the initial state following the
/// directed transition relation only.
///
/// Weaker than the negation of [`is_disjoint`]: a state can be connected to
/// the rest of the graph yet sit upstream of the initial state.
pub fn are_all_states_reachable(fsa: &Automaton) -> bool {
    let adjacency = directed_adjacency(fsa);
    let visited = traverse(&adjacency, fsa.initial());
    visited.iter().all(|v| *v)
}

/// True iff no state has two outgoing transitions sharing a symbol,
/// regardless of destination.
pub fn is_deterministic(fsa: &Automaton) -> bool {
    for state in fsa.states() {
        let mut seen = HashSet::new();
        for (_, symbols) in fsa.outgoing(state.id) {
            for symbol in symbols {
                if !seen.insert(symbol.as_str()) {
                    return false;
                }
            }
        }
    }
    true
}

/// True iff every state has an outgoing transition for every alphabet symbol,
/// i.e. the count of distinct outgoing symbols equals the alphabet size.
pub fn is_complete(fsa: &Automaton) -> bool {
    fsa.states().iter().all(|state| {
        let mut distinct = BTreeSet::new();
        for (_, symbols) in fsa.outgoing(state.id) {
            distinct.extend(symbols.iter().map(String::as_str));
        }
        distinct.len() == fsa.alphabet().len()
    })
}

/// Directed adjacency view, one neighbour set per state in id order.
fn directed_adjacency(fsa: &Automaton) -> Vec<BTreeSet<StateId>> {
    let mut adjacency = vec![BTreeSet::new(); fsa.state_count()];
    for (&(src, dst), _) in fsa.transitions() {
        adjacency[src.index()].insert(dst);
    }
    adjacency
}

/// Undirected adjacency view: every directed edge contributes both
/// directions, deduplicated by the neighbour sets.
fn undirected_adjacency(fsa: &Automaton) -> Vec<BTreeSet<StateId>> {
    let mut adjacency = vec![BTreeSet::new(); fsa.state_count()];
    for (&(src, dst), _) in fsa.transitions() {
        adjacency[src.index()].insert(dst);
        adjacency[dst.index()].insert(src);
    }
    adjacency
}

/// Iterative depth-first traversal with an explicit stack; returns the
/// visited flags in state-id order. Long state chains must not exhaust the
/// call stack, so recursion is off the table here.
fn traverse(adjacency: &[BTreeSet<StateId>], start: StateId) -> Vec<bool> {
    let mut visited = vec![false; adjacency.len()];
    let mut stack = vec![start];
    visited[start.index()] = true;

    while let Some(current) = stack.pop() {
        for &next in &adjacency[current.index()] {
            if !visited[next.index()] {
                visited[next.index()] = true;
                stack.push(next);
            }
        }
    }
    visited
}
