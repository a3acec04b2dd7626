//! Error types for automaton construction and regex synthesis.

use thiserror::Error;

/// Result type alias for fallible automaton operations.
pub type FsaResult<T> = Result<T, FsaError>;

/// Errors raised while building an automaton or synthesizing a regex from it.
///
/// The validation predicates themselves never fail - they describe automaton
/// shape as booleans. Everything that *can* fail (resolving references during
/// construction, invoking synthesis on a structurally unusable automaton)
/// surfaces as one of these kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsaError {
    /// The textual description could not be decoded into a well-formed automaton.
    #[error("input description is malformed: {reason}")]
    MalformedDescription { reason: String },

    /// A transition, initial-state, or accepting-state reference names an
    /// undeclared state.
    #[error("state '{name}' is not in the set of states")]
    UnknownState { name: String },

    /// A transition references a symbol absent from the declared alphabet.
    #[error("transition symbol '{name}' is not represented in the alphabet")]
    UnknownSymbol { name: String },

    /// No initial state was designated.
    #[error("initial state is not defined")]
    InitialStateMissing,

    /// More than one initial-state candidate was supplied.
    #[error("more than one initial state is defined")]
    MultipleInitialStates,

    /// Synthesis over zero accepting states is undefined.
    #[error("set of accepting states is empty")]
    EmptyAcceptingSet,

    /// The undirected transition graph is disconnected, so no single-start
    /// traversal covers all declared states.
    #[error("some states are disjoint")]
    DisjointStates,

    /// Some state has two outgoing transitions sharing a symbol. Only raised
    /// when the caller opted into requiring determinism.
    #[error("automaton is nondeterministic")]
    Nondeterministic,
}
