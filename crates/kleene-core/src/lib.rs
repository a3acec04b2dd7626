//! Finite-state automaton modelling, structural validation, and regular
//! expression synthesis via Kleene's construction.
//!
//! The crate is the computational core of the `kleene` toolkit. A caller
//! (typically the CLI) builds an [`Automaton`] from an external description,
//! submits it to the validator, and - when no fatal defect is reported -
//! obtains a textual pattern for the automaton's language from the
//! synthesizer.
//!
//! ## Pipeline
//!
//! ```text
//! description --(AutomatonBuilder)--> Automaton
//!     Automaton --(validate)--> ValidationReport   // booleans, never fails
//!     Automaton --(synthesize_regex)--> String     // fails fast on defects
//! ```
//!
//! ## Core concepts
//!
//! - **Automaton**: declaration-ordered states and alphabet, one initial
//!   state, accepting subset, and a `(source, destination) -> symbols`
//!   transition relation
//! - **Validator**: connectivity, reachability, determinism, and completeness
//!   checks with invocation-local scratch state
//! - **Synthesizer**: the `R[k][i][j]` dynamic program eliminating one state
//!   per step, emitting a byte-deterministic expression
//!
//! The whole pipeline is synchronous and pure: no I/O, no shared mutable
//! state, no retries (re-running a pure computation changes nothing).

mod automaton;
mod error;
pub mod lexical;
pub mod synthesis;
pub mod validator;

pub use automaton::{Automaton, AutomatonBuilder, State, StateId};
pub use error::{FsaError, FsaResult};
pub use synthesis::{
    synthesize_regex, synthesize_regex_with, SynthesisOptions, EMPTY_LANGUAGE, EPSILON,
};
pub use validator::{validate, ValidationReport};
