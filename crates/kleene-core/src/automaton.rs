//! The finite-state automaton model.
//!
//! An [`Automaton`] is built once via [`AutomatonBuilder`] from an external
//! description and is immutable afterwards - the validator and synthesizer
//! only ever read it. States and alphabet symbols keep their declaration
//! order so that downstream output is deterministic.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::{Deserialize, Serialize};

use crate::error::{FsaError, FsaResult};
use crate::lexical;

/// Identifier for states within an [`Automaton`].
///
/// Indexes into the automaton's declaration-ordered state list; the synthesis
/// table is addressed by these indices.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(pub usize);

impl StateId {
    /// Position of this state in the declaration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A named state of the automaton.
///
/// States own no outgoing structure; the transition relation lives on the
/// [`Automaton`] itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    /// Unique identifier for this state.
    pub id: StateId,
    /// Unique name, validated against [`lexical::is_valid_state_name`].
    pub name: String,
}

/// The aggregate automaton: states, alphabet, initial and accepting states,
/// and the transition relation.
///
/// The relation is a multigraph keyed by ordered state pair - at most one
/// entry per `(source, destination)`, holding the set of symbols that label
/// transitions between them. Both validator and synthesizer ask "given source
/// and destination, which symbols" and "given source, which symbols overall",
/// so the destination-keyed representation serves both.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    alphabet: Vec<String>,
    initial: StateId,
    accepting: BTreeSet<StateId>,
    transitions: BTreeMap<(StateId, StateId), BTreeSet<String>>,
}

impl Automaton {
    /// All states in declaration order.
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of declared states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Look up a state by identifier.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.0]
    }

    /// Resolve a state name to its identifier.
    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.states.iter().find(|s| s.name == name).map(|s| s.id)
    }

    /// The alphabet in declaration order.
    pub fn alphabet(&self) -> &[String] {
        &self.alphabet
    }

    /// The single initial state.
    pub fn initial(&self) -> StateId {
        self.initial
    }

    /// The accepting states (may be empty).
    pub fn accepting(&self) -> &BTreeSet<StateId> {
        &self.accepting
    }

    /// Whether the given state is accepting.
    pub fn is_accepting(&self, id: StateId) -> bool {
        self.accepting.contains(&id)
    }

    /// Symbols labelling transitions from `source` to `destination`, if any.
    pub fn symbols_between(&self, source: StateId, destination: StateId) -> Option<&BTreeSet<String>> {
        self.transitions.get(&(source, destination))
    }

    /// Iterate over the whole transition relation as
    /// `((source, destination), symbols)` entries.
    pub fn transitions(&self) -> impl Iterator<Item = (&(StateId, StateId), &BTreeSet<String>)> {
        self.transitions.iter()
    }

    /// Iterate over the outgoing edges of one state as
    /// `(destination, symbols)` pairs.
    pub fn outgoing(&self, source: StateId) -> impl Iterator<Item = (StateId, &BTreeSet<String>)> {
        self.transitions
            .range((source, StateId(0))..=(source, StateId(usize::MAX)))
            .map(|(&(_, dst), symbols)| (dst, symbols))
    }

    /// Convert to a petgraph [`StableDiGraph`] for rendering and analysis.
    /// Node weights are state names; edge weights join the symbol set of the
    /// state pair with commas. Returns the graph and a mapping from
    /// [`StateId`] to petgraph's [`NodeIndex`].
    pub fn to_petgraph(&self) -> (StableDiGraph<String, String>, HashMap<StateId, NodeIndex>) {
        let mut graph = StableDiGraph::new();
        let mut id_to_index = HashMap::new();

        for state in &self.states {
            let idx = graph.add_node(state.name.clone());
            id_to_index.insert(state.id, idx);
        }

        for (&(src, dst), symbols) in &self.transitions {
            let label = symbols.iter().cloned().collect::<Vec<_>>().join(",");
            graph.add_edge(id_to_index[&src], id_to_index[&dst], label);
        }

        (graph, id_to_index)
    }
}

/// Builder for constructing an [`Automaton`] from a fully-read description.
///
/// Every reference (initial state, accepting states, transition endpoints and
/// symbols) is resolved against the already-declared sets, so a finished
/// automaton contains no dangling references.
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    states: Vec<State>,
    name_to_id: HashMap<String, StateId>,
    alphabet: Vec<String>,
    initial: Option<StateId>,
    accepting: BTreeSet<StateId>,
    transitions: BTreeMap<(StateId, StateId), BTreeSet<String>>,
}

impl AutomatonBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a state. Names must be lexically valid and unique.
    pub fn add_state(&mut self, name: impl Into<String>) -> FsaResult<StateId> {
        let name = name.into();
        if !lexical::is_valid_state_name(&name) {
            return Err(FsaError::MalformedDescription {
                reason: format!("invalid state name '{name}'"),
            });
        }
        if self.name_to_id.contains_key(&name) {
            return Err(FsaError::MalformedDescription {
                reason: format!("duplicate state name '{name}'"),
            });
        }

        let id = StateId(self.states.len());
        self.name_to_id.insert(name.clone(), id);
        self.states.push(State { id, name });
        Ok(id)
    }

    /// Declare an alphabet symbol. Symbols must be lexically valid and unique.
    pub fn add_symbol(&mut self, symbol: impl Into<String>) -> FsaResult<()> {
        let symbol = symbol.into();
        if !lexical::is_valid_symbol(&symbol) {
            return Err(FsaError::MalformedDescription {
                reason: format!("invalid transition symbol '{symbol}'"),
            });
        }
        if self.alphabet.contains(&symbol) {
            return Err(FsaError::MalformedDescription {
                reason: format!("duplicate transition symbol '{symbol}'"),
            });
        }

        self.alphabet.push(symbol);
        Ok(())
    }

    /// Designate the initial state. Exactly one designation is allowed.
    pub fn set_initial(&mut self, name: &str) -> FsaResult<()> {
        if self.initial.is_some() {
            return Err(FsaError::MultipleInitialStates);
        }
        let id = self.resolve_state(name)?;
        self.initial = Some(id);
        Ok(())
    }

    /// Mark a declared state as accepting.
    pub fn add_accepting(&mut self, name: &str) -> FsaResult<()> {
        let id = self.resolve_state(name)?;
        self.accepting.insert(id);
        Ok(())
    }

    /// Record a `source --symbol--> destination` transition. All three parts
    /// must reference already-declared entities.
    pub fn add_transition(&mut self, source: &str, symbol: &str, destination: &str) -> FsaResult<()> {
        let src = self.resolve_state(source)?;
        if !self.alphabet.iter().any(|s| s == symbol) {
            return Err(FsaError::UnknownSymbol {
                name: symbol.to_string(),
            });
        }
        let dst = self.resolve_state(destination)?;

        self.transitions
            .entry((src, dst))
            .or_default()
            .insert(symbol.to_string());
        Ok(())
    }

    /// Finish construction. Fails when no initial state was designated.
    pub fn build(self) -> FsaResult<Automaton> {
        let initial = self.initial.ok_or(FsaError::InitialStateMissing)?;
        Ok(Automaton {
            states: self.states,
            alphabet: self.alphabet,
            initial,
            accepting: self.accepting,
            transitions: self.transitions,
        })
    }

    fn resolve_state(&self, name: &str) -> FsaResult<StateId> {
        self.name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| FsaError::UnknownState {
                name: name.to_string(),
            })
    }
}
