//! Parser for the five-line automaton description format.
//!
//! ```text
//! states={s1,s2,...}
//! alpha={a1,a2,...}
//! init.st={s}
//! fin.st={s,...}
//! trans={s1>a>s2,...}
//! ```
//!
//! The parser only decodes line structure; reference resolution and lexical
//! checks live in the core builder, so every defect surfaces as a typed
//! [`FsaError`].

use kleene_core::{Automaton, AutomatonBuilder, FsaError, FsaResult};

/// Parse a full description into an [`Automaton`].
pub fn parse_description(text: &str) -> FsaResult<Automaton> {
    let mut lines = text.lines().map(str::trim_end);

    let states = section(lines.next(), "states=")?;
    let alphabet = section(lines.next(), "alpha=")?;
    let initial = section(lines.next(), "init.st=")?;
    let accepting = section(lines.next(), "fin.st=")?;
    let transitions = section(lines.next(), "trans=")?;

    let mut builder = AutomatonBuilder::new();

    let states = split_list(states);
    if states.is_empty() {
        return Err(malformed("set of states is empty"));
    }
    for state in states {
        builder.add_state(state)?;
    }

    let alphabet = split_list(alphabet);
    if alphabet.is_empty() {
        return Err(malformed("alphabet is empty"));
    }
    for symbol in alphabet {
        builder.add_symbol(symbol)?;
    }

    let initial = split_list(initial);
    match initial.as_slice() {
        [] => return Err(FsaError::InitialStateMissing),
        [single] => builder.set_initial(single)?,
        _ => return Err(FsaError::MultipleInitialStates),
    }

    for state in split_list(accepting) {
        builder.add_accepting(state)?;
    }

    for triple in split_list(transitions) {
        let parts: Vec<&str> = triple.split('>').collect();
        let &[source, symbol, destination] = parts.as_slice() else {
            return Err(malformed(&format!("invalid transition '{triple}'")));
        };
        builder.add_transition(source, symbol, destination)?;
    }

    builder.build()
}

/// Extract the `{...}` payload of one description line.
fn section<'a>(line: Option<&'a str>, prefix: &str) -> FsaResult<&'a str> {
    let line = line.ok_or_else(|| malformed(&format!("missing '{prefix}' line")))?;
    line.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('{'))
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| malformed(&format!("expected '{prefix}{{...}}', got '{line}'")))
}

/// Split a comma-separated payload; an empty payload is an empty list.
/// Items are taken verbatim - stray whitespace fails the lexical rules
/// downstream, as it should.
fn split_list(payload: &str) -> Vec<&str> {
    if payload.is_empty() {
        Vec::new()
    } else {
        payload.split(',').collect()
    }
}

fn malformed(reason: &str) -> FsaError {
    FsaError::MalformedDescription {
        reason: reason.to_string(),
    }
}
