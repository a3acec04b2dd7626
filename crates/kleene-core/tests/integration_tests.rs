//! Integration tests for kleene-core: the synthesized expression must accept
//! exactly the strings the automaton itself accepts, up to a length bound.
//!
//! The synthesized pattern is interpreted by a small test-local parser and
//! matcher for the emitted grammar (alternation, concatenation, star,
//! parentheses, plus the `eps` and `{}` placeholders). Strings are sequences
//! of alphabet symbols, not characters, since symbols may be multi-character.

use std::collections::BTreeSet;

use kleene_core::{Automaton, AutomatonBuilder, StateId};

// ============================================================================
// Test-local regex interpreter
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
enum Re {
    /// The `{}` placeholder: matches nothing.
    Empty,
    /// The `eps` placeholder: matches the empty string.
    Eps,
    /// A single alphabet symbol.
    Sym(String),
    Alt(Vec<Re>),
    Cat(Vec<Re>),
    Star(Box<Re>),
}

struct ReParser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> ReParser<'a> {
    fn parse(input: &'a str) -> Re {
        let mut p = ReParser {
            input: input.as_bytes(),
            pos: 0,
        };
        let re = p.alternation();
        assert_eq!(p.pos, p.input.len(), "trailing input in {input:?}");
        re
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn alternation(&mut self) -> Re {
        let mut parts = vec![self.concatenation()];
        while self.peek() == Some(b'|') {
            self.pos += 1;
            parts.push(self.concatenation());
        }
        if parts.len() == 1 {
            parts.pop().unwrap()
        } else {
            Re::Alt(parts)
        }
    }

    fn concatenation(&mut self) -> Re {
        let mut parts = Vec::new();
        while matches!(self.peek(), Some(c) if c != b'|' && c != b')') {
            parts.push(self.factor());
        }
        assert!(!parts.is_empty(), "empty concatenation");
        if parts.len() == 1 {
            parts.pop().unwrap()
        } else {
            Re::Cat(parts)
        }
    }

    fn factor(&mut self) -> Re {
        let mut re = self.atom();
        while self.peek() == Some(b'*') {
            self.pos += 1;
            re = Re::Star(Box::new(re));
        }
        re
    }

    fn atom(&mut self) -> Re {
        match self.peek() {
            Some(b'(') => {
                self.pos += 1;
                let re = self.alternation();
                assert_eq!(self.peek(), Some(b')'), "unbalanced parenthesis");
                self.pos += 1;
                re
            }
            Some(b'{') => {
                assert_eq!(self.input.get(self.pos + 1), Some(&b'}'));
                self.pos += 2;
                Re::Empty
            }
            _ => {
                let start = self.pos;
                while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == b'_') {
                    self.pos += 1;
                }
                let token = std::str::from_utf8(&self.input[start..self.pos]).unwrap();
                assert!(!token.is_empty(), "expected token at byte {start}");
                if token == "eps" {
                    Re::Eps
                } else {
                    Re::Sym(token.to_string())
                }
            }
        }
    }
}

fn re_matches(re: &Re, input: &[&str]) -> bool {
    match re {
        Re::Empty => false,
        Re::Eps => input.is_empty(),
        Re::Sym(s) => input.len() == 1 && input[0] == s,
        Re::Alt(parts) => parts.iter().any(|p| re_matches(p, input)),
        Re::Cat(parts) => cat_matches(parts, input),
        Re::Star(inner) => {
            input.is_empty()
                || (1..=input.len()).any(|split| {
                    re_matches(inner, &input[..split]) && re_matches(re, &input[split..])
                })
        }
    }
}

fn cat_matches(parts: &[Re], input: &[&str]) -> bool {
    match parts {
        [] => input.is_empty(),
        [head, tail @ ..] => (0..=input.len())
            .any(|split| re_matches(head, &input[..split]) && cat_matches(tail, &input[split..])),
    }
}

// ============================================================================
// Automaton simulation and string enumeration
// ============================================================================

/// Walk the automaton as an NFA over a symbol sequence.
fn accepts(fsa: &Automaton, input: &[&str]) -> bool {
    let mut current: BTreeSet<StateId> = BTreeSet::from([fsa.initial()]);
    for symbol in input {
        let mut next = BTreeSet::new();
        for &state in &current {
            for (dst, symbols) in fsa.outgoing(state) {
                if symbols.contains(*symbol) {
                    next.insert(dst);
                }
            }
        }
        if next.is_empty() {
            return false;
        }
        current = next;
    }
    current.iter().any(|&s| fsa.is_accepting(s))
}

/// All symbol sequences over the alphabet up to `max_len`, shortest first.
fn all_strings<'a>(alphabet: &[&'a str], max_len: usize) -> Vec<Vec<&'a str>> {
    let mut strings = vec![Vec::new()];
    let mut frontier = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next_frontier = Vec::new();
        for prefix in &frontier {
            for symbol in alphabet {
                let mut s = prefix.clone();
                s.push(*symbol);
                next_frontier.push(s);
            }
        }
        strings.extend(next_frontier.iter().cloned());
        frontier = next_frontier;
    }
    strings
}

fn build(
    states: &[&str],
    alphabet: &[&str],
    initial: &str,
    accepting: &[&str],
    transitions: &[(&str, &str, &str)],
) -> Automaton {
    let mut b = AutomatonBuilder::new();
    for s in states {
        b.add_state(*s).unwrap();
    }
    for a in alphabet {
        b.add_symbol(*a).unwrap();
    }
    b.set_initial(initial).unwrap();
    for f in accepting {
        b.add_accepting(f).unwrap();
    }
    for (src, sym, dst) in transitions {
        b.add_transition(src, sym, dst).unwrap();
    }
    b.build().unwrap()
}

/// The round-trip property: the synthesized expression and the automaton
/// agree on every string up to the bound.
fn assert_round_trip(fsa: &Automaton, alphabet: &[&str], max_len: usize) {
    let regex = kleene_core::synthesize_regex(fsa).unwrap();
    let re = ReParser::parse(&regex);

    for string in all_strings(alphabet, max_len) {
        assert_eq!(
            re_matches(&re, &string),
            accepts(fsa, &string),
            "disagreement on {string:?} for regex {regex}"
        );
    }
}

// ============================================================================
// Round-trip scenarios
// ============================================================================

#[test]
fn test_round_trip_single_symbol() {
    // A --a--> B, accepting B: exactly the string "a".
    let fsa = build(&["A", "B"], &["a"], "A", &["B"], &[("A", "a", "B")]);
    assert_round_trip(&fsa, &["a"], 5);
}

#[test]
fn test_round_trip_self_loop() {
    // Single accepting state with a self-loop: a*.
    let fsa = build(&["A"], &["a"], "A", &["A"], &[("A", "a", "A")]);
    assert_round_trip(&fsa, &["a"], 6);
}

#[test]
fn test_round_trip_cycle() {
    // S -a-> T -b-> S, accepting S: the language (ab)*.
    let fsa = build(
        &["S", "T"],
        &["a", "b"],
        "S",
        &["S"],
        &[("S", "a", "T"), ("T", "b", "S")],
    );
    assert_round_trip(&fsa, &["a", "b"], 4);
}

#[test]
fn test_round_trip_even_count() {
    // Complete DFA accepting strings with an even number of 'a's.
    let fsa = build(
        &["E", "O"],
        &["a", "b"],
        "E",
        &["E"],
        &[
            ("E", "a", "O"),
            ("O", "a", "E"),
            ("E", "b", "E"),
            ("O", "b", "O"),
        ],
    );
    assert_round_trip(&fsa, &["a", "b"], 4);
}

#[test]
fn test_round_trip_nondeterministic() {
    // A -a-> A and A -a-> B, accepting B: one or more 'a's.
    let fsa = build(
        &["A", "B"],
        &["a"],
        "A",
        &["B"],
        &[("A", "a", "A"), ("A", "a", "B")],
    );
    assert_round_trip(&fsa, &["a"], 5);
}

#[test]
fn test_round_trip_three_states() {
    // S -a-> M, M -b-> M, M -c-> F, accepting F: the language a b* c.
    let fsa = build(
        &["S", "M", "F"],
        &["a", "b", "c"],
        "S",
        &["F"],
        &[("S", "a", "M"), ("M", "b", "M"), ("M", "c", "F")],
    );
    assert_round_trip(&fsa, &["a", "b", "c"], 4);
}

#[test]
fn test_round_trip_multi_character_symbols() {
    // Symbols are tokens, not characters.
    let fsa = build(
        &["Idle", "Run"],
        &["start", "stop"],
        "Idle",
        &["Idle"],
        &[("Idle", "start", "Run"), ("Run", "stop", "Idle")],
    );
    assert_round_trip(&fsa, &["start", "stop"], 4);
}

// ============================================================================
// End-to-end pipeline checks
// ============================================================================

#[test]
fn test_validate_then_synthesize() {
    let fsa = build(
        &["A", "B"],
        &["a", "b"],
        "A",
        &["B"],
        &[("A", "a", "B"), ("B", "b", "A")],
    );

    let report = kleene_core::validate(&fsa);
    assert!(!report.disjoint);
    assert!(report.all_reachable);
    assert!(report.deterministic);
    assert!(!report.complete);
    assert!(!report.accepting_empty);

    let first = kleene_core::synthesize_regex(&fsa).unwrap();
    let second = kleene_core::synthesize_regex(&fsa).unwrap();
    assert_eq!(first, second, "synthesis must be byte-stable");
}

#[test]
fn test_placeholders_survive_in_output() {
    // The empty-language marker is emitted verbatim, never simplified away.
    let fsa = build(&["A", "B"], &["a"], "A", &["B"], &[("A", "a", "B")]);
    let regex = kleene_core::synthesize_regex(&fsa).unwrap();
    assert!(regex.contains(kleene_core::EMPTY_LANGUAGE));
    assert!(regex.contains(kleene_core::EPSILON));
}
