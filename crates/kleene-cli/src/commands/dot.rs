//! Dot command implementation.
//!
//! Renders the automaton as Graphviz dot through the core's petgraph view.
//! Accepting states get the conventional doublecircle shape.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use petgraph::dot::Dot;

use crate::parse;
use crate::report;

/// Render a description file as Graphviz dot, to stdout or a file.
pub fn execute(file: &Path, output: Option<&Path>) -> Result<()> {
    let text = fs::read_to_string(file)
        .with_context(|| format!("Failed to read description file: {}", file.display()))?;

    let rendered = match parse::parse_description(&text) {
        Ok(fsa) => render_dot(&fsa),
        Err(err) => report::error_report(&err),
    };

    match output {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("Failed to write dot file: {}", path.display()))?,
        None => print!("{rendered}"),
    }
    Ok(())
}

fn render_dot(fsa: &kleene_core::Automaton) -> String {
    let (graph, index) = fsa.to_petgraph();
    let accepting: HashSet<_> = fsa.accepting().iter().map(|id| index[id]).collect();
    let initial = index[&fsa.initial()];

    let edge_attr = |_, _| String::new();
    let node_attr = |_, (node, _)| {
        let shape = if accepting.contains(&node) {
            "shape = doublecircle"
        } else {
            "shape = circle"
        };
        if node == initial {
            format!("{shape}, style = bold")
        } else {
            shape.to_string()
        }
    };
    let dot = Dot::with_attr_getters(&graph, &[], &edge_attr, &node_attr);
    format!("{dot}")
}
