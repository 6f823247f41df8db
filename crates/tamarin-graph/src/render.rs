//! Diagnostic text form used in logs and test fixtures.
//!
//! ```text
//! NODES: [1, 2, 3]  EDGES: 1: [2], 2: [1, 3], 3: [2]
//! ```
//!
//! Each edge row lists a node's out-neighbors. With both sections switched off the rendering
//! is just `GRAPH`.

use crate::classified::DegreeClassifiedGraph;
use crate::contract::{Graph, Node};
use crate::graph::AdjacencyGraph;
use std::fmt::{self, Display, Write as _};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub nodes: bool,
    pub edges: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            nodes: true,
            edges: true,
        }
    }
}

/// Renders nodes and neighbor lists in insertion order.
pub fn render<V, G>(g: &G, opts: RenderOptions) -> String
where
    V: Node + Display,
    G: Graph<V> + ?Sized,
{
    write_rows(&out_rows(g), opts)
}

/// Renders nodes and neighbor lists in their natural order.
pub fn render_sorted<V, G>(g: &G, opts: RenderOptions) -> String
where
    V: Node + Ord + Display,
    G: Graph<V> + ?Sized,
{
    let mut rows = out_rows(g);
    rows.sort_by(|a, b| a.0.cmp(b.0));
    for (_, out) in &mut rows {
        out.sort();
    }
    write_rows(&rows, opts)
}

fn out_rows<V, G>(g: &G) -> Vec<(&V, Vec<&V>)>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let mut rows: Vec<(&V, Vec<&V>)> = g.nodes().iter().map(|v| (v, Vec::new())).collect();
    let directed = g.is_directed();
    for e in g.edges() {
        let (Some(a), Some(b)) = (g.node_index(&e.source), g.node_index(&e.target)) else {
            continue;
        };
        rows[a].1.push(&e.target);
        if !directed && a != b {
            rows[b].1.push(&e.source);
        }
    }
    rows
}

fn write_rows<V: Display>(rows: &[(&V, Vec<&V>)], opts: RenderOptions) -> String {
    if !opts.nodes && !opts.edges {
        return "GRAPH".to_string();
    }

    let mut out = String::new();
    if opts.nodes {
        out.push_str("NODES: ");
        write_list(&mut out, rows.iter().map(|(v, _)| *v));
    }
    if opts.edges {
        if opts.nodes {
            out.push_str("  ");
        }
        out.push_str("EDGES: ");
        for (i, (v, targets)) in rows.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{v}: ");
            write_list(&mut out, targets.iter().copied());
        }
    }
    out
}

fn write_list<'a, V: Display + 'a>(out: &mut String, items: impl Iterator<Item = &'a V>) {
    out.push('[');
    for (i, v) in items.enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{v}");
    }
    out.push(']');
}

/// Insertion order, for any displayable node type; [`render_sorted`] gives the natural-order
/// form when `V: Ord`.
impl<V: Node + Display> Display for AdjacencyGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, RenderOptions::default()))
    }
}

/// Insertion order, for any displayable node type; [`render_sorted`] gives the natural-order
/// form when `V: Ord`.
impl<V: Node + Display> Display for DegreeClassifiedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self, RenderOptions::default()))
    }
}
