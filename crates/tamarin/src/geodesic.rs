//! Geodesic (unweighted shortest-path) distances.
//!
//! The tree is grown one distance level at a time: each step moves every still-unvisited
//! out-neighbor of the current frontier into the next frontier. Growth stops when a step moves
//! nothing or the radius limit is reached. Only distances are recorded; which of several
//! shortest paths "reached" a node first is unspecified.

use crate::graph::{Graph, Node, NodeSet, Result};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

/// Distance from a start node, keyed in discovery order.
pub type Distances<V> = IndexMap<V, usize, FxBuildHasher>;

/// Distances to every node reachable from `start` within `max_radius` (unbounded if `None`).
pub fn geodesic_tree<V, G>(g: &G, start: &V, max_radius: Option<usize>) -> Result<Distances<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let s = g.require(start)?;
    let nodes = g.nodes();

    let mut remaining = vec![true; nodes.len()];
    remaining[s] = false;

    let mut tree = Distances::default();
    tree.insert(start.clone(), 0);

    let mut frontier: Vec<usize> = vec![s];
    let mut level = 0usize;
    while max_radius.is_none_or(|r| level < r) {
        let mut next: Vec<usize> = Vec::new();
        for &v in &frontier {
            for w in g.out_neighbors(&nodes[v])? {
                let Some(wi) = g.node_index(w) else {
                    continue;
                };
                if remaining[wi] {
                    remaining[wi] = false;
                    next.push(wi);
                }
            }
        }
        if next.is_empty() {
            break;
        }

        level += 1;
        for &w in &next {
            tree.insert(nodes[w].clone(), level);
        }
        frontier = next;
    }

    Ok(tree)
}

/// Length of a shortest path from `from` to `to`.
///
/// `Some(0)` when they are the same node; `None` when either is absent or `to` is unreachable.
pub fn geodesic_distance<V, G>(g: &G, from: &V, to: &V) -> Option<usize>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let s = g.node_index(from)?;
    let t = g.node_index(to)?;
    if s == t {
        return Some(0);
    }

    let nodes = g.nodes();
    let mut remaining = vec![true; nodes.len()];
    remaining[s] = false;

    let mut frontier: Vec<usize> = vec![s];
    let mut level = 0usize;
    while !frontier.is_empty() {
        level += 1;
        let mut next: Vec<usize> = Vec::new();
        for &v in &frontier {
            for w in g.out_neighbors(&nodes[v]).ok()? {
                let Some(wi) = g.node_index(w) else {
                    continue;
                };
                if wi == t {
                    return Some(level);
                }
                if remaining[wi] {
                    remaining[wi] = false;
                    next.push(wi);
                }
            }
        }
        frontier = next;
    }

    None
}

/// Nodes within `radius` steps of `v`, `v` included.
pub fn neighborhood<V, G>(g: &G, v: &V, radius: usize) -> Result<NodeSet<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    Ok(geodesic_tree(g, v, Some(radius))?.into_keys().collect())
}
