//! The read-only graph capability shared by every storage type.
//!
//! Implementors supply node/edge storage and an incident-edge lookup; adjacency, neighbor and
//! degree queries have default implementations that classify each incident edge by which
//! endpoint matches the queried node. Storage types with precomputed views override them.

use crate::classified::DegreeClassifiedGraph;
use crate::error::{Error, Result};
use crate::graph::Edge;
use crate::graph::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Bound for node values: opaque, hashable, and printable in error messages.
pub trait Node: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Node for T {}

pub trait Graph<V: Node> {
    fn is_directed(&self) -> bool;

    /// Nodes in insertion order.
    fn nodes(&self) -> &[V];

    /// The deduplicated edge set.
    fn edges(&self) -> &[Edge<V>];

    /// Dense id of `v`: its position in [`Graph::nodes`].
    fn node_index(&self, v: &V) -> Option<usize>;

    /// Every edge with `v` as an endpoint. Fails with [`Error::NotANode`] for absent nodes.
    fn edges_adjacent_to(&self, v: &V) -> Result<Vec<&Edge<V>>>;

    fn node_count(&self) -> usize {
        self.nodes().len()
    }

    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    fn contains(&self, v: &V) -> bool {
        self.node_index(v).is_some()
    }

    /// Fast-path capability: precomputed degree classes, when the graph carries them.
    fn as_classified(&self) -> Option<&DegreeClassifiedGraph<V>> {
        None
    }

    fn require(&self, v: &V) -> Result<usize> {
        self.node_index(v).ok_or_else(|| Error::not_a_node(v))
    }

    fn edges_between(&self, x: &V, y: &V) -> Result<Vec<&Edge<V>>> {
        self.require(y)?;
        let directed = self.is_directed();
        Ok(self
            .edges_adjacent_to(x)?
            .into_iter()
            .filter(|e| e.connects(x, y, directed))
            .collect())
    }

    /// Whether an edge leads from `x` to `y` (in either orientation for undirected graphs).
    fn adjacent(&self, x: &V, y: &V) -> Result<bool> {
        self.require(y)?;
        let directed = self.is_directed();
        Ok(self
            .edges_adjacent_to(x)?
            .iter()
            .any(|e| e.connects(x, y, directed)))
    }

    fn out_neighbors(&self, x: &V) -> Result<Vec<&V>> {
        let directed = self.is_directed();
        let mut out = UniqueNodes::default();
        for e in self.edges_adjacent_to(x)? {
            if !directed {
                out.extend(e.opposite(x));
            } else if e.source == *x {
                out.push(&e.target);
            }
        }
        Ok(out.into_vec())
    }

    fn in_neighbors(&self, x: &V) -> Result<Vec<&V>> {
        let directed = self.is_directed();
        let mut out = UniqueNodes::default();
        for e in self.edges_adjacent_to(x)? {
            if !directed {
                out.extend(e.opposite(x));
            } else if e.target == *x {
                out.push(&e.source);
            }
        }
        Ok(out.into_vec())
    }

    /// Nodes joined to `x` by an edge of any orientation.
    fn neighbors(&self, x: &V) -> Result<Vec<&V>> {
        let mut out = UniqueNodes::default();
        for e in self.edges_adjacent_to(x)? {
            out.extend(e.opposite(x));
        }
        Ok(out.into_vec())
    }

    fn out_degree(&self, x: &V) -> Result<usize> {
        if !self.is_directed() {
            return self.degree(x);
        }
        Ok(self
            .edges_adjacent_to(x)?
            .iter()
            .filter(|e| e.source == *x)
            .count())
    }

    fn in_degree(&self, x: &V) -> Result<usize> {
        if !self.is_directed() {
            return self.degree(x);
        }
        Ok(self
            .edges_adjacent_to(x)?
            .iter()
            .filter(|e| e.target == *x)
            .count())
    }

    /// Count of edge endpoints at `x`; a self-loop contributes two.
    fn degree(&self, x: &V) -> Result<usize> {
        Ok(self
            .edges_adjacent_to(x)?
            .iter()
            .map(|e| usize::from(e.source == *x) + usize::from(e.target == *x))
            .sum())
    }
}

/// Insertion-ordered set of node references.
struct UniqueNodes<'a, V: Node> {
    seen: HashSet<&'a V>,
    out: Vec<&'a V>,
}

impl<V: Node> Default for UniqueNodes<'_, V> {
    fn default() -> Self {
        Self {
            seen: HashSet::default(),
            out: Vec::new(),
        }
    }
}

impl<'a, V: Node> UniqueNodes<'a, V> {
    fn push(&mut self, v: &'a V) {
        if self.seen.insert(v) {
            self.out.push(v);
        }
    }

    fn extend(&mut self, v: Option<&'a V>) {
        if let Some(v) = v {
            self.push(v);
        }
    }

    fn into_vec(self) -> Vec<&'a V> {
        self.out
    }
}
