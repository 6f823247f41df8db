//! Connected-component partition (edge direction ignored).
//!
//! Nodes are visited in order; each node and its neighborhood are merged into whichever
//! previously built components they touch. Exactly one touched component absorbs them in
//! place; zero or several touched components are replaced by a single merged set. After the
//! last node the surviving sets are the connected components.

use crate::contract::{Graph, Node};
use crate::error::Result;
use crate::graph::{AdjacencyGraph, HashMap, HashSet};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Insertion-ordered node set.
pub type NodeSet<V> = IndexSet<V, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct ComponentPartition<V: Node> {
    components: Vec<NodeSet<V>>,
    owner: HashMap<V, usize>,
}

impl<V: Node> ComponentPartition<V> {
    /// Partitions the nodes of any graph by undirected connectivity.
    pub fn from_graph<G>(g: &G) -> Result<Self>
    where
        G: Graph<V> + ?Sized,
    {
        let nodes = g.nodes();
        let mut neighbors: Vec<Vec<usize>> = Vec::with_capacity(nodes.len());
        for v in nodes {
            neighbors.push(
                g.neighbors(v)?
                    .into_iter()
                    .filter_map(|w| g.node_index(w))
                    .collect(),
            );
        }
        Ok(Self::merge(nodes.to_vec(), &neighbors))
    }

    /// Partitions the nodes of an adjacency map, taking nodes in iteration order.
    ///
    /// Neighbors that never appear as keys still become members of their component.
    pub fn from_adjacency<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut ids: HashMap<V, usize> = HashMap::default();
        let mut nodes: Vec<V> = Vec::new();
        let mut neighbors: Vec<Vec<usize>> = Vec::new();

        let mut intern = |v: V, nodes: &mut Vec<V>, neighbors: &mut Vec<Vec<usize>>| {
            *ids.entry(v).or_insert_with_key(|v| {
                nodes.push(v.clone());
                neighbors.push(Vec::new());
                nodes.len() - 1
            })
        };

        for (v, adjacent) in adjacency {
            let v_ix = intern(v, &mut nodes, &mut neighbors);
            for w in adjacent {
                let w_ix = intern(w, &mut nodes, &mut neighbors);
                neighbors[v_ix].push(w_ix);
            }
        }

        Self::merge(nodes, &neighbors)
    }

    pub(crate) fn from_store(g: &AdjacencyGraph<V>) -> Self {
        let neighbors: Vec<Vec<usize>> = (0..g.node_count())
            .map(|ix| g.neighbor_ids(ix).collect())
            .collect();
        Self::merge(g.nodes().to_vec(), &neighbors)
    }

    #[tracing::instrument(level = "debug", skip_all, fields(nodes = nodes.len()))]
    fn merge(nodes: Vec<V>, neighbors: &[Vec<usize>]) -> Self {
        let mut sets: Vec<HashSet<usize>> = Vec::new();

        for (v, adjacent) in neighbors.iter().enumerate() {
            let touched: Vec<usize> = sets
                .iter()
                .enumerate()
                .filter(|(_, set)| set.contains(&v) || adjacent.iter().any(|w| set.contains(w)))
                .map(|(ix, _)| ix)
                .collect();

            if let [only] = touched[..] {
                let set = &mut sets[only];
                set.insert(v);
                set.extend(adjacent.iter().copied());
                continue;
            }

            let mut merged = absorb(&mut sets, &touched);
            merged.insert(v);
            merged.extend(adjacent.iter().copied());
            sets.push(merged);
        }

        let mut ordered: Vec<Vec<usize>> = sets
            .into_iter()
            .map(|set| {
                let mut ids: Vec<usize> = set.into_iter().collect();
                ids.sort_unstable();
                ids
            })
            .collect();
        ordered.sort_unstable_by_key(|ids| ids.first().copied());

        let mut owner: HashMap<V, usize> = HashMap::default();
        let components: Vec<NodeSet<V>> = ordered
            .iter()
            .enumerate()
            .map(|(c, ids)| {
                ids.iter()
                    .map(|&ix| {
                        owner.insert(nodes[ix].clone(), c);
                        nodes[ix].clone()
                    })
                    .collect()
            })
            .collect();

        let covered: usize = components.iter().map(IndexSet::len).sum();
        assert_eq!(
            covered,
            nodes.len(),
            "component partition must cover every node exactly once"
        );
        tracing::debug!(components = components.len(), "computed component partition");

        Self { components, owner }
    }

    pub fn components(&self) -> &[NodeSet<V>] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NodeSet<V>> {
        self.components.iter()
    }

    /// The component containing `v`, or `None` when `v` is not a node.
    pub fn component_of(&self, v: &V) -> Option<&NodeSet<V>> {
        self.component_index_of(v).map(|c| &self.components[c])
    }

    pub fn component_index_of(&self, v: &V) -> Option<usize> {
        self.owner.get(v).copied()
    }
}

/// Removes the `touched` sets and returns their union.
///
/// Panics if two of them share a node: live components must stay disjoint.
fn absorb(sets: &mut Vec<HashSet<usize>>, touched: &[usize]) -> HashSet<usize> {
    let mut merged: HashSet<usize> = HashSet::default();
    let mut absorbed = 0usize;
    // Descending, so each swap_remove leaves the lower indices in place.
    for &ix in touched.iter().rev() {
        let set = sets.swap_remove(ix);
        absorbed += set.len();
        merged.extend(set);
    }
    assert_eq!(
        merged.len(),
        absorbed,
        "component merge found {} node(s) shared between live components",
        absorbed - merged.len()
    );
    merged
}

impl<'a, V: Node> IntoIterator for &'a ComponentPartition<V> {
    type Item = &'a NodeSet<V>;
    type IntoIter = std::slice::Iter<'a, NodeSet<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
