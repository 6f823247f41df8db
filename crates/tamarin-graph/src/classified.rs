//! Degree-classified graph: an [`AdjacencyGraph`] plus per-node degree, neighbor and
//! degree-class tables computed once at construction.
//!
//! All tables are flat arrays indexed by dense node id. Nothing is ever recomputed; a changed
//! edge set means building a new instance.

use crate::components::ComponentPartition;
use crate::contract::{Graph, Node};
use crate::error::Result;
use crate::graph::{AdjacencyGraph, Edge, GraphOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DegreeClass {
    /// Degree 0.
    Isolate,
    /// Degree 1.
    Leaf,
    /// Degree 2.
    Connector,
    /// Degree 3 or more.
    Core,
}

impl DegreeClass {
    pub fn of_degree(degree: usize) -> Self {
        match degree {
            0 => Self::Isolate,
            1 => Self::Leaf,
            2 => Self::Connector,
            _ => Self::Core,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DegreeClassifiedGraph<V: Node> {
    base: AdjacencyGraph<V>,

    degree: Vec<usize>,
    // Sorted and deduplicated; direction ignored.
    neighbors: Vec<Vec<usize>>,
    class: Vec<DegreeClass>,

    isolates: Vec<usize>,
    leaves: Vec<usize>,
    connectors: Vec<usize>,
    core: Vec<usize>,

    adjacent_leaves: Vec<Vec<usize>>,
}

impl<V: Node> DegreeClassifiedGraph<V> {
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = base.node_count()))]
    pub fn new(base: AdjacencyGraph<V>) -> Self {
        let n = base.node_count();

        let mut degree = vec![0usize; n];
        for e in 0..base.edge_count() {
            let (a, b) = base.edge_ends(e);
            degree[a] += 1;
            degree[b] += 1;
        }

        let neighbors: Vec<Vec<usize>> = (0..n)
            .map(|ix| {
                let mut ids: Vec<usize> = base.neighbor_ids(ix).collect();
                ids.sort_unstable();
                ids.dedup();
                ids
            })
            .collect();

        let class: Vec<DegreeClass> = degree.iter().map(|&d| DegreeClass::of_degree(d)).collect();
        let mut isolates = Vec::new();
        let mut leaves = Vec::new();
        let mut connectors = Vec::new();
        let mut core = Vec::new();
        for (ix, c) in class.iter().enumerate() {
            match c {
                DegreeClass::Isolate => isolates.push(ix),
                DegreeClass::Leaf => leaves.push(ix),
                DegreeClass::Connector => connectors.push(ix),
                DegreeClass::Core => core.push(ix),
            }
        }

        let adjacent_leaves: Vec<Vec<usize>> = neighbors
            .iter()
            .map(|ns| ns.iter().copied().filter(|&w| degree[w] == 1).collect())
            .collect();

        // The decorated variant settles its component partition up front as well.
        let components = base.components().component_count();
        tracing::debug!(
            isolates = isolates.len(),
            leaves = leaves.len(),
            connectors = connectors.len(),
            core = core.len(),
            components,
            "classified nodes by degree"
        );

        Self {
            base,
            degree,
            neighbors,
            class,
            isolates,
            leaves,
            connectors,
            core,
            adjacent_leaves,
        }
    }

    /// Builds the underlying storage and classifies it in one step.
    pub fn build<N, E>(options: GraphOptions, nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        AdjacencyGraph::new(options, nodes, edges).map(Self::new)
    }

    pub fn base(&self) -> &AdjacencyGraph<V> {
        &self.base
    }

    pub fn into_inner(self) -> AdjacencyGraph<V> {
        self.base
    }

    pub fn components(&self) -> &ComponentPartition<V> {
        self.base.components()
    }

    pub fn component_graphs(&self) -> Vec<&AdjacencyGraph<V>> {
        self.base.component_graphs()
    }

    pub fn class_of(&self, v: &V) -> Result<DegreeClass> {
        Ok(self.class[self.require(v)?])
    }

    pub fn isolates(&self) -> Vec<&V> {
        self.resolve(&self.isolates)
    }

    pub fn leaves(&self) -> Vec<&V> {
        self.resolve(&self.leaves)
    }

    pub fn connectors(&self) -> Vec<&V> {
        self.resolve(&self.connectors)
    }

    pub fn core(&self) -> Vec<&V> {
        self.resolve(&self.core)
    }

    /// Neighbors of `v` that are themselves leaves.
    pub fn adjacent_leaves(&self, v: &V) -> Result<Vec<&V>> {
        let ix = self.require(v)?;
        Ok(self.resolve(&self.adjacent_leaves[ix]))
    }

    fn resolve(&self, ids: &[usize]) -> Vec<&V> {
        let nodes = self.base.nodes();
        ids.iter().map(|&ix| &nodes[ix]).collect()
    }
}

impl<V: Node> Graph<V> for DegreeClassifiedGraph<V> {
    fn is_directed(&self) -> bool {
        self.base.is_directed()
    }

    fn nodes(&self) -> &[V] {
        self.base.nodes()
    }

    fn edges(&self) -> &[Edge<V>] {
        self.base.edges()
    }

    fn node_index(&self, v: &V) -> Option<usize> {
        self.base.node_index(v)
    }

    fn edges_adjacent_to(&self, v: &V) -> Result<Vec<&Edge<V>>> {
        self.base.edges_adjacent_to(v)
    }

    fn as_classified(&self) -> Option<&DegreeClassifiedGraph<V>> {
        Some(self)
    }

    fn adjacent(&self, x: &V, y: &V) -> Result<bool> {
        if self.is_directed() {
            return self.base.adjacent(x, y);
        }
        let x_ix = self.require(x)?;
        let y_ix = self.require(y)?;
        Ok(self.neighbors[x_ix].binary_search(&y_ix).is_ok())
    }

    fn neighbors(&self, x: &V) -> Result<Vec<&V>> {
        let ix = self.require(x)?;
        Ok(self.resolve(&self.neighbors[ix]))
    }

    fn out_neighbors(&self, x: &V) -> Result<Vec<&V>> {
        if self.is_directed() {
            return self.base.out_neighbors(x);
        }
        self.neighbors(x)
    }

    fn in_neighbors(&self, x: &V) -> Result<Vec<&V>> {
        if self.is_directed() {
            return self.base.in_neighbors(x);
        }
        self.neighbors(x)
    }

    fn degree(&self, x: &V) -> Result<usize> {
        Ok(self.degree[self.require(x)?])
    }
}
