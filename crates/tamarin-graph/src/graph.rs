//! Canonical adjacency-indexed storage.
//!
//! An [`AdjacencyGraph`] is built once from a node list and a raw edge list and never mutated
//! afterwards. Nodes receive dense ids in insertion order; every edge is stored once with its
//! endpoint ids, and a flat incident-edge cache answers adjacency queries without scanning the
//! edge list. The component partition (and the induced component graphs) are computed on first
//! request and cached in single-assignment cells, so a shared graph stays race-free.

mod adj_cache;
mod edge;
mod options;

pub use edge::Edge;
pub use options::GraphOptions;

use crate::components::ComponentPartition;
use crate::contract::{Graph, Node};
use crate::error::{Error, Result};
use adj_cache::IncidentCache;
use rustc_hash::FxBuildHasher;
use std::sync::OnceLock;

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
pub(crate) type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V: Node> {
    options: GraphOptions,

    nodes: Vec<V>,
    node_index: HashMap<V, usize>,

    edges: Vec<Edge<V>>,
    edge_ends: Vec<(usize, usize)>,
    incident: IncidentCache,

    components: OnceLock<ComponentPartition<V>>,
    component_graphs: OnceLock<Vec<AdjacencyGraph<V>>>,
}

impl<V: Node> AdjacencyGraph<V> {
    /// Builds a graph from `nodes` and raw `edges`.
    ///
    /// Duplicate nodes collapse to their first occurrence. A directed request `(x, y)` is
    /// dropped when an `x -> y` edge already exists; an undirected request is dropped when `x`
    /// and `y` are already joined in either orientation. Edges naming a node outside `nodes`
    /// are rejected with [`Error::MissingEndpoint`].
    #[tracing::instrument(level = "debug", skip_all, fields(directed = options.directed))]
    pub fn new<N, E>(options: GraphOptions, nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        let mut node_list: Vec<V> = Vec::new();
        let mut node_index: HashMap<V, usize> = HashMap::default();
        for v in nodes {
            if node_index.contains_key(&v) {
                continue;
            }
            node_index.insert(v.clone(), node_list.len());
            node_list.push(v);
        }

        let mut seen: HashSet<(usize, usize)> = HashSet::default();
        let mut edge_list: Vec<Edge<V>> = Vec::new();
        let mut edge_ends: Vec<(usize, usize)> = Vec::new();
        for (x, y) in edges {
            let Some(&a) = node_index.get(&x) else {
                return Err(Error::missing_endpoint(&x, &y, &x));
            };
            let Some(&b) = node_index.get(&y) else {
                return Err(Error::missing_endpoint(&x, &y, &y));
            };
            if !seen.insert(edge::dedup_key(a, b, options.directed)) {
                continue;
            }
            edge_ends.push((a, b));
            edge_list.push(Edge::new(x, y));
        }

        tracing::debug!(
            nodes = node_list.len(),
            edges = edge_list.len(),
            "built adjacency graph"
        );
        Ok(Self::from_dense(
            options, node_list, node_index, edge_list, edge_ends,
        ))
    }

    pub fn directed<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        Self::new(GraphOptions::DIRECTED, nodes, edges)
    }

    pub fn undirected<N, E>(nodes: N, edges: E) -> Result<Self>
    where
        N: IntoIterator<Item = V>,
        E: IntoIterator<Item = (V, V)>,
    {
        Self::new(GraphOptions::UNDIRECTED, nodes, edges)
    }

    fn from_dense(
        options: GraphOptions,
        nodes: Vec<V>,
        node_index: HashMap<V, usize>,
        edges: Vec<Edge<V>>,
        edge_ends: Vec<(usize, usize)>,
    ) -> Self {
        let incident = IncidentCache::build(nodes.len(), &edge_ends);
        Self {
            options,
            nodes,
            node_index,
            edges,
            edge_ends,
            incident,
            components: OnceLock::new(),
            component_graphs: OnceLock::new(),
        }
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    /// The subgraph induced by `keep`: those nodes (in this graph's order) and every edge with
    /// both endpoints among them.
    pub fn induced<'a, I>(&self, keep: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a V>,
        V: 'a,
    {
        let mut mask = vec![false; self.nodes.len()];
        for v in keep {
            mask[self.require(v)?] = true;
        }
        Ok(self.induced_by_mask(&mask))
    }

    pub(crate) fn induced_by_mask(&self, mask: &[bool]) -> Self {
        let mut remap = vec![usize::MAX; self.nodes.len()];
        let mut nodes: Vec<V> = Vec::new();
        let mut node_index: HashMap<V, usize> = HashMap::default();
        for (ix, v) in self.nodes.iter().enumerate() {
            if mask[ix] {
                remap[ix] = nodes.len();
                node_index.insert(v.clone(), nodes.len());
                nodes.push(v.clone());
            }
        }

        let mut edges: Vec<Edge<V>> = Vec::new();
        let mut edge_ends: Vec<(usize, usize)> = Vec::new();
        for (e, &(a, b)) in self.edges.iter().zip(&self.edge_ends) {
            if mask[a] && mask[b] {
                edges.push(e.clone());
                edge_ends.push((remap[a], remap[b]));
            }
        }

        Self::from_dense(self.options, nodes, node_index, edges, edge_ends)
    }

    /// Edge ids incident to the node with dense id `v_ix`.
    pub(crate) fn incident_ids(&self, v_ix: usize) -> &[usize] {
        self.incident.edges(v_ix)
    }

    /// Dense endpoint ids of edge `edge_ix`, in stored orientation.
    pub(crate) fn edge_ends(&self, edge_ix: usize) -> (usize, usize) {
        self.edge_ends[edge_ix]
    }

    /// Dense ids of the nodes joined to `v_ix` by an edge of any orientation, with repeats.
    pub(crate) fn neighbor_ids(&self, v_ix: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident_ids(v_ix).iter().map(move |&e| {
            let (a, b) = self.edge_ends[e];
            if a == v_ix { b } else { a }
        })
    }

    /// The connected-component partition, computed on first use.
    pub fn components(&self) -> &ComponentPartition<V> {
        self.components
            .get_or_init(|| ComponentPartition::from_store(self))
    }

    /// One induced subgraph per component, in partition order.
    ///
    /// A graph with a single component is returned as-is rather than copied.
    pub fn component_graphs(&self) -> Vec<&AdjacencyGraph<V>> {
        let partition = self.components();
        match partition.component_count() {
            0 => Vec::new(),
            1 => vec![self],
            count => self
                .component_graphs
                .get_or_init(|| {
                    let owners: Vec<Option<usize>> = self
                        .nodes
                        .iter()
                        .map(|v| partition.component_index_of(v))
                        .collect();
                    (0..count)
                        .map(|c| {
                            let mask: Vec<bool> =
                                owners.iter().map(|owner| *owner == Some(c)).collect();
                            self.induced_by_mask(&mask)
                        })
                        .collect()
                })
                .iter()
                .collect(),
        }
    }
}

impl<V: Node> Graph<V> for AdjacencyGraph<V> {
    fn is_directed(&self) -> bool {
        self.options.directed
    }

    fn nodes(&self) -> &[V] {
        &self.nodes
    }

    fn edges(&self) -> &[Edge<V>] {
        &self.edges
    }

    fn node_index(&self, v: &V) -> Option<usize> {
        self.node_index.get(v).copied()
    }

    fn edges_adjacent_to(&self, v: &V) -> Result<Vec<&Edge<V>>> {
        let ix = self.require(v)?;
        Ok(self
            .incident_ids(ix)
            .iter()
            .map(|&e| &self.edges[e])
            .collect())
    }

    fn adjacent(&self, x: &V, y: &V) -> Result<bool> {
        let x_ix = self.require(x)?;
        let y_ix = self.require(y)?;
        let directed = self.options.directed;
        Ok(self.incident_ids(x_ix).iter().any(|&e| {
            let (a, b) = self.edge_ends[e];
            (a == x_ix && b == y_ix) || (!directed && a == y_ix && b == x_ix)
        }))
    }
}
