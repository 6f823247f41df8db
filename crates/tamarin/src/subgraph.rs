//! Induced subgraphs and degree cores.

use crate::graph::{AdjacencyGraph, Graph, GraphOptions, Node, Result};

/// The subgraph of `parent` induced by `keep`, with `parent`'s directedness.
///
/// Nodes keep `parent`'s order; every name in `keep` must be a node of `parent`.
pub fn subgraph<'a, V, G, I>(parent: &G, keep: I) -> Result<AdjacencyGraph<V>>
where
    V: Node + 'a,
    G: Graph<V> + ?Sized,
    I: IntoIterator<Item = &'a V>,
{
    let mut mask = vec![false; parent.node_count()];
    for v in keep {
        mask[parent.require(v)?] = true;
    }
    induced_by_mask(parent, &mask)
}

/// Nodes of degree two or more, with the edges among them.
///
/// Isolates and leaves are dropped in a single pass; nodes that become leaves as a result
/// are kept. Graphs carrying precomputed degree classes are read rather than rescanned.
pub fn core_graph<V, G>(parent: &G) -> Result<AdjacencyGraph<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let mut mask = vec![false; parent.node_count()];
    if let Some(classified) = parent.as_classified() {
        for v in classified.core().into_iter().chain(classified.connectors()) {
            mask[parent.require(v)?] = true;
        }
    } else {
        for (ix, v) in parent.nodes().iter().enumerate() {
            mask[ix] = parent.degree(v)? >= 2;
        }
    }
    induced_by_mask(parent, &mask)
}

fn induced_by_mask<V, G>(parent: &G, mask: &[bool]) -> Result<AdjacencyGraph<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let nodes = parent
        .nodes()
        .iter()
        .zip(mask)
        .filter(|(_, keep)| **keep)
        .map(|(v, _)| v.clone());

    let kept = |v: &V| parent.node_index(v).is_some_and(|ix| mask[ix]);
    let edges = parent
        .edges()
        .iter()
        .filter(|e| kept(&e.source) && kept(&e.target))
        .map(|e| (e.source.clone(), e.target.clone()));

    AdjacencyGraph::new(
        GraphOptions {
            directed: parent.is_directed(),
        },
        nodes,
        edges,
    )
}
