//! Normalizing any [`Graph`] into canonical [`AdjacencyGraph`] storage.
//!
//! Only structure survives a copy: cached degree classes and component partitions are
//! rebuilt on demand by the new instance.

use crate::graph::{AdjacencyGraph, Graph, GraphOptions, Node, Result};

pub fn copy<V, G>(g: &G) -> Result<AdjacencyGraph<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    rebuild(g, g.is_directed())
}

/// Like [`copy`], but the result is undirected; antiparallel edges collapse into one.
pub fn copy_undirected<V, G>(g: &G) -> Result<AdjacencyGraph<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    rebuild(g, false)
}

fn rebuild<V, G>(g: &G, directed: bool) -> Result<AdjacencyGraph<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    AdjacencyGraph::new(
        GraphOptions { directed },
        g.nodes().iter().cloned(),
        g.edges()
            .iter()
            .map(|e| (e.source.clone(), e.target.clone())),
    )
}
