//! Node contraction.
//!
//! Contraction replaces a set of nodes by one representative. Edge endpoints are remapped one
//! at a time, so an edge inside the contracted set turns into a self-loop on the
//! representative; the storage dedup rules then collapse whatever parallel edges result.

use crate::graph::{AdjacencyGraph, Graph, GraphOptions, Node, NodeSet, Result};

/// `g` with every node of `to_contract` replaced by `replacement`.
///
/// The result's nodes are `g`'s nodes minus `to_contract`, in order, followed by
/// `replacement` (unless it is already among them).
pub fn contracted_graph<'a, V, G, I>(
    g: &G,
    to_contract: I,
    replacement: V,
) -> Result<AdjacencyGraph<V>>
where
    V: Node + 'a,
    G: Graph<V> + ?Sized,
    I: IntoIterator<Item = &'a V>,
{
    let mut contract: NodeSet<V> = NodeSet::default();
    for v in to_contract {
        g.require(v)?;
        contract.insert(v.clone());
    }

    let remap = |v: &V| {
        if contract.contains(v) {
            replacement.clone()
        } else {
            v.clone()
        }
    };

    let nodes = g
        .nodes()
        .iter()
        .filter(|v| !contract.contains(*v))
        .cloned()
        .chain(std::iter::once(replacement.clone()));
    let edges = g
        .edges()
        .iter()
        .map(|e| (remap(&e.source), remap(&e.target)));

    AdjacencyGraph::new(
        GraphOptions {
            directed: g.is_directed(),
        },
        nodes,
        edges,
    )
}

/// Merges every component that meets `subset` into one component holding `representative`.
///
/// Members of `subset` are dropped from the merged component (they are the nodes a matching
/// [`contracted_graph`] call replaces). A component already holding `representative` is merged
/// too, since the representative keeps its own edges. Every other component is returned as-is.
/// The merged component takes the position of the first component it absorbed, or the end
/// when none did.
pub fn contracted_components<'a, V, I>(
    components: &[NodeSet<V>],
    subset: I,
    representative: V,
) -> Vec<NodeSet<V>>
where
    V: Node + 'a,
    I: IntoIterator<Item = &'a V>,
{
    let subset: NodeSet<V> = subset.into_iter().cloned().collect();

    let mut merged: NodeSet<V> = NodeSet::default();
    merged.insert(representative.clone());
    let mut merged_at: Option<usize> = None;
    let mut out: Vec<NodeSet<V>> = Vec::with_capacity(components.len() + 1);

    for component in components {
        let absorbs = component.contains(&representative)
            || component.iter().any(|v| subset.contains(v));
        if absorbs {
            merged_at.get_or_insert(out.len());
            merged.extend(component.iter().filter(|v| !subset.contains(*v)).cloned());
        } else {
            out.push(component.clone());
        }
    }

    let at = merged_at.unwrap_or(out.len());
    out.insert(at, merged);
    out
}
