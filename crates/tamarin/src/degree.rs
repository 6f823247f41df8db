use crate::graph::{Graph, Node, Result};
use std::collections::BTreeMap;

/// Degree value -> number of nodes with that degree.
pub fn degree_distribution<V, G>(g: &G) -> Result<BTreeMap<usize, usize>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let mut out: BTreeMap<usize, usize> = BTreeMap::new();
    for v in g.nodes() {
        *out.entry(g.degree(v)?).or_default() += 1;
    }
    Ok(out)
}

/// Nodes whose degree is exactly `degree`, in node order.
pub fn nodes_of_degree<V, G>(g: &G, degree: usize) -> Result<Vec<&V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let mut out: Vec<&V> = Vec::new();
    for v in g.nodes() {
        if g.degree(v)? == degree {
            out.push(v);
        }
    }
    Ok(out)
}
