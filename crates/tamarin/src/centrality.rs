//! Betweenness centrality via Brandes' algorithm.
//!
//! One [`breadth_first_search`] per source node, then dependencies are accumulated while
//! popping the visit stack (farthest nodes first). Scores are not normalized; undirected graphs
//! halve the totals since every pair is counted from both ends.

use crate::bfs::breadth_first_search;
use crate::graph::{Graph, Node, Result};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

#[tracing::instrument(level = "debug", skip_all, fields(nodes = g.node_count()))]
pub fn betweenness<V, G>(g: &G) -> Result<IndexMap<V, f64, FxBuildHasher>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let n = g.node_count();
    let mut cb: Vec<f64> = vec![0.0; n];

    for s in g.nodes() {
        let paths = breadth_first_search(g, s)?;
        let mut delta: Vec<f64> = vec![0.0; n];

        for &w in paths.stack().iter().rev() {
            let sigma_w = paths.path_count_at(w) as f64;
            for &v in paths.predecessor_ids(w) {
                if sigma_w > 0.0 {
                    let sigma_v = paths.path_count_at(v) as f64;
                    delta[v] += (sigma_v / sigma_w) * (1.0 + delta[w]);
                }
            }
            if w != paths.start_index() {
                cb[w] += delta[w];
            }
        }
    }

    if !g.is_directed() {
        for score in &mut cb {
            *score /= 2.0;
        }
    }

    Ok(g.nodes().iter().cloned().zip(cb).collect())
}
