//! Incident-edge cache used by [`AdjacencyGraph`](super::AdjacencyGraph).
//!
//! Every node gets one contiguous slice of edge indices inside a shared flat array, so an
//! adjacency query is a pair of offset reads instead of a scan over all edges. Slices list
//! edges in insertion order; a self-loop appears once in its node's slice.

#[derive(Debug, Clone, Default)]
pub(in crate::graph) struct IncidentCache {
    offsets: Vec<usize>,
    edges: Vec<usize>,
}

impl IncidentCache {
    pub(in crate::graph) fn build(node_count: usize, ends: &[(usize, usize)]) -> Self {
        let mut offsets = vec![0usize; node_count + 1];
        for &(a, b) in ends {
            offsets[a + 1] += 1;
            if a != b {
                offsets[b + 1] += 1;
            }
        }
        for ix in 0..node_count {
            offsets[ix + 1] += offsets[ix];
        }

        let mut cursor = offsets[..node_count].to_vec();
        let mut edges = vec![0usize; offsets[node_count]];
        for (edge_ix, &(a, b)) in ends.iter().enumerate() {
            edges[cursor[a]] = edge_ix;
            cursor[a] += 1;
            if a != b {
                edges[cursor[b]] = edge_ix;
                cursor[b] += 1;
            }
        }

        Self { offsets, edges }
    }

    pub(in crate::graph) fn edges(&self, v_ix: usize) -> &[usize] {
        let start = self.offsets[v_ix];
        let end = self.offsets[v_ix + 1];
        &self.edges[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::IncidentCache;

    #[test]
    fn slices_follow_insertion_order_and_store_loops_once() {
        let cache = IncidentCache::build(3, &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(cache.edges(0), &[0]);
        assert_eq!(cache.edges(1), &[0, 1, 2]);
        assert_eq!(cache.edges(2), &[2]);
    }

    #[test]
    fn isolated_nodes_get_empty_slices() {
        let cache = IncidentCache::build(2, &[]);
        assert!(cache.edges(0).is_empty());
        assert!(cache.edges(1).is_empty());
    }
}
