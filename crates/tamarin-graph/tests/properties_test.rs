//! Structural laws every built graph must satisfy, checked on random edge lists.

use proptest::prelude::*;
use std::collections::BTreeSet;
use tamarin_graph::{AdjacencyGraph, DegreeClassifiedGraph, Graph, GraphOptions};

fn raw_graph() -> impl Strategy<Value = (u8, Vec<(u8, u8)>)> {
    (1u8..24).prop_flat_map(|n| (Just(n), prop::collection::vec((0..n, 0..n), 0..60)))
}

fn build(directed: bool, n: u8, edges: &[(u8, u8)]) -> AdjacencyGraph<u8> {
    AdjacencyGraph::new(GraphOptions { directed }, 0..n, edges.iter().copied()).unwrap()
}

proptest! {
    #[test]
    fn prop_undirected_edge_count_bounded_by_distinct_pairs((n, edges) in raw_graph()) {
        let g = build(false, n, &edges);
        let distinct: BTreeSet<(u8, u8)> = edges
            .iter()
            .map(|&(a, b)| (a.min(b), a.max(b)))
            .collect();
        prop_assert_eq!(g.edge_count(), distinct.len());
    }

    #[test]
    fn prop_directed_edge_count_matches_distinct_ordered_pairs((n, edges) in raw_graph()) {
        let g = build(true, n, &edges);
        let distinct: BTreeSet<(u8, u8)> = edges.iter().copied().collect();
        prop_assert_eq!(g.edge_count(), distinct.len());
    }

    #[test]
    fn prop_undirected_adjacency_is_symmetric_and_degrees_sum((n, edges) in raw_graph()) {
        let g = build(false, n, &edges);
        let mut degree_sum = 0usize;
        for x in g.nodes() {
            degree_sum += g.degree(x).unwrap();
            for y in g.nodes() {
                prop_assert_eq!(g.adjacent(x, y).unwrap(), g.adjacent(y, x).unwrap());
            }
        }
        prop_assert_eq!(degree_sum, 2 * g.edge_count());
    }

    #[test]
    fn prop_directed_degree_splits_into_in_and_out((n, edges) in raw_graph()) {
        let g = build(true, n, &edges);
        for v in g.nodes() {
            prop_assert_eq!(
                g.degree(v).unwrap(),
                g.out_degree(v).unwrap() + g.in_degree(v).unwrap()
            );
        }
    }

    #[test]
    fn prop_components_cover_nodes_exactly_once(
        (n, edges) in raw_graph(),
        directed in any::<bool>(),
    ) {
        let g = build(directed, n, &edges);
        let mut seen: BTreeSet<u8> = BTreeSet::new();
        for component in g.components() {
            for v in component {
                prop_assert!(seen.insert(*v), "node {} appears twice", v);
            }
        }
        let all: BTreeSet<u8> = g.nodes().iter().copied().collect();
        prop_assert_eq!(seen, all);
    }

    #[test]
    fn prop_connected_endpoints_share_a_component((n, edges) in raw_graph()) {
        let g = build(true, n, &edges);
        let parts = g.components();
        for e in g.edges() {
            prop_assert_eq!(
                parts.component_index_of(&e.source),
                parts.component_index_of(&e.target)
            );
        }
    }

    #[test]
    fn prop_component_graphs_preserve_nodes_and_edges((n, edges) in raw_graph()) {
        let g = build(false, n, &edges);
        let graphs = g.component_graphs();
        let nodes: usize = graphs.iter().map(|c| c.node_count()).sum();
        let edge_total: usize = graphs.iter().map(|c| c.edge_count()).sum();
        prop_assert_eq!(nodes, g.node_count());
        prop_assert_eq!(edge_total, g.edge_count());
    }

    #[test]
    fn prop_classification_buckets_match_degrees((n, edges) in raw_graph()) {
        let g = DegreeClassifiedGraph::new(build(false, n, &edges));
        let base = g.base();
        let bucket_total =
            g.isolates().len() + g.leaves().len() + g.connectors().len() + g.core().len();
        prop_assert_eq!(bucket_total, g.node_count());
        for v in g.core() {
            prop_assert!(base.degree(v).unwrap() >= 3);
        }
        for v in g.leaves() {
            prop_assert_eq!(base.degree(v).unwrap(), 1);
        }
    }
}
