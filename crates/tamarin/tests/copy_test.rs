use tamarin::graph::{AdjacencyGraph, DegreeClassifiedGraph, Graph, GraphOptions};
use tamarin::{copy, copy_undirected};

#[test]
fn copy_preserves_structure_and_directedness() {
    let g = AdjacencyGraph::directed([1, 2, 3], [(1, 2), (2, 1), (2, 3)]).unwrap();
    let c = copy(&g).unwrap();

    assert!(c.is_directed());
    assert_eq!(c.nodes(), g.nodes());
    assert_eq!(c.edges(), g.edges());
}

#[test]
fn copy_undirected_collapses_antiparallel_edges() {
    let g = AdjacencyGraph::directed([1, 2, 3], [(1, 2), (2, 1), (2, 3)]).unwrap();
    let c = copy_undirected(&g).unwrap();

    assert!(!c.is_directed());
    assert_eq!(c.edge_count(), 2);
    assert!(c.adjacent(&3, &2).unwrap());
}

#[test]
fn copy_strips_degree_classification() {
    let g = DegreeClassifiedGraph::build(GraphOptions::UNDIRECTED, 0..4, [(0, 1), (1, 2)]).unwrap();
    let c = copy(&g).unwrap();

    assert!(g.as_classified().is_some());
    assert!(c.as_classified().is_none());
    assert_eq!(c.node_count(), 4);
    assert_eq!(c.edge_count(), 2);
}
