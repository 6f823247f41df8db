use std::collections::BTreeMap;
use tamarin::graph::{AdjacencyGraph, DegreeClassifiedGraph};
use tamarin::{degree_distribution, nodes_of_degree};

#[test]
fn distribution_counts_nodes_per_degree() {
    let g = AdjacencyGraph::undirected(0..6, [(0, 1), (0, 2), (0, 3), (4, 4)]).unwrap();
    let dist = degree_distribution(&g).unwrap();

    let expected: BTreeMap<usize, usize> = [(0, 1), (1, 3), (2, 1), (3, 1)].into_iter().collect();
    assert_eq!(dist, expected);
    assert_eq!(dist.values().sum::<usize>(), 6);
}

#[test]
fn distribution_is_the_same_through_the_classified_view() {
    let base = AdjacencyGraph::undirected(0..6, [(0, 1), (1, 2), (2, 0), (3, 4)]).unwrap();
    let classified = DegreeClassifiedGraph::new(base.clone());
    assert_eq!(
        degree_distribution(&base).unwrap(),
        degree_distribution(&classified).unwrap()
    );
}

#[test]
fn nodes_of_degree_follow_node_order() {
    let g = AdjacencyGraph::undirected([5, 4, 3, 2], [(5, 4), (3, 2), (2, 5)]).unwrap();
    assert_eq!(nodes_of_degree(&g, 1).unwrap(), vec![&4, &3]);
    assert_eq!(nodes_of_degree(&g, 2).unwrap(), vec![&5, &2]);
    assert!(nodes_of_degree(&g, 7).unwrap().is_empty());
}
