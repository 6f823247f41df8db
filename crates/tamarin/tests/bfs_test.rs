use tamarin::bfs::breadth_first_search;
use tamarin::graph::{AdjacencyGraph, Error};

fn diamond() -> AdjacencyGraph<&'static str> {
    //   b
    //  / \
    // a   d - e
    //  \ /
    //   c
    AdjacencyGraph::undirected(
        ["a", "b", "c", "d", "e", "z"],
        [("a", "b"), ("a", "c"), ("b", "d"), ("c", "d"), ("d", "e")],
    )
    .unwrap()
}

#[test]
fn distances_and_path_counts_on_a_diamond() {
    let g = diamond();
    let bfs = breadth_first_search(&g, &"a").unwrap();

    assert_eq!(bfs.start(), &"a");
    assert_eq!(bfs.distance(&"a"), Some(0));
    assert_eq!(bfs.distance(&"d"), Some(2));
    assert_eq!(bfs.distance(&"e"), Some(3));
    assert_eq!(bfs.path_count(&"a"), 1);
    assert_eq!(bfs.path_count(&"d"), 2);
    assert_eq!(bfs.path_count(&"e"), 2);
}

#[test]
fn unreached_nodes_have_no_distance_and_no_paths() {
    let g = diamond();
    let bfs = breadth_first_search(&g, &"a").unwrap();

    assert_eq!(bfs.distance(&"z"), None);
    assert!(!bfs.is_reached(&"z"));
    assert_eq!(bfs.path_count(&"z"), 0);
    assert!(bfs.predecessors(&"z").is_empty());
    assert!(bfs.shortest_paths_to(&"z").is_empty());
}

#[test]
fn predecessors_cover_every_shortest_route() {
    let g = diamond();
    let bfs = breadth_first_search(&g, &"a").unwrap();

    let mut preds = bfs.predecessors(&"d");
    preds.sort();
    assert_eq!(preds, vec![&"b", &"c"]);

    let mut paths = bfs.shortest_paths_to(&"e");
    paths.sort();
    assert_eq!(
        paths,
        vec![vec![&"a", &"b", &"d", &"e"], vec![&"a", &"c", &"d", &"e"]]
    );
    assert_eq!(bfs.shortest_paths_to(&"a"), vec![vec![&"a"]]);
}

#[test]
fn visit_order_is_non_decreasing_in_distance() {
    let g = diamond();
    let bfs = breadth_first_search(&g, &"a").unwrap();

    let distances: Vec<usize> = bfs
        .visit_order()
        .map(|v| bfs.distance(v).unwrap())
        .collect();
    assert_eq!(distances.len(), 5);
    assert!(distances.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(bfs.visit_order().next_back(), Some(&"e"));
}

#[test]
fn directed_search_follows_out_edges() {
    let g = AdjacencyGraph::directed([1, 2, 3], [(1, 2), (3, 2)]).unwrap();
    let bfs = breadth_first_search(&g, &1).unwrap();

    assert_eq!(bfs.distance(&2), Some(1));
    assert_eq!(bfs.distance(&3), None);
}

#[test]
fn parallel_requests_do_not_inflate_path_counts() {
    let g = AdjacencyGraph::undirected([1, 2], [(1, 2), (2, 1), (1, 2)]).unwrap();
    let bfs = breadth_first_search(&g, &1).unwrap();
    assert_eq!(bfs.path_count(&2), 1);
}

#[test]
fn search_from_absent_node_fails() {
    let g = diamond();
    assert!(matches!(
        breadth_first_search(&g, &"nowhere"),
        Err(Error::NotANode { .. })
    ));
}

#[test]
fn long_path_reconstruction_does_not_recurse_per_hop() {
    let n = 300_000u32;
    let g = AdjacencyGraph::undirected(0..n, (1..n).map(|i| (i - 1, i))).unwrap();
    let bfs = breadth_first_search(&g, &0).unwrap();

    let paths = bfs.shortest_paths_to(&(n - 1));
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0].len(), n as usize);
    assert_eq!(paths[0].first(), Some(&&0));
    assert_eq!(paths[0].last(), Some(&&(n - 1)));
}

#[test]
fn shortest_paths_branch_and_rejoin() {
    // Two diamonds in a row: 2 * 2 shortest routes from s to t.
    let g = AdjacencyGraph::undirected(
        ["s", "a", "b", "m", "c", "d", "t"],
        [
            ("s", "a"),
            ("s", "b"),
            ("a", "m"),
            ("b", "m"),
            ("m", "c"),
            ("m", "d"),
            ("c", "t"),
            ("d", "t"),
        ],
    )
    .unwrap();
    let bfs = breadth_first_search(&g, &"s").unwrap();

    let paths = bfs.shortest_paths_to(&"t");
    assert_eq!(paths.len() as u64, bfs.path_count(&"t"));
    assert_eq!(paths.len(), 4);
    for path in &paths {
        assert_eq!(path.len(), 5);
        assert_eq!(*path[0], "s");
        assert_eq!(*path[2], "m");
        assert_eq!(*path[4], "t");
    }
}
