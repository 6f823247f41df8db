#![forbid(unsafe_code)]

//! Graph algorithms over [`tamarin_graph`] storage.
//!
//! Every algorithm is a pure function over the [`graph::Graph`] capability, so it runs on the
//! plain adjacency store, the degree-classified decorator, or any other implementor alike.
//! Where a graph exposes a faster path (see [`graph::Graph::as_classified`]) the algorithms
//! take it.

pub use tamarin_graph as graph;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod bfs;
pub mod centrality;
pub mod contraction;
pub mod copy;
pub mod degree;
pub mod geodesic;
pub mod matrix;
pub mod subgraph;

pub use bfs::{ShortestPaths, breadth_first_search};
pub use centrality::betweenness;
pub use contraction::{contracted_components, contracted_graph};
pub use copy::{copy, copy_undirected};
pub use degree::{degree_distribution, nodes_of_degree};
pub use geodesic::{Distances, geodesic_distance, geodesic_tree, neighborhood};
pub use matrix::{
    AdjacencyMatrix, CountMatrix, adjacency_matrix, adjacency_matrix_powers, matrix_product,
};
pub use subgraph::{core_graph, subgraph};
