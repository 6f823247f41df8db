#![forbid(unsafe_code)]

//! Immutable graph storage for `tamarin`.
//!
//! A graph is built once from a node list and a raw edge list ([`AdjacencyGraph`]), optionally
//! wrapped in a [`DegreeClassifiedGraph`] for workloads that hammer degree and adjacency
//! queries, and read through the [`Graph`] capability trait. Derived views (incident-edge
//! index, degree tables, component partition) are computed at most once per instance.

pub mod classified;
pub mod components;
pub mod contract;
pub mod error;
pub mod graph;
pub mod render;

pub use classified::{DegreeClass, DegreeClassifiedGraph};
pub use components::{ComponentPartition, NodeSet};
pub use contract::{Graph, Node};
pub use error::{Error, Result};
pub use graph::{AdjacencyGraph, Edge, GraphOptions};
pub use render::{RenderOptions, render, render_sorted};
