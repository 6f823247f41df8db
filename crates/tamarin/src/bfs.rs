//! Breadth-first search with shortest-path counting.
//!
//! From a start node, every reachable node gets its distance, the number of distinct shortest
//! paths reaching it, and the predecessors it can be reached from along such paths. The visit
//! order is kept as a stack: popping it yields nodes in non-increasing distance, which is the
//! order dependency back-propagation needs (see [`crate::centrality`]).
//!
//! Directed graphs are walked along out-edges only.

use crate::graph::{Graph, Node, Result};
use std::collections::VecDeque;

pub struct ShortestPaths<'g, V: Node, G: Graph<V> + ?Sized> {
    graph: &'g G,
    start: usize,
    distance: Vec<Option<usize>>,
    path_count: Vec<u64>,
    predecessors: Vec<Vec<usize>>,
    stack: Vec<usize>,
    _node: std::marker::PhantomData<V>,
}

pub fn breadth_first_search<'g, V, G>(g: &'g G, start: &V) -> Result<ShortestPaths<'g, V, G>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let s = g.require(start)?;
    let nodes = g.nodes();
    let n = nodes.len();

    let mut distance: Vec<Option<usize>> = vec![None; n];
    let mut path_count: Vec<u64> = vec![0; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut stack: Vec<usize> = Vec::with_capacity(n);

    distance[s] = Some(0);
    path_count[s] = 1;

    let mut queue: VecDeque<usize> = VecDeque::new();
    queue.push_back(s);

    while let Some(v) = queue.pop_front() {
        stack.push(v);
        let Some(dv) = distance[v] else {
            continue;
        };

        for w in g.out_neighbors(&nodes[v])? {
            let Some(wi) = g.node_index(w) else {
                continue;
            };

            if distance[wi].is_none() {
                distance[wi] = Some(dv + 1);
                queue.push_back(wi);
            }

            if distance[wi] == Some(dv + 1) {
                path_count[wi] = path_count[wi].saturating_add(path_count[v]);
                predecessors[wi].push(v);
            }
        }
    }

    Ok(ShortestPaths {
        graph: g,
        start: s,
        distance,
        path_count,
        predecessors,
        stack,
        _node: std::marker::PhantomData,
    })
}

impl<'g, V, G> ShortestPaths<'g, V, G>
where
    V: Node + 'g,
    G: Graph<V> + ?Sized,
{
    pub fn start(&self) -> &'g V {
        &self.graph.nodes()[self.start]
    }

    /// Shortest-path length from the start, or `None` if `v` is unreached or not a node.
    pub fn distance(&self, v: &V) -> Option<usize> {
        self.graph.node_index(v).and_then(|ix| self.distance[ix])
    }

    /// Number of distinct shortest paths from the start to `v` (`0` when unreached).
    pub fn path_count(&self, v: &V) -> u64 {
        self.graph
            .node_index(v)
            .map_or(0, |ix| self.path_count[ix])
    }

    pub fn predecessors(&self, v: &V) -> Vec<&'g V> {
        let nodes = self.graph.nodes();
        self.graph
            .node_index(v)
            .map(|ix| self.predecessors[ix].iter().map(|&p| &nodes[p]).collect())
            .unwrap_or_default()
    }

    pub fn is_reached(&self, v: &V) -> bool {
        self.distance(v).is_some()
    }

    /// Reached nodes in visit order (non-decreasing distance).
    pub fn visit_order(&self) -> impl DoubleEndedIterator<Item = &'g V> + '_ {
        let nodes = self.graph.nodes();
        self.stack.iter().map(move |&ix| &nodes[ix])
    }

    /// Every shortest path from the start to `target`, each listed start first.
    ///
    /// Empty when `target` is unreached. The order of the paths is unspecified.
    pub fn shortest_paths_to(&self, target: &V) -> Vec<Vec<&'g V>> {
        let Some(t) = self.graph.node_index(target) else {
            return Vec::new();
        };
        if self.distance[t].is_none() {
            return Vec::new();
        }

        let nodes = self.graph.nodes();
        let mut paths: Vec<Vec<&'g V>> = Vec::new();
        // (node, next predecessor to try), target at the bottom.
        let mut walk: Vec<(usize, usize)> = vec![(t, 0)];
        while let Some(top) = walk.last_mut() {
            let (v, cursor) = *top;
            if v == self.start {
                paths.push(walk.iter().rev().map(|&(ix, _)| &nodes[ix]).collect());
                walk.pop();
            } else if let Some(&p) = self.predecessors[v].get(cursor) {
                top.1 += 1;
                walk.push((p, 0));
            } else {
                walk.pop();
            }
        }
        paths
    }

    pub(crate) fn start_index(&self) -> usize {
        self.start
    }

    pub(crate) fn stack(&self) -> &[usize] {
        &self.stack
    }

    pub(crate) fn predecessor_ids(&self, ix: usize) -> &[usize] {
        &self.predecessors[ix]
    }

    pub(crate) fn path_count_at(&self, ix: usize) -> u64 {
        self.path_count[ix]
    }
}
