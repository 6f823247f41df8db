//! Adjacency matrices and their integer powers.
//!
//! Entry `(i, j)` of the `k`-th power counts walks of length `k` from `order[i]` to `order[j]`.
//! Counts saturate at `u64::MAX` instead of wrapping.

use crate::graph::{Error, Graph, Node, Result};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Square walk-count matrix, row-major.
pub type CountMatrix = Vec<Vec<u64>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix<V> {
    order: Vec<V>,
    cells: Vec<Vec<bool>>,
}

impl<V> AdjacencyMatrix<V> {
    /// Row/column labels.
    pub fn order(&self) -> &[V] {
        &self.order
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.cells
    }

    pub fn get(&self, i: usize, j: usize) -> bool {
        self.cells[i][j]
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.len();
        (0..n).all(|i| (0..i).all(|j| self.cells[i][j] == self.cells[j][i]))
    }

    /// The same matrix with `true` as 1 and `false` as 0.
    pub fn to_counts(&self) -> CountMatrix {
        self.cells
            .iter()
            .map(|row| row.iter().map(|&b| u64::from(b)).collect())
            .collect()
    }
}

/// Boolean adjacency over `order` (the graph's node order when `order` is empty).
///
/// `(i, j)` is set iff an edge leads from `order[i]` to `order[j]`; undirected graphs therefore
/// always yield a symmetric matrix.
pub fn adjacency_matrix<V, G>(g: &G, order: &[V]) -> Result<AdjacencyMatrix<V>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let order: Vec<V> = if order.is_empty() {
        g.nodes().to_vec()
    } else {
        order.to_vec()
    };

    let cells = {
        let mut position: HashMap<&V, usize> = HashMap::default();
        for (i, v) in order.iter().enumerate() {
            g.require(v)?;
            if position.insert(v, i).is_some() {
                return Err(Error::DuplicateInOrder {
                    node: format!("{v:?}"),
                });
            }
        }

        let n = order.len();
        let mut cells = vec![vec![false; n]; n];
        for (i, v) in order.iter().enumerate() {
            for w in g.out_neighbors(v)? {
                if let Some(&j) = position.get(w) {
                    cells[i][j] = true;
                }
            }
        }
        cells
    };

    Ok(AdjacencyMatrix { order, cells })
}

/// Standard (sum-of-products) product of an `n x m` and an `m x p` matrix.
pub fn matrix_product(a: &[Vec<u64>], b: &[Vec<u64>]) -> CountMatrix {
    let p = b.first().map_or(0, Vec::len);
    a.iter()
        .map(|row| {
            (0..p)
                .map(|j| {
                    row.iter()
                        .zip(b)
                        .fold(0u64, |acc, (&x, b_row)| {
                            acc.saturating_add(x.saturating_mul(b_row[j]))
                        })
                })
                .collect()
        })
        .collect()
}

/// `[A, A^2, ..., A^max_power]` for the adjacency matrix `A` over `order`.
#[tracing::instrument(level = "debug", skip_all, fields(nodes = g.node_count(), max_power = max_power))]
pub fn adjacency_matrix_powers<V, G>(
    g: &G,
    order: &[V],
    max_power: usize,
) -> Result<Vec<CountMatrix>>
where
    V: Node,
    G: Graph<V> + ?Sized,
{
    let base = adjacency_matrix(g, order)?.to_counts();
    let mut powers: Vec<CountMatrix> = Vec::with_capacity(max_power);
    if max_power == 0 {
        return Ok(powers);
    }

    powers.push(base.clone());
    while powers.len() < max_power {
        let next = match powers.last() {
            Some(last) => matrix_product(last, &base),
            None => break,
        };
        powers.push(next);
    }
    Ok(powers)
}
