//! Edge records.
//!
//! An edge keeps its endpoints in the orientation of the first request that created it. In an
//! undirected graph that orientation only matters for deterministic iteration and rendering.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub source: V,
    pub target: V,
}

impl<V> Edge<V> {
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    pub fn endpoints(&self) -> (&V, &V) {
        (&self.source, &self.target)
    }
}

impl<V: PartialEq> Edge<V> {
    pub fn is_loop(&self) -> bool {
        self.source == self.target
    }

    pub fn touches(&self, v: &V) -> bool {
        self.source == *v || self.target == *v
    }

    /// The endpoint across from `v`, or `None` when `v` is not an endpoint.
    ///
    /// For a self-loop on `v` this is `v` itself.
    pub fn opposite(&self, v: &V) -> Option<&V> {
        if self.source == *v {
            Some(&self.target)
        } else if self.target == *v {
            Some(&self.source)
        } else {
            None
        }
    }

    /// Whether this edge joins `x` to `y`, honoring orientation only when `directed`.
    pub fn connects(&self, x: &V, y: &V, directed: bool) -> bool {
        if self.source == *x && self.target == *y {
            return true;
        }
        !directed && self.source == *y && self.target == *x
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self::new(source, target)
    }
}

/// Dedup key over dense node ids: ordered for directed graphs, sorted otherwise.
pub(in crate::graph) fn dedup_key(a: usize, b: usize, directed: bool) -> (usize, usize) {
    if directed || a <= b { (a, b) } else { (b, a) }
}
