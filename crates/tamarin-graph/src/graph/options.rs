//! Graph configuration options.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    pub directed: bool,
}

impl GraphOptions {
    pub const DIRECTED: Self = Self { directed: true };
    pub const UNDIRECTED: Self = Self { directed: false };
}
