use std::fmt::Debug;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge ({from} -> {to}) references {missing}, which is not a node of the graph")]
    MissingEndpoint {
        from: String,
        to: String,
        missing: String,
    },

    #[error("not a node of this graph: {node}")]
    NotANode { node: String },

    #[error("node ordering lists {node} more than once")]
    DuplicateInOrder { node: String },
}

impl Error {
    pub fn not_a_node<V: Debug + ?Sized>(node: &V) -> Self {
        Self::NotANode {
            node: format!("{node:?}"),
        }
    }

    pub(crate) fn missing_endpoint<V: Debug>(from: &V, to: &V, missing: &V) -> Self {
        Self::MissingEndpoint {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
            missing: format!("{missing:?}"),
        }
    }
}
