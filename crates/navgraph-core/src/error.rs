use thiserror::Error;

use crate::NodeIndex;

/// Errors raised while building a [`NavGraph`](crate::NavGraph).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} does not exist")]
    UnknownNode(NodeIndex),

    #[error("connection {from} -> {to} has invalid cost {cost}")]
    InvalidCost {
        from: NodeIndex,
        to: NodeIndex,
        cost: f32,
    },

    #[error("node position {0:?} is not finite")]
    InvalidPosition((f32, f32)),
}

pub type Result<T> = std::result::Result<T, GraphError>;
