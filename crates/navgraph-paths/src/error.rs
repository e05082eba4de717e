use navgraph_core::NodeIndex;
use thiserror::Error;

/// Ways a path search can fail.
///
/// [`PathError::NoPath`] and [`PathError::BudgetExhausted`] are ordinary
/// outcomes. The other variants mean the caller handed in a bad graph,
/// node or configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PathError {
    #[error("no path from node {start} to node {goal}")]
    NoPath { start: NodeIndex, goal: NodeIndex },

    #[error("node {0} is not part of the graph")]
    InvalidNode(NodeIndex),

    #[error("connection {from} -> {to} has invalid cost {cost}")]
    InvalidCost {
        from: NodeIndex,
        to: NodeIndex,
        cost: f32,
    },

    #[error("heuristic weight {0} must be finite and non-negative")]
    InvalidWeight(f32),

    #[error("search budget exhausted after {expanded} expansions")]
    BudgetExhausted { expanded: usize },

    /// A record's predecessor could not be found while walking the path
    /// back from the goal. Indicates broken bookkeeping, never a property
    /// of the input graph.
    #[error("path reconstruction lost track at node {node}")]
    BrokenChain { node: NodeIndex },
}

pub type Result<T> = std::result::Result<T, PathError>;
