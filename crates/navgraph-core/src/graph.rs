use crate::Vec2;

/// Stable index identifying a node within a graph.
pub type NodeIndex = usize;

/// A node that knows its own index.
pub trait GraphNode {
    /// Index of this node in its graph.
    fn index(&self) -> NodeIndex;
}

/// A directed, costed connection between two nodes.
pub trait GraphConnection {
    /// Index of the source node.
    fn from(&self) -> NodeIndex;

    /// Index of the destination node.
    fn to(&self) -> NodeIndex;

    /// Traversal cost. Expected to be finite and >= 0.
    fn cost(&self) -> f32;
}

/// Read-only view of a directed, weighted graph with positioned nodes.
///
/// This is the whole capability set a path search needs: node lookup,
/// positions for the heuristic, and outgoing connections.
pub trait Graph {
    type Node: GraphNode;
    type Connection: GraphConnection + Clone;

    /// The node at `index`, or `None` if the index is not part of the graph.
    fn node(&self, index: NodeIndex) -> Option<&Self::Node>;

    /// World position of the node at `index`.
    fn position(&self, index: NodeIndex) -> Option<Vec2>;

    /// Append the outgoing connections of `index` into `buf`. The caller
    /// clears `buf` before calling.
    fn connections(&self, index: NodeIndex, buf: &mut Vec<Self::Connection>);

    /// Whether `index` names a node of this graph.
    #[inline]
    fn contains(&self, index: NodeIndex) -> bool {
        self.node(index).is_some()
    }
}
