//! [`NavGraph`]: an adjacency-list graph implementing [`Graph`].
//!
//! Nodes are appended and never removed, so a [`NodeIndex`] stays valid for
//! the lifetime of the graph. Blocking a node is done by cutting its
//! connections with [`NavGraph::isolate`].

use std::f32::consts::SQRT_2;

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphConnection, GraphNode, NodeIndex};
use crate::Vec2;

/// A positioned node.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavNode {
    pub index: NodeIndex,
    pub pos: Vec2,
}

impl GraphNode for NavNode {
    #[inline]
    fn index(&self) -> NodeIndex {
        self.index
    }
}

/// A directed connection with a traversal cost.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavConnection {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub cost: f32,
}

impl GraphConnection for NavConnection {
    #[inline]
    fn from(&self) -> NodeIndex {
        self.from
    }

    #[inline]
    fn to(&self) -> NodeIndex {
        self.to
    }

    #[inline]
    fn cost(&self) -> f32 {
        self.cost
    }
}

/// Grid connectivity used by [`NavGraph::grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Adjacency {
    /// Up, right, down, left.
    #[default]
    Four,
    /// Cardinal plus diagonal moves. Diagonals cost `SQRT_2`.
    Eight,
}

impl Adjacency {
    const CARDINAL: [(i64, i64); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
    const DIAGONAL: [(i64, i64); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];

    fn steps(self) -> impl Iterator<Item = (i64, i64, f32)> {
        let cardinal: &'static [(i64, i64)] = &Self::CARDINAL;
        let diagonals: &'static [(i64, i64)] = match self {
            Self::Four => &[],
            Self::Eight => &Self::DIAGONAL,
        };
        cardinal
            .iter()
            .map(|&(dx, dy)| (dx, dy, 1.0))
            .chain(diagonals.iter().map(|&(dx, dy)| (dx, dy, SQRT_2)))
    }
}

/// Directed, weighted adjacency-list graph.
///
/// Parallel connections between the same pair of nodes are allowed.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavGraph {
    nodes: Vec<NavNode>,
    /// Outgoing connections, indexed by source node.
    outgoing: Vec<Vec<NavConnection>>,
}

impl NavGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with room for `nodes` nodes.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            outgoing: Vec::with_capacity(nodes),
        }
    }

    /// Build a `width` x `height` grid with unit spacing.
    ///
    /// The node at column `x`, row `y` has index `y * width + x` and position
    /// `(x, y)`. Every in-bounds step allowed by `adjacency` becomes a
    /// connection in both directions.
    pub fn grid(width: usize, height: usize, adjacency: Adjacency) -> Self {
        let mut g = Self::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                g.push_node(Vec2::new(x as f32, y as f32));
            }
        }
        let (w, h) = (width as i64, height as i64);
        for y in 0..h {
            for x in 0..w {
                let from = (y * w + x) as NodeIndex;
                for (dx, dy, cost) in adjacency.steps() {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || ny < 0 || nx >= w || ny >= h {
                        continue;
                    }
                    let to = (ny * w + nx) as NodeIndex;
                    g.outgoing[from].push(NavConnection { from, to, cost });
                }
            }
        }
        g
    }

    fn push_node(&mut self, pos: Vec2) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(NavNode { index, pos });
        self.outgoing.push(Vec::new());
        index
    }

    /// Append a node at `pos` and return its index.
    pub fn add_node(&mut self, pos: Vec2) -> Result<NodeIndex> {
        if !pos.is_finite() {
            return Err(GraphError::InvalidPosition((pos.x, pos.y)));
        }
        Ok(self.push_node(pos))
    }

    /// Add a directed connection `from -> to`.
    ///
    /// Fails if either endpoint is unknown or `cost` is negative or not
    /// finite.
    pub fn add_connection(&mut self, from: NodeIndex, to: NodeIndex, cost: f32) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        if !cost.is_finite() || cost < 0.0 {
            return Err(GraphError::InvalidCost { from, to, cost });
        }
        self.outgoing[from].push(NavConnection { from, to, cost });
        Ok(())
    }

    /// Add connections `a -> b` and `b -> a` with the same cost.
    pub fn add_bidirectional(&mut self, a: NodeIndex, b: NodeIndex, cost: f32) -> Result<()> {
        self.add_connection(a, b, cost)?;
        self.add_connection(b, a, cost)
    }

    /// Remove every connection `from -> to`. Returns how many were removed.
    pub fn remove_connections(&mut self, from: NodeIndex, to: NodeIndex) -> Result<usize> {
        self.check_node(from)?;
        self.check_node(to)?;
        let list = &mut self.outgoing[from];
        let before = list.len();
        list.retain(|c| c.to != to);
        Ok(before - list.len())
    }

    /// Cut all connections into and out of `index`, making it unreachable.
    pub fn isolate(&mut self, index: NodeIndex) -> Result<()> {
        self.check_node(index)?;
        self.outgoing[index].clear();
        for list in &mut self.outgoing {
            list.retain(|c| c.to != index);
        }
        Ok(())
    }

    /// Outgoing connections of `index` (empty for unknown nodes).
    pub fn outgoing(&self, index: NodeIndex) -> &[NavConnection] {
        self.outgoing.get(index).map_or(&[], Vec::as_slice)
    }

    /// All nodes, ordered by index.
    pub fn nodes(&self) -> &[NavNode] {
        &self.nodes
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of directed connections.
    pub fn connection_count(&self) -> usize {
        self.outgoing.iter().map(Vec::len).sum()
    }

    fn check_node(&self, index: NodeIndex) -> Result<()> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::UnknownNode(index))
        }
    }
}

impl Graph for NavGraph {
    type Node = NavNode;
    type Connection = NavConnection;

    #[inline]
    fn node(&self, index: NodeIndex) -> Option<&NavNode> {
        self.nodes.get(index)
    }

    #[inline]
    fn position(&self, index: NodeIndex) -> Option<Vec2> {
        self.nodes.get(index).map(|n| n.pos)
    }

    fn connections(&self, index: NodeIndex, buf: &mut Vec<NavConnection>) {
        buf.extend_from_slice(self.outgoing(index));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> NavGraph {
        let mut g = NavGraph::new();
        for i in 0..n {
            g.add_node(Vec2::new(i as f32, 0.0)).unwrap();
        }
        g
    }

    #[test]
    fn add_nodes_assigns_sequential_indices() {
        let g = line(3);
        assert_eq!(g.node_count(), 3);
        for (i, n) in g.nodes().iter().enumerate() {
            assert_eq!(n.index(), i);
            assert_eq!(g.position(i), Some(Vec2::new(i as f32, 0.0)));
        }
        assert!(g.node(3).is_none());
        assert!(!g.contains(3));
    }

    #[test]
    fn add_connection_validates_endpoints_and_cost() {
        let mut g = line(2);
        assert_eq!(g.add_connection(0, 5, 1.0), Err(GraphError::UnknownNode(5)));
        assert!(matches!(
            g.add_connection(0, 1, -1.0),
            Err(GraphError::InvalidCost { from: 0, to: 1, .. })
        ));
        assert!(g.add_connection(0, 1, f32::NAN).is_err());
        assert!(g.add_connection(0, 1, 0.0).is_ok());
        assert_eq!(g.connection_count(), 1);
    }

    #[test]
    fn add_node_rejects_non_finite_position() {
        let mut g = NavGraph::new();
        assert!(g.add_node(Vec2::new(f32::INFINITY, 0.0)).is_err());
        assert_eq!(g.node_count(), 0);
    }

    #[test]
    fn parallel_connections_are_kept() {
        let mut g = line(2);
        g.add_connection(0, 1, 3.0).unwrap();
        g.add_connection(0, 1, 1.0).unwrap();
        let mut buf = Vec::new();
        g.connections(0, &mut buf);
        assert_eq!(buf.len(), 2);
        assert_eq!(g.remove_connections(0, 1), Ok(2));
        assert!(g.outgoing(0).is_empty());
    }

    #[test]
    fn bidirectional_adds_both_directions() {
        let mut g = line(2);
        g.add_bidirectional(0, 1, 2.0).unwrap();
        assert_eq!(g.outgoing(0)[0].to(), 1);
        assert_eq!(g.outgoing(1)[0].to(), 0);
        assert_eq!(g.outgoing(1)[0].cost(), 2.0);
    }

    #[test]
    fn grid_four_way() {
        let g = NavGraph::grid(3, 2, Adjacency::Four);
        assert_eq!(g.node_count(), 6);
        // corners have 2 neighbours, edge-middles 3
        assert_eq!(g.outgoing(0).len(), 2);
        assert_eq!(g.outgoing(1).len(), 3);
        assert_eq!(g.position(5), Some(Vec2::new(2.0, 1.0)));
        assert_eq!(g.connection_count(), 14);
    }

    #[test]
    fn grid_eight_way_diagonal_cost() {
        let g = NavGraph::grid(3, 3, Adjacency::Eight);
        let center = 4;
        assert_eq!(g.outgoing(center).len(), 8);
        let diag = g.outgoing(center).iter().find(|c| c.to == 0).unwrap();
        assert_eq!(diag.cost, SQRT_2);
        let straight = g.outgoing(center).iter().find(|c| c.to == 1).unwrap();
        assert_eq!(straight.cost, 1.0);
    }

    #[test]
    fn isolate_cuts_both_directions() {
        let mut g = NavGraph::grid(3, 3, Adjacency::Four);
        g.isolate(4).unwrap();
        assert!(g.outgoing(4).is_empty());
        assert!(g.nodes().iter().all(|n| g.outgoing(n.index).iter().all(|c| c.to != 4)));
        assert_eq!(g.isolate(9), Err(GraphError::UnknownNode(9)));
    }

    #[test]
    fn unknown_node_has_no_connections() {
        let g = line(1);
        let mut buf = Vec::new();
        g.connections(7, &mut buf);
        assert!(buf.is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn navgraph_round_trip() {
        let mut g = NavGraph::grid(2, 2, Adjacency::Eight);
        g.isolate(3).unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: NavGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back.node_count(), 4);
        assert_eq!(back.connection_count(), g.connection_count());
        assert_eq!(back.outgoing(0), g.outgoing(0));
    }

    #[test]
    fn adjacency_names() {
        let json = serde_json::to_string(&Adjacency::Eight).unwrap();
        assert_eq!(json, "\"Eight\"");
    }
}
