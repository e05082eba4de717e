//! **navgraph-core** — navigation graph primitives.
//!
//! This crate provides the collaborator side of path search: the [`Vec2`]
//! position type, the read-only [`Graph`] capability traits a search
//! consumes, and [`NavGraph`], an adjacency-list implementation with a grid
//! constructor.

pub mod error;
pub mod geom;
pub mod graph;
pub mod navgraph;

pub use error::GraphError;
pub use geom::Vec2;
pub use graph::{Graph, GraphConnection, GraphNode, NodeIndex};
pub use navgraph::{Adjacency, NavConnection, NavGraph, NavNode};
