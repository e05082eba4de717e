//! A* shortest-path search over navigation graphs.
//!
//! [`PathFinder`] borrows any [`Graph`](navgraph_core::Graph) implementation
//! and an injected heuristic, and returns least-cost node sequences:
//!
//! - [`PathFinder::find_path`] yields references to the graph's nodes
//! - [`PathFinder::search`] yields a [`Route`] with indices, cost and
//!   expansion statistics
//! - [`find_path`] is a one-shot convenience wrapper
//!
//! Heuristics receive the absolute per-axis displacement `(dx, dy)` between
//! a node and the goal. Built-ins live in [`heuristic`].
//!
//! # Logging
//!
//! Search start and outcome are reported at `debug` level through the
//! [`log`] facade, individual expansions at `trace` level.

mod astar;
mod config;
mod error;
pub mod heuristic;
mod record;

pub use astar::{PathFinder, Route, find_path};
pub use config::SearchConfig;
pub use error::{PathError, Result};
pub use heuristic::{Heuristic, HeuristicKind};
