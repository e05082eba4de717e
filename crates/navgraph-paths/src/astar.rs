use std::collections::{BinaryHeap, HashMap};

use log::{debug, trace};
use navgraph_core::{Graph, GraphConnection, NodeIndex, Vec2};

use crate::config::SearchConfig;
use crate::error::{PathError, Result};
use crate::heuristic::Heuristic;
use crate::record::{OpenEntry, Record, Relax, State};

/// A found route with search statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Node indices from start to goal, both included.
    pub nodes: Vec<NodeIndex>,
    /// Sum of connection costs along `nodes`.
    pub cost: f32,
    /// Number of nodes expanded.
    pub expanded: usize,
    /// Number of closed nodes that were reopened by a cheaper route.
    pub reopened: usize,
}

impl Route {
    /// Number of connections in the route.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// A* search over a borrowed graph.
///
/// The finder holds no per-search state: every call to
/// [`find_path`](Self::find_path) or [`search`](Self::search) builds and
/// drops its own open and closed sets, so one finder can serve many queries.
pub struct PathFinder<'g, G, H = Heuristic> {
    graph: &'g G,
    heuristic: H,
    config: SearchConfig,
}

impl<'g, G, H> PathFinder<'g, G, H>
where
    G: Graph,
    H: Fn(f32, f32) -> f32,
{
    /// Create a finder with the default [`SearchConfig`].
    pub fn new(graph: &'g G, heuristic: H) -> Self {
        Self::with_config(graph, heuristic, SearchConfig::default())
    }

    /// Create a finder with an explicit configuration.
    pub fn with_config(graph: &'g G, heuristic: H, config: SearchConfig) -> Self {
        Self {
            graph,
            heuristic,
            config,
        }
    }

    /// The graph being searched.
    #[inline]
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The active configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Compute a least-cost path from `start` to `goal`.
    ///
    /// Returns the nodes in start-to-goal order, both endpoints included.
    /// `start == goal` yields a single-node path.
    pub fn find_path(&self, start: NodeIndex, goal: NodeIndex) -> Result<Vec<&'g G::Node>> {
        let route = self.search(start, goal)?;
        route
            .nodes
            .iter()
            .map(|&i| self.graph.node(i).ok_or(PathError::InvalidNode(i)))
            .collect()
    }

    /// Like [`find_path`](Self::find_path) but returns indices, total cost
    /// and search statistics.
    pub fn search(&self, start: NodeIndex, goal: NodeIndex) -> Result<Route> {
        self.config.validate()?;
        let start_pos = self.position(start)?;
        let goal_pos = self.position(goal)?;

        if start == goal {
            return Ok(Route {
                nodes: vec![start],
                cost: 0.0,
                expanded: 0,
                reopened: 0,
            });
        }

        debug!("astar: searching {start} -> {goal}");

        let mut records: HashMap<NodeIndex, Record<G::Connection>> = HashMap::new();
        let mut open: BinaryHeap<OpenEntry> = BinaryHeap::new();
        let mut seq: u64 = 0;

        let f = self.estimate(start_pos, goal_pos);
        records.insert(
            start,
            Record {
                incoming: None,
                g: 0.0,
                f,
                state: State::Open { seq },
            },
        );
        open.push(OpenEntry { f, seq, node: start });
        seq += 1;

        let mut buf: Vec<G::Connection> = Vec::new();
        let mut expanded = 0usize;
        let mut reopened = 0usize;

        let found = 'search: loop {
            let Some(entry) = open.pop() else {
                break 'search false;
            };
            let current = entry.node;

            // Skip entries superseded by a cheaper route or already closed.
            let (current_g, current_f) = match records.get(&current) {
                Some(r) if r.state == (State::Open { seq: entry.seq }) => (r.g, r.f),
                _ => continue,
            };

            if current == goal {
                break 'search true;
            }

            if let Some(max) = self.config.max_expansions {
                if expanded >= max {
                    debug!("astar: budget of {max} expansions exhausted");
                    return Err(PathError::BudgetExhausted { expanded });
                }
            }
            expanded += 1;
            trace!("astar: expand {current} g={current_g} f={current_f}");

            buf.clear();
            self.graph.connections(current, &mut buf);

            for conn in buf.drain(..) {
                let to = conn.to();
                let cost = conn.cost();
                if !cost.is_finite() || cost < 0.0 {
                    return Err(PathError::InvalidCost {
                        from: conn.from(),
                        to,
                        cost,
                    });
                }
                let g = current_g + cost;

                match Relax::decide(records.get(&to), g) {
                    Relax::Skip => continue,
                    Relax::Reopen => {
                        trace!("astar: reopen {to} at g={g}");
                        reopened += 1;
                    }
                    Relax::Discover | Relax::Improve => {}
                }

                let f = g + self.estimate(self.position(to)?, goal_pos);
                records.insert(
                    to,
                    Record {
                        incoming: Some(conn),
                        g,
                        f,
                        state: State::Open { seq },
                    },
                );
                open.push(OpenEntry { f, seq, node: to });
                seq += 1;
            }

            if let Some(r) = records.get_mut(&current) {
                r.state = State::Closed;
            }
        };

        if !found {
            debug!("astar: no path {start} -> {goal} after {expanded} expansions");
            return Err(PathError::NoPath { start, goal });
        }

        let (nodes, cost) = backtrace(&records, start, goal)?;
        debug!(
            "astar: found {start} -> {goal}, {} nodes, cost {cost}, {expanded} expanded, {reopened} reopened",
            nodes.len()
        );
        Ok(Route {
            nodes,
            cost,
            expanded,
            reopened,
        })
    }

    fn position(&self, index: NodeIndex) -> Result<Vec2> {
        self.graph
            .position(index)
            .filter(|_| self.graph.contains(index))
            .ok_or(PathError::InvalidNode(index))
    }

    /// Weighted heuristic estimate from `pos` to `goal`.
    #[inline]
    fn estimate(&self, pos: Vec2, goal: Vec2) -> f32 {
        let d = pos.delta(goal);
        (self.heuristic)(d.x, d.y) * self.config.heuristic_weight
    }
}

/// Walk incoming connections back from `goal` to `start`.
fn backtrace<C: GraphConnection>(
    records: &HashMap<NodeIndex, Record<C>>,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<(Vec<NodeIndex>, f32)> {
    let mut nodes = vec![goal];
    let mut cost = 0.0;
    let mut node = goal;
    while node != start {
        let conn = records
            .get(&node)
            .and_then(|r| r.incoming.as_ref())
            .ok_or(PathError::BrokenChain { node })?;
        let prev = conn.from();
        // A chain longer than the record count must contain a cycle.
        if !records.contains_key(&prev) || nodes.len() > records.len() {
            return Err(PathError::BrokenChain { node });
        }
        cost += conn.cost();
        nodes.push(prev);
        node = prev;
    }
    nodes.reverse();
    Ok((nodes, cost))
}

/// Compute a least-cost path with a one-off [`PathFinder`].
pub fn find_path<'g, G, H>(
    graph: &'g G,
    heuristic: H,
    start: NodeIndex,
    goal: NodeIndex,
) -> Result<Vec<&'g G::Node>>
where
    G: Graph,
    H: Fn(f32, f32) -> f32,
{
    PathFinder::new(graph, heuristic).find_path(start, goal)
}
