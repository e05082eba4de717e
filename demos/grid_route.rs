//! Scatter walls over a grid and print the A* route between two corners.
//!
//! Usage: `grid-route [seed]`

use std::collections::HashSet;
use std::process::ExitCode;

use navgraph_core::{Adjacency, NavGraph, NodeIndex};
use navgraph_paths::{HeuristicKind, PathError, PathFinder, SearchConfig};
use rand::{RngExt, SeedableRng};

const WIDTH: usize = 40;
const HEIGHT: usize = 16;
const WALL_DENSITY: f64 = 0.28;

fn index(x: usize, y: usize) -> NodeIndex {
    y * WIDTH + x
}

fn main() -> ExitCode {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(1u64);
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let start = index(0, 0);
    let goal = index(WIDTH - 1, HEIGHT - 1);

    let mut graph = NavGraph::grid(WIDTH, HEIGHT, Adjacency::Eight);
    let mut walls = HashSet::new();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let i = index(x, y);
            if i != start && i != goal && rng.random_bool(WALL_DENSITY) {
                walls.insert(i);
            }
        }
    }
    for &w in &walls {
        if let Err(e) = graph.isolate(w) {
            eprintln!("grid-route: {e}");
            return ExitCode::FAILURE;
        }
    }

    let config = SearchConfig::default().max_expansions(WIDTH * HEIGHT);
    let finder = PathFinder::with_config(&graph, HeuristicKind::Octile.function(), config);
    let route = match finder.search(start, goal) {
        Ok(route) => route,
        Err(PathError::NoPath { .. }) => {
            println!("seed {seed}: the walls cut the grid in two, no route");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("grid-route: {e}");
            return ExitCode::FAILURE;
        }
    };

    let on_route: HashSet<NodeIndex> = route.nodes.iter().copied().collect();
    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| {
                let i = index(x, y);
                match i {
                    _ if i == start => 'S',
                    _ if i == goal => 'G',
                    _ if walls.contains(&i) => '#',
                    _ if on_route.contains(&i) => '*',
                    _ => '.',
                }
            })
            .collect();
        println!("{row}");
    }
    println!(
        "seed {seed}: {} steps, cost {:.2}, {} expanded, {} reopened",
        route.edge_count(),
        route.cost,
        route.expanded,
        route.reopened
    );
    ExitCode::SUCCESS
}
