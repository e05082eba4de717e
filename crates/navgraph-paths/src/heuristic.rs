//! Built-in heuristics.
//!
//! Every heuristic takes the absolute per-axis displacement `(dx, dy)`
//! between a node and the goal and returns an estimated remaining cost.
//! Which one is admissible depends on the graph's cost metric.

use std::f32::consts::SQRT_2;

/// Plain function heuristic. Any `Fn(f32, f32) -> f32` is accepted by the
/// finder; this alias names the common case.
pub type Heuristic = fn(f32, f32) -> f32;

/// Always zero. Turns A* into Dijkstra's algorithm.
#[inline]
pub fn zero(_dx: f32, _dy: f32) -> f32 {
    0.0
}

/// Manhattan (L1) distance.
#[inline]
pub fn manhattan(dx: f32, dy: f32) -> f32 {
    dx + dy
}

/// Euclidean (L2) distance.
#[inline]
pub fn euclidean(dx: f32, dy: f32) -> f32 {
    (dx * dx + dy * dy).sqrt()
}

/// Chebyshev (L∞) distance.
#[inline]
pub fn chebyshev(dx: f32, dy: f32) -> f32 {
    dx.max(dy)
}

/// Octile distance: straight moves cost 1, diagonal moves `SQRT_2`.
#[inline]
pub fn octile(dx: f32, dy: f32) -> f32 {
    let f = SQRT_2 - 1.0;
    if dx < dy { f * dx + dy } else { f * dy + dx }
}

/// Named selection of a built-in heuristic, for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum HeuristicKind {
    Zero,
    Manhattan,
    #[default]
    Euclidean,
    Chebyshev,
    Octile,
}

impl HeuristicKind {
    /// The heuristic function this kind names.
    pub fn function(self) -> Heuristic {
        match self {
            Self::Zero => zero,
            Self::Manhattan => manhattan,
            Self::Euclidean => euclidean,
            Self::Chebyshev => chebyshev,
            Self::Octile => octile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values() {
        assert_eq!(zero(3.0, 4.0), 0.0);
        assert_eq!(manhattan(3.0, 4.0), 7.0);
        assert_eq!(euclidean(3.0, 4.0), 5.0);
        assert_eq!(chebyshev(3.0, 4.0), 4.0);
        let o = octile(3.0, 4.0);
        assert!((o - (3.0 * SQRT_2 + 1.0)).abs() < 1e-5);
        assert_eq!(octile(4.0, 3.0), o);
    }

    #[test]
    fn ordering_between_metrics() {
        // chebyshev <= octile <= manhattan, euclidean <= octile
        for &(dx, dy) in &[(0.0, 0.0), (1.0, 0.0), (2.0, 5.0), (7.5, 7.5)] {
            assert!(chebyshev(dx, dy) <= octile(dx, dy) + 1e-5);
            assert!(euclidean(dx, dy) <= octile(dx, dy) + 1e-5);
            assert!(octile(dx, dy) <= manhattan(dx, dy) + 1e-5);
        }
    }

    #[test]
    fn kind_maps_to_function() {
        assert_eq!(HeuristicKind::Zero.function()(1.0, 1.0), 0.0);
        assert_eq!(HeuristicKind::Manhattan.function()(1.0, 2.0), 3.0);
        assert_eq!(HeuristicKind::Chebyshev.function()(1.0, 2.0), 2.0);
        assert_eq!(HeuristicKind::default(), HeuristicKind::Euclidean);
    }
}
