use crate::error::{PathError, Result};

/// Tunables for a [`PathFinder`](crate::PathFinder).
///
/// The defaults give a plain, unbounded A* search.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Maximum number of node expansions before the search gives up with
    /// [`PathError::BudgetExhausted`]. `None` means unbounded.
    pub max_expansions: Option<usize>,
    /// Multiplier applied to every heuristic estimate. Values above 1 trade
    /// optimality for fewer expansions.
    pub heuristic_weight: f32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: None,
            heuristic_weight: 1.0,
        }
    }
}

impl SearchConfig {
    /// Builder: cap the number of expansions.
    #[must_use]
    pub fn max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Builder: remove any expansion cap.
    #[must_use]
    pub fn unbounded(mut self) -> Self {
        self.max_expansions = None;
        self
    }

    /// Builder: set the heuristic weight.
    #[must_use]
    pub fn heuristic_weight(mut self, weight: f32) -> Self {
        self.heuristic_weight = weight;
        self
    }

    /// Check that the configuration can drive a search.
    pub fn validate(&self) -> Result<()> {
        let w = self.heuristic_weight;
        if !w.is_finite() || w < 0.0 {
            return Err(PathError::InvalidWeight(w));
        }
        Ok(())
    }
}
