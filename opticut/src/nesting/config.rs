use serde::{Deserialize, Serialize};

/// Configuration of the [`NestingEngine`](crate::nesting::NestingEngine)
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct EngineConfig {
    /// Rule used to choose between the free regions in which an item fits
    #[serde(default)]
    pub fit_heuristic: FitHeuristic,
}

/// Scoring rule for choosing a free region. Ties are always resolved in favour of the region found first.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FitHeuristic {
    /// Smallest free region that fits, preserving larger regions for later items
    #[default]
    BestAreaFit,
    /// Free region leaving the smallest leftover along its shorter side
    BestShortSideFit,
    /// Lowest, then leftmost free region
    BottomLeft,
}
