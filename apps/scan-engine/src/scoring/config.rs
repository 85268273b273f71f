//! Scoring configuration.
//!
//! The weights and cutoffs here are heuristic, not derived. They are
//! named configuration precisely so they can be tuned and tested
//! independently of the scoring algorithm's structure.

use serde::{Deserialize, Serialize};

/// Cutoffs mapping a composite score to a discrete label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreThresholds {
    /// Score at or above this is a strong buy.
    pub strong_buy: i32,
    /// Score at or above this is a buy.
    pub buy: i32,
    /// Score at or below this is a sell.
    pub sell: i32,
    /// Score at or below this is a strong sell.
    pub strong_sell: i32,
}

impl Default for ScoreThresholds {
    fn default() -> Self {
        Self {
            strong_buy: 30,
            buy: 10,
            sell: -10,
            strong_sell: -30,
        }
    }
}

/// Weights and normalization constants for the opportunity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Weight on the capped annualized yield.
    pub yield_weight: f64,
    /// Annualized yield (percent) above which extra yield stops adding
    /// score; bounds the influence of illiquid outliers.
    pub yield_cap_pct: f64,
    /// Weight on the IV/HV edge.
    pub vol_edge_weight: f64,
    /// The IV/HV - 1 edge is clamped to +/- this before weighting.
    pub vol_edge_clamp: f64,
    /// Delta sweet spot for income selling.
    pub ideal_delta: f64,
    /// Normalization width for distance from the ideal delta.
    pub delta_width: f64,
    /// Weight on delta proximity.
    pub delta_weight: f64,
    /// Weight on the liquidity term.
    pub liquidity_weight: f64,
    /// Volume at which the liquidity term saturates.
    pub reference_volume: u64,
    /// Weight on the flow score (scan variant only).
    pub flow_weight: f64,
    /// Label cutoffs.
    pub thresholds: ScoreThresholds,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            yield_weight: 0.5,
            yield_cap_pct: 50.0,
            vol_edge_weight: 30.0,
            vol_edge_clamp: 1.0,
            ideal_delta: 0.30,
            delta_width: 0.5,
            delta_weight: 15.0,
            liquidity_weight: 10.0,
            reference_volume: 500,
            flow_weight: 0.3,
            thresholds: ScoreThresholds::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_round_trips_through_json() {
        let config = ScoreConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ScoreConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.yield_weight, config.yield_weight);
        assert_eq!(back.reference_volume, config.reference_volume);
        assert_eq!(back.thresholds.strong_buy, config.thresholds.strong_buy);
    }

    #[test]
    fn test_thresholds_are_ordered() {
        let t = ScoreThresholds::default();
        assert!(t.strong_buy > t.buy);
        assert!(t.buy > t.sell);
        assert!(t.sell > t.strong_sell);
    }
}
