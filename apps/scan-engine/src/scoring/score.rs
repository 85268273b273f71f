//! Composite opportunity scoring.
//!
//! Sums weighted, independently clamped components into a single integer
//! in [-100, 100], then maps it to a discrete label. Weights and cutoffs
//! come from [`ScoreConfig`]; the structure here never changes when the
//! constants are tuned.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::config::ScoreConfig;

/// Discrete trading signal derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreLabel {
    /// Score at or above the strong-buy cutoff.
    StrongBuy,
    /// Score at or above the buy cutoff.
    Buy,
    /// Score between the buy and sell cutoffs.
    Neutral,
    /// Score at or below the sell cutoff.
    Sell,
    /// Score at or below the strong-sell cutoff.
    StrongSell,
}

impl fmt::Display for ScoreLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrongBuy => write!(f, "STRONG BUY"),
            Self::Buy => write!(f, "BUY"),
            Self::Neutral => write!(f, "NEUTRAL"),
            Self::Sell => write!(f, "SELL"),
            Self::StrongSell => write!(f, "STRONG SELL"),
        }
    }
}

/// Per-component contributions, useful for display and tuning.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Capped, weighted annualized yield.
    pub yield_component: f64,
    /// Weighted IV-richer-than-HV edge.
    pub vol_edge_component: f64,
    /// Weighted proximity to the ideal selling delta.
    pub delta_component: f64,
    /// Weighted, saturating traded-volume term.
    pub liquidity_component: f64,
    /// Weighted flow skew (zero outside a scan).
    pub flow_component: f64,
}

/// Composite score with its label and breakdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityScore {
    /// Clamped integer score in [-100, 100].
    pub value: i32,
    /// Discrete signal for the score.
    pub label: ScoreLabel,
    /// Component contributions before the final clamp.
    pub breakdown: ScoreBreakdown,
}

/// Inputs the scorer consumes, already derived from a quote.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    /// Annualized yield in percent; `None` collapses the term to zero.
    pub annualized_yield_pct: Option<f64>,
    /// Implied volatility of the contract.
    pub implied_vol: f64,
    /// Recent realized volatility of the underlying, when known.
    pub historical_vol: Option<f64>,
    /// Black-Scholes delta (sign kept; the scorer uses magnitude).
    pub delta: f64,
    /// Session volume.
    pub volume: u64,
    /// Flow skew in [-100, 100], present only in the scan variant.
    pub flow: Option<f64>,
}

/// Opportunity scorer.
#[derive(Debug, Clone, Default)]
pub struct OpportunityScorer {
    config: ScoreConfig,
}

impl OpportunityScorer {
    /// Create a scorer with the given configuration.
    #[must_use]
    pub const fn new(config: ScoreConfig) -> Self {
        Self { config }
    }

    /// Score one contract.
    #[must_use]
    pub fn score(&self, inputs: &ScoreInputs) -> OpportunityScore {
        let cfg = &self.config;

        let yield_component = inputs
            .annualized_yield_pct
            .unwrap_or(0.0)
            .min(cfg.yield_cap_pct)
            * cfg.yield_weight;

        let vol_edge_component = match inputs.historical_vol {
            Some(hv) if hv > 0.0 => {
                let edge = inputs.implied_vol / hv - 1.0;
                edge.clamp(-cfg.vol_edge_clamp, cfg.vol_edge_clamp) * cfg.vol_edge_weight
            }
            _ => 0.0,
        };

        let delta_distance = (inputs.delta.abs() - cfg.ideal_delta).abs();
        let delta_component = (1.0 - delta_distance / cfg.delta_width) * cfg.delta_weight;

        let liquidity_component =
            (inputs.volume as f64 / cfg.reference_volume.max(1) as f64).min(1.0)
                * cfg.liquidity_weight;

        let flow_component = inputs.flow.unwrap_or(0.0) * cfg.flow_weight;

        let total = yield_component
            + vol_edge_component
            + delta_component
            + liquidity_component
            + flow_component;
        let value = total.round().clamp(-100.0, 100.0) as i32;

        OpportunityScore {
            value,
            label: self.label_for(value),
            breakdown: ScoreBreakdown {
                yield_component,
                vol_edge_component,
                delta_component,
                liquidity_component,
                flow_component,
            },
        }
    }

    /// Map a clamped score to its discrete label.
    #[must_use]
    pub fn label_for(&self, value: i32) -> ScoreLabel {
        let t = &self.config.thresholds;
        if value >= t.strong_buy {
            ScoreLabel::StrongBuy
        } else if value >= t.buy {
            ScoreLabel::Buy
        } else if value <= t.strong_sell {
            ScoreLabel::StrongSell
        } else if value <= t.sell {
            ScoreLabel::Sell
        } else {
            ScoreLabel::Neutral
        }
    }
}
