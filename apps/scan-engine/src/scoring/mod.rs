//! Opportunity scoring.
//!
//! The composite score ranks candidate contracts during a scan: capped
//! yield, IV-vs-HV edge, delta proximity, liquidity, and (when the
//! opposite side of the strike is known) flow skew.

mod config;
mod flow;
mod score;

pub use config::{ScoreConfig, ScoreThresholds};
pub use flow::{SideLiquidity, flow_score};
pub use score::{OpportunityScore, OpportunityScorer, ScoreBreakdown, ScoreInputs, ScoreLabel};
