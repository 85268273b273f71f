// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::match_same_arms,
        clippy::needless_pass_by_value,
        clippy::option_if_let_else,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Scan Engine - Options Income Core Library
//!
//! Analytics core for the Wheelhouse options-income toolkit: prices
//! short premium contracts, measures their income profile, scores and
//! ranks them across a chain, and sizes positions against a budget.
//!
//! # Modules
//!
//! - `models`: Contract side and quote types shared across the crate
//! - `pricing`: Black-Scholes pricing and Greeks over a hand-rolled
//!   normal distribution
//! - `metrics`: Per-contract income metrics and the expiry scenario
//!   ladder
//! - `scoring`: Composite opportunity score with flow skew
//! - `scan`: Filtered, parallel chain scanning and ranking
//! - `sizing`: Budget-constrained position sizing in exact decimal
//! - `analysis`: One-contract deep-dive pipeline
//! - `synthetic`: Seeded demo chains (never for live data paths)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Single-contract analysis pipeline.
pub mod analysis;

/// Income metrics and scenario ladders.
pub mod metrics;

/// Shared contract and quote types.
pub mod models;

/// Black-Scholes pricing and the normal distribution under it.
pub mod pricing;

/// Chain scanning, filtering, and ranking.
pub mod scan;

/// Composite opportunity scoring.
pub mod scoring;

/// Budget-constrained position sizing.
pub mod sizing;

/// Synthetic chain generation for demos and tests.
pub mod synthetic;

// Core re-exports
pub use analysis::{ContractAnalysis, ContractAnalyzer};
pub use metrics::{
    ContractMetrics, ScenarioRow, required_premium_covered_call,
    required_strike_cash_secured_put, scenario_ladder,
};
pub use models::{OptionType, Quote, days_to_expiration};
pub use pricing::{Greeks, Pricer, PricerConfig, PricingError, PricingResult};
pub use scan::{Candidate, Opportunity, ScanFilter, Scanner, Strategy};
pub use scoring::{
    OpportunityScore, OpportunityScorer, ScoreBreakdown, ScoreConfig, ScoreInputs, ScoreLabel,
    SideLiquidity,
};
pub use sizing::{BudgetAllocation, BudgetSizer};
pub use synthetic::{ChainBuilder, DemoUnderlying, VolatilitySmile, demo_watchlist};
