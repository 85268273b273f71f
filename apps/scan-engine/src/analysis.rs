//! Single-contract deep analysis.
//!
//! Where the scanner ranks many contracts with a cheap pass, the
//! analyzer works one contract all the way through: pricing and Greeks,
//! income metrics, the expiry scenario ladder, a score, and an optional
//! budget-constrained allocation.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::metrics::{ContractMetrics, ScenarioRow, scenario_ladder};
use crate::models::{OptionType, Quote};
use crate::pricing::{Pricer, PricingError, PricingResult};
use crate::scoring::{OpportunityScore, OpportunityScorer, ScoreInputs};
use crate::sizing::{BudgetAllocation, BudgetSizer};

/// Everything the analyzer derives for one contract.
#[derive(Debug, Clone, Serialize)]
pub struct ContractAnalysis {
    /// Theoretical price and Greeks.
    pub pricing: PricingResult,
    /// Income metrics off the mid premium.
    pub metrics: ContractMetrics,
    /// Expiry P&L ladder, worst move first.
    pub scenarios: Vec<ScenarioRow>,
    /// Composite score. Flow is not available in single-contract
    /// analysis, so that component is zero.
    pub score: OpportunityScore,
    /// Budget allocation, when a budget was supplied and it buys at
    /// least part of a position.
    pub allocation: Option<BudgetAllocation>,
}

/// Runs the full per-contract pipeline.
#[derive(Debug, Clone, Default)]
pub struct ContractAnalyzer {
    pricer: Pricer,
    scorer: OpportunityScorer,
    sizer: BudgetSizer,
}

impl ContractAnalyzer {
    /// Create an analyzer from its parts.
    #[must_use]
    pub const fn new(pricer: Pricer, scorer: OpportunityScorer, sizer: BudgetSizer) -> Self {
        Self {
            pricer,
            scorer,
            sizer,
        }
    }

    /// Analyze one short contract.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError`] when the quote's pricing inputs are
    /// invalid (non-positive spot or strike, unusable volatility).
    pub fn analyze(
        &self,
        quote: &Quote,
        historical_vol: Option<f64>,
        budget: Option<Decimal>,
    ) -> Result<ContractAnalysis, PricingError> {
        let iv = quote.implied_vol();
        let pricing = self.pricer.price(
            quote.underlying_price,
            quote.strike,
            quote.time_to_expiry_years(),
            iv,
            quote.option_type,
        )?;

        let premium = quote.mid_premium();
        let metrics = ContractMetrics::compute(
            quote.option_type,
            quote.underlying_price,
            quote.strike,
            premium,
            quote.days_to_expiration,
        );
        let scenarios = scenario_ladder(
            quote.option_type,
            quote.underlying_price,
            quote.strike,
            premium,
        );
        let score = self.scorer.score(&ScoreInputs {
            annualized_yield_pct: metrics.annualized_yield_pct,
            implied_vol: iv,
            historical_vol,
            delta: pricing.greeks.delta,
            volume: quote.volume,
            flow: None,
        });

        let allocation = match quote.option_type {
            OptionType::Call => self.sizer.covered_call(
                budget,
                to_decimal(quote.underlying_price),
                to_decimal(premium),
                to_decimal(metrics.breakeven),
                quote.days_to_expiration,
            ),
            OptionType::Put => self.sizer.cash_secured_put(
                budget,
                to_decimal(quote.strike),
                to_decimal(premium),
                to_decimal(metrics.breakeven),
                quote.days_to_expiration,
            ),
        };

        debug!(
            strategy = quote.option_type.strategy_code(),
            strike = quote.strike,
            score = score.value,
            "analyzed contract"
        );

        Ok(ContractAnalysis {
            pricing,
            metrics,
            scenarios,
            score,
            allocation,
        })
    }
}

/// Lossy f64-to-Decimal bridge for handing analytics output to the
/// money-typed sizer. Non-representable values collapse to zero.
fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64_retain(value).unwrap_or(Decimal::ZERO)
}
