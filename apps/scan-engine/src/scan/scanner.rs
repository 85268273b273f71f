//! Scan orchestration: evaluate, filter, score, rank.
//!
//! A scan is embarrassingly parallel: each candidate is priced and
//! scored on its own, then the survivors are ranked with a stable,
//! deterministic sort. A bad contract is skipped, never fatal.

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::filter::ScanFilter;
use crate::metrics::ContractMetrics;
use crate::models::Quote;
use crate::pricing::{Pricer, PricingResult};
use crate::scoring::{OpportunityScore, OpportunityScorer, ScoreInputs, SideLiquidity, flow_score};

/// One contract submitted to a scan, with the chain context the quote
/// itself does not carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// Underlying ticker, carried through for display.
    pub symbol: String,
    /// Expiration date, when the caller knows it.
    pub expiration: Option<NaiveDate>,
    /// The contract snapshot.
    pub quote: Quote,
    /// Recent realized volatility of the underlying.
    pub historical_vol: Option<f64>,
    /// Same-strike liquidity on the opposite side of the chain,
    /// enabling the flow component.
    pub counterpart: Option<SideLiquidity>,
}

/// A candidate that survived the filter, fully evaluated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    /// Underlying ticker.
    pub symbol: String,
    /// Expiration date, when known.
    pub expiration: Option<NaiveDate>,
    /// The originating snapshot.
    pub quote: Quote,
    /// Theoretical value and Greeks.
    pub pricing: PricingResult,
    /// Derived yield/breakeven/ROI metrics.
    pub metrics: ContractMetrics,
    /// Composite ranking score.
    pub score: OpportunityScore,
}

/// Scan engine: one pricer, one scorer, one filter, applied uniformly
/// to every candidate.
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    pricer: Pricer,
    scorer: OpportunityScorer,
    filter: ScanFilter,
}

impl Scanner {
    /// Create a scanner from its parts.
    #[must_use]
    pub const fn new(pricer: Pricer, scorer: OpportunityScorer, filter: ScanFilter) -> Self {
        Self {
            pricer,
            scorer,
            filter,
        }
    }

    /// Evaluate every candidate in parallel and return the survivors
    /// ranked by score (desc), tie-broken by annualized yield (desc).
    ///
    /// The ranking is stable and deterministic: repeated scans over
    /// unchanged inputs reproduce identical ordering.
    #[must_use]
    pub fn scan(&self, candidates: &[Candidate]) -> Vec<Opportunity> {
        let mut hits: Vec<Opportunity> = candidates
            .par_iter()
            .filter_map(|candidate| self.evaluate(candidate))
            .collect();
        debug!(
            candidates = candidates.len(),
            hits = hits.len(),
            "scan evaluated"
        );
        rank(&mut hits);
        hits
    }

    /// Evaluate one candidate. Returns `None` when the contract fails
    /// validation, sits on the wrong side of the spot for an income
    /// trade, or does not pass the filter.
    #[must_use]
    pub fn evaluate(&self, candidate: &Candidate) -> Option<Opportunity> {
        let quote = &candidate.quote;
        let spot = quote.underlying_price;
        let strike = quote.strike;

        // Income selling takes the OTM side: calls at or above spot,
        // puts at or below.
        let otm_side = if quote.option_type.is_call() {
            strike >= spot
        } else {
            strike <= spot
        };
        if !otm_side {
            return None;
        }

        let pricing = match self.pricer.price(
            spot,
            strike,
            quote.time_to_expiry_years(),
            quote.implied_vol(),
            quote.option_type,
        ) {
            Ok(result) => result,
            Err(error) => {
                debug!(symbol = %candidate.symbol, strike, %error, "candidate skipped");
                return None;
            }
        };

        let premium = quote.mid_premium();
        let metrics = ContractMetrics::compute(
            quote.option_type,
            spot,
            strike,
            premium,
            quote.days_to_expiration,
        );

        if !self
            .filter
            .admits(quote, pricing.greeks.delta, metrics.annualized_yield_pct)
        {
            return None;
        }

        let flow = candidate.counterpart.map(|counterpart| {
            let own = SideLiquidity {
                volume: quote.volume,
                open_interest: quote.open_interest,
            };
            flow_score(own, counterpart, spot, strike)
        });

        let score = self.scorer.score(&ScoreInputs {
            annualized_yield_pct: metrics.annualized_yield_pct,
            implied_vol: quote.implied_vol(),
            historical_vol: candidate.historical_vol,
            delta: pricing.greeks.delta,
            volume: quote.volume,
            flow,
        });

        Some(Opportunity {
            symbol: candidate.symbol.clone(),
            expiration: candidate.expiration,
            quote: quote.clone(),
            pricing,
            metrics,
            score,
        })
    }
}

/// Rank opportunities: score desc, then annualized yield desc. Stable,
/// so equal contracts keep their input order.
pub fn rank(opportunities: &mut [Opportunity]) {
    opportunities.sort_by(|a, b| {
        b.score.value.cmp(&a.score.value).then_with(|| {
            let a_yield = a.metrics.annualized_yield_pct.unwrap_or(0.0);
            let b_yield = b.metrics.annualized_yield_pct.unwrap_or(0.0);
            b_yield.total_cmp(&a_yield)
        })
    });
}
