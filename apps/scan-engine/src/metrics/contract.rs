//! Yield, breakeven, and ROI metrics for short-premium contracts.
//!
//! Covered calls and cash-secured puts are mirror images: the call
//! writer's capital basis is the stock (spot), the put writer's is the
//! cash reserved for assignment (strike). Every percentage here is
//! computed against that basis.

use serde::{Deserialize, Serialize};

use crate::models::OptionType;

/// Derived, read-only metrics for one short contract.
///
/// Degenerate denominators surface as `None`, never as infinities: a
/// zero-DTE contract has no annualized yield, and a deep-ITM contract
/// whose premium covers the whole basis has no meaningful ROI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractMetrics {
    /// Underlying price at which the position breaks even at expiry.
    pub breakeven: f64,
    /// Premium over basis, in percent, for the holding period.
    pub yield_pct: f64,
    /// `yield_pct` annualized over 365 days; `None` at zero DTE.
    pub annualized_yield_pct: Option<f64>,
    /// Return if assigned at expiry; `None` when the net basis is <= 0.
    pub roi_if_assigned_pct: Option<f64>,
    /// How far out of the money the strike sits, in percent of spot.
    /// Positive means farther OTM for both sides.
    pub otm_pct: f64,
    /// Premium collected per calendar day; `None` at zero DTE.
    pub daily_theta: Option<f64>,
    /// Best-case P&L per share if the contract expires worthless (put)
    /// or is assigned at the strike (call).
    pub max_profit_per_share: f64,
    /// Downside cushion from the premium, in percent of spot.
    pub protection_pct: f64,
}

impl ContractMetrics {
    /// Capital basis per share for a short contract: spot for covered
    /// calls, strike for cash-secured puts.
    #[must_use]
    pub fn basis(side: OptionType, spot: f64, strike: f64) -> f64 {
        match side {
            OptionType::Call => spot,
            OptionType::Put => strike,
        }
    }

    /// Derive the full metric set for one contract.
    ///
    /// `spot` and `strike` are assumed positive (the pricer rejects the
    /// rest before metrics are ever computed).
    #[must_use]
    pub fn compute(side: OptionType, spot: f64, strike: f64, premium: f64, dte: u32) -> Self {
        let basis = Self::basis(side, spot, strike);
        let yield_pct = premium / basis * 100.0;

        let annualized_yield_pct = if dte > 0 {
            Some(yield_pct * (365.0 / f64::from(dte)))
        } else {
            None
        };
        let daily_theta = if dte > 0 {
            Some(premium / f64::from(dte))
        } else {
            None
        };

        let (breakeven, otm_pct, max_profit_per_share) = match side {
            OptionType::Call => (
                spot - premium,
                (strike - spot) / spot * 100.0,
                premium + (strike - spot),
            ),
            OptionType::Put => (
                strike - premium,
                (spot - strike) / spot * 100.0,
                premium,
            ),
        };

        // ROI if assigned divides by the net basis (basis - premium);
        // deep ITM the denominator goes non-positive and the figure is
        // meaningless rather than signed-infinite.
        let net_basis = basis - premium;
        let roi_if_assigned_pct = if net_basis > 0.0 {
            let assigned_pnl = match side {
                OptionType::Call => premium + (strike - spot),
                OptionType::Put => premium - (strike - spot),
            };
            Some(assigned_pnl / net_basis * 100.0)
        } else {
            None
        };

        Self {
            breakeven,
            yield_pct,
            annualized_yield_pct,
            roi_if_assigned_pct,
            otm_pct,
            daily_theta,
            max_profit_per_share,
            protection_pct: premium / spot * 100.0,
        }
    }
}

/// Premium a covered call must collect for a given ROI-if-assigned.
///
/// Solves the assigned-return equation for the premium: with net basis
/// `spot - premium`, assigned P&L `premium + (strike - spot)`, and a
/// target return `r`, the premium is `(spot * (r + 1) - strike) / (r + 1)`.
/// Returns `None` when the inputs are non-positive or non-finite, or
/// when no positive premium reaches the target.
#[must_use]
pub fn required_premium_covered_call(
    spot: f64,
    strike: f64,
    desired_roi_pct: f64,
) -> Option<f64> {
    if !spot.is_finite() || !strike.is_finite() || !desired_roi_pct.is_finite() {
        return None;
    }
    if spot <= 0.0 || strike <= 0.0 {
        return None;
    }
    let r = desired_roi_pct / 100.0;
    let premium = (spot * (r + 1.0) - strike) / (r + 1.0);
    (premium.is_finite() && premium > 0.0).then_some(premium)
}

/// Strike at which a cash-secured put hits a given ROI-if-assigned.
///
/// Inverts the assigned-return equation for the strike:
/// `premium + spot / (r + 1)`. Returns `None` when the inputs are
/// non-positive or non-finite, or when the target return is at or below
/// -100% (no strike loses more than the whole basis).
#[must_use]
pub fn required_strike_cash_secured_put(
    spot: f64,
    premium: f64,
    desired_roi_pct: f64,
) -> Option<f64> {
    if !spot.is_finite() || !premium.is_finite() || !desired_roi_pct.is_finite() {
        return None;
    }
    let r = desired_roi_pct / 100.0;
    if spot <= 0.0 || premium <= 0.0 || r <= -1.0 {
        return None;
    }
    let strike = premium + spot / (r + 1.0);
    (strike > 0.0).then_some(strike)
}
