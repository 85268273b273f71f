//! Option-flow skew scoring.
//!
//! Compares volume/open-interest ratios for the scored contract against
//! the same-strike contract on the opposite side of the chain. Unusual
//! one-sided activity is a positioning signal; the contribution is
//! bounded either way.

use serde::{Deserialize, Serialize};

/// Volume and open interest for one side of a strike.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SideLiquidity {
    /// Session volume.
    pub volume: u64,
    /// Open interest.
    pub open_interest: u64,
}

/// Score unusual positioning skew between a contract and its same-strike
/// counterpart. Positive favors the scored side. Bounded to [-100, 100].
#[must_use]
pub fn flow_score(own: SideLiquidity, counterpart: SideLiquidity, spot: f64, strike: f64) -> f64 {
    let mut score: f64 = 0.0;

    // Open interest of zero would blow up the ratio; treat as 1.
    let own_oi = own.open_interest.max(1) as f64;
    let other_oi = counterpart.open_interest.max(1) as f64;
    let own_vol = own.volume as f64;
    let other_vol = counterpart.volume as f64;

    let vol_oi = own_vol / own_oi;
    let other_vol_oi = other_vol / other_oi;

    if vol_oi > 2.0 {
        score += 30.0;
    } else if vol_oi > 1.5 {
        score += 15.0;
    }

    if other_vol_oi > 2.0 {
        score -= 30.0;
    } else if other_vol_oi > 1.5 {
        score -= 15.0;
    }

    if own_oi > other_oi * 2.0 {
        score += 20.0;
    } else if own_oi > other_oi * 1.5 {
        score += 10.0;
    }

    if other_oi > own_oi * 2.0 {
        score -= 20.0;
    } else if other_oi > own_oi * 1.5 {
        score -= 10.0;
    }

    // Near the money, raw volume dominance is worth a nudge.
    let moneyness = strike / spot;
    if (moneyness - 1.0).abs() < 0.05 {
        if own_vol > other_vol {
            score += 10.0;
        } else if other_vol > own_vol {
            score -= 10.0;
        }
    }

    score.clamp(-100.0, 100.0)
}
