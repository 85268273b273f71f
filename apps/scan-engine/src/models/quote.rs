//! Market quote snapshot for a single option contract.
//!
//! A `Quote` is an already-resolved numeric snapshot supplied by an
//! upstream market-data layer. The engine never fetches or caches;
//! every derived value is recomputed from the snapshot it is handed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback implied volatility when a feed omits or mangles the field.
pub const DEFAULT_IMPLIED_VOL: f64 = 0.30;

/// Option contract side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Call option (covered-call leg when sold).
    Call,
    /// Put option (cash-secured-put leg when sold).
    Put,
}

impl OptionType {
    /// True for calls.
    #[must_use]
    pub const fn is_call(self) -> bool {
        matches!(self, Self::Call)
    }

    /// Income-strategy code used by display layers ("CC" / "CSP").
    #[must_use]
    pub const fn strategy_code(self) -> &'static str {
        match self {
            Self::Call => "CC",
            Self::Put => "CSP",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

/// Snapshot of one option contract plus its underlying.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    /// Current underlying price (> 0).
    pub underlying_price: f64,
    /// Contract strike (> 0).
    pub strike: f64,
    /// Contract side.
    pub option_type: OptionType,
    /// Best bid (>= 0).
    pub bid: f64,
    /// Best ask (>= 0).
    pub ask: f64,
    /// Traded volume for the session.
    pub volume: u64,
    /// Open interest.
    pub open_interest: u64,
    /// Implied volatility as an annualized fraction. `None` or invalid
    /// values fall back to [`DEFAULT_IMPLIED_VOL`].
    pub implied_volatility: Option<f64>,
    /// Calendar days to expiration.
    pub days_to_expiration: u32,
}

impl Quote {
    /// Midpoint premium, the basis for every derived metric.
    #[must_use]
    pub fn mid_premium(&self) -> f64 {
        (self.bid + self.ask) / 2.0
    }

    /// Implied volatility with the feed-fallback applied: absent,
    /// non-finite, or non-positive values become [`DEFAULT_IMPLIED_VOL`].
    #[must_use]
    pub fn implied_vol(&self) -> f64 {
        match self.implied_volatility {
            Some(iv) if iv.is_finite() && iv > 0.0 => iv,
            _ => DEFAULT_IMPLIED_VOL,
        }
    }

    /// Time to expiration in years (365-day calendar convention).
    #[must_use]
    pub fn time_to_expiry_years(&self) -> f64 {
        f64::from(self.days_to_expiration) / 365.0
    }
}

/// Calendar days from `today` to `expiration`, clamped at zero for
/// already-expired contracts.
#[must_use]
pub fn days_to_expiration(today: NaiveDate, expiration: NaiveDate) -> u32 {
    let days = (expiration - today).num_days();
    u32::try_from(days).unwrap_or(0)
}
