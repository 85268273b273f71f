//! Pre-scoring candidate filter.
//!
//! Applied before any ranking happens; every bound is inclusive and
//! caller-configurable.

use serde::{Deserialize, Serialize};

use crate::models::{OptionType, Quote};

/// Which strategy sides a scan considers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Covered calls only.
    Calls,
    /// Cash-secured puts only.
    Puts,
    /// Both sides.
    Both,
}

impl Strategy {
    /// Whether a contract side participates under this strategy.
    #[must_use]
    pub const fn includes(self, side: OptionType) -> bool {
        match self {
            Self::Calls => side.is_call(),
            Self::Puts => !side.is_call(),
            Self::Both => true,
        }
    }
}

/// Scan filter bounds. All bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFilter {
    /// Minimum |delta|.
    pub min_delta: f64,
    /// Maximum |delta|.
    pub max_delta: f64,
    /// Minimum days to expiration.
    pub min_dte: u32,
    /// Maximum days to expiration.
    pub max_dte: u32,
    /// Minimum annualized yield in percent.
    pub min_roi_pct: f64,
    /// Maximum underlying price.
    pub max_underlying_price: f64,
    /// Minimum session volume.
    pub min_volume: u64,
    /// Require a non-zero bid (fillability proxy).
    pub require_bid: bool,
    /// Sides to scan.
    pub strategy: Strategy,
}

impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            min_delta: 0.10,
            max_delta: 0.50,
            min_dte: 7,
            max_dte: 45,
            min_roi_pct: 5.0,
            max_underlying_price: 500.0,
            min_volume: 0,
            require_bid: false,
            strategy: Strategy::Both,
        }
    }
}

impl ScanFilter {
    /// Whether a quote passes given its computed delta and annualized
    /// yield. A missing annualized yield counts as zero.
    #[must_use]
    pub fn admits(&self, quote: &Quote, delta: f64, annualized_yield_pct: Option<f64>) -> bool {
        let d = delta.abs();
        self.strategy.includes(quote.option_type)
            && d >= self.min_delta
            && d <= self.max_delta
            && quote.days_to_expiration >= self.min_dte
            && quote.days_to_expiration <= self.max_dte
            && annualized_yield_pct.unwrap_or(0.0) >= self.min_roi_pct
            && quote.underlying_price <= self.max_underlying_price
            && quote.volume >= self.min_volume
            && (!self.require_bid || quote.bid > 0.0)
    }
}
