//! Black-Scholes pricing and Greeks for single-leg equity options.
//!
//! European-exercise, no dividends, constant risk-free rate. Theta is
//! quoted per calendar day and vega per 1-point move in implied vol,
//! matching how income traders read an option chain.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::normal::{norm_cdf, norm_pdf};
use crate::models::OptionType;

/// Errors from pricing computation.
#[derive(Debug, Error)]
pub enum PricingError {
    /// Invalid input parameters.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Error message.
        message: String,
    },
}

/// Configuration for the pricer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricerConfig {
    /// Annualized risk-free rate.
    pub risk_free_rate: f64,
    /// Theoretical prices from the lognormal branch are floored here.
    pub min_tick: f64,
    /// Below this time-to-expiry (years) the contract is priced at
    /// intrinsic value to guard the sqrt(T) divisions.
    pub expiry_epsilon: f64,
}

impl Default for PricerConfig {
    fn default() -> Self {
        Self {
            risk_free_rate: 0.05,
            min_tick: 0.01,
            expiry_epsilon: 1e-4,
        }
    }
}

/// Option price sensitivities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Greeks {
    /// Price change per $1 move in the underlying.
    pub delta: f64,
    /// Delta change per $1 move in the underlying.
    pub gamma: f64,
    /// Value lost per calendar day, all else equal.
    pub theta: f64,
    /// Price change per 1-percentage-point move in implied vol.
    pub vega: f64,
}

/// Theoretical price plus Greeks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingResult {
    /// Theoretical contract price per share.
    pub theoretical_price: f64,
    /// Sensitivities at the same inputs.
    pub greeks: Greeks,
}

/// Black-Scholes d1 parameter.
fn d1(s: f64, k: f64, t: f64, r: f64, sigma: f64) -> f64 {
    ((s / k).ln() + (r + 0.5 * sigma * sigma) * t) / (sigma * t.sqrt())
}

/// Black-Scholes pricer.
#[derive(Debug, Clone, Default)]
pub struct Pricer {
    config: PricerConfig,
}

impl Pricer {
    /// Create a pricer with the given configuration.
    #[must_use]
    pub const fn new(config: PricerConfig) -> Self {
        Self { config }
    }

    /// Risk-free rate this pricer was configured with.
    #[must_use]
    pub const fn risk_free_rate(&self) -> f64 {
        self.config.risk_free_rate
    }

    /// Price an option and compute its Greeks.
    ///
    /// # Arguments
    ///
    /// * `s` - Current underlying price
    /// * `k` - Strike price
    /// * `t` - Time to expiration (years)
    /// * `sigma` - Implied volatility (annualized)
    /// * `kind` - Option side
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] for non-positive `s`, `k`,
    /// or `sigma`, or negative `t`. The formulas never see a zero
    /// divisor: sub-epsilon `t` takes the intrinsic-value branch.
    pub fn price(
        &self,
        s: f64,
        k: f64,
        t: f64,
        sigma: f64,
        kind: OptionType,
    ) -> Result<PricingResult, PricingError> {
        Self::validate_inputs(s, k, t, sigma)?;

        if t < self.config.expiry_epsilon {
            return Ok(Self::intrinsic(s, k, kind));
        }

        let r = self.config.risk_free_rate;
        let sqrt_t = t.sqrt();
        let d1_val = d1(s, k, t, r, sigma);
        let d2_val = d1_val - sigma * sqrt_t;
        let discount = (-r * t).exp();

        let price = match kind {
            OptionType::Call => s * norm_cdf(d1_val) - k * discount * norm_cdf(d2_val),
            OptionType::Put => k * discount * norm_cdf(-d2_val) - s * norm_cdf(-d1_val),
        };

        let delta = match kind {
            OptionType::Call => norm_cdf(d1_val),
            OptionType::Put => norm_cdf(d1_val) - 1.0,
        };
        let gamma = norm_pdf(d1_val) / (s * sigma * sqrt_t);
        let decay = -s * norm_pdf(d1_val) * sigma / (2.0 * sqrt_t);
        let theta = match kind {
            OptionType::Call => (decay - r * k * discount * norm_cdf(d2_val)) / 365.0,
            OptionType::Put => (decay + r * k * discount * norm_cdf(-d2_val)) / 365.0,
        };
        let vega = s * norm_pdf(d1_val) * sqrt_t / 100.0;

        Ok(PricingResult {
            theoretical_price: price.max(self.config.min_tick),
            greeks: Greeks {
                delta,
                gamma,
                theta,
                vega,
            },
        })
    }

    /// Intrinsic value with degenerate Greeks, used at expiry.
    fn intrinsic(s: f64, k: f64, kind: OptionType) -> PricingResult {
        let (price, delta) = match kind {
            OptionType::Call => ((s - k).max(0.0), if s > k { 1.0 } else { 0.0 }),
            OptionType::Put => ((k - s).max(0.0), if s < k { -1.0 } else { 0.0 }),
        };
        PricingResult {
            theoretical_price: price,
            greeks: Greeks {
                delta,
                gamma: 0.0,
                theta: 0.0,
                vega: 0.0,
            },
        }
    }

    fn validate_inputs(s: f64, k: f64, t: f64, sigma: f64) -> Result<(), PricingError> {
        if !s.is_finite() || s <= 0.0 {
            return Err(PricingError::InvalidInput {
                message: format!("Underlying price must be positive, got: {s}"),
            });
        }
        if !k.is_finite() || k <= 0.0 {
            return Err(PricingError::InvalidInput {
                message: format!("Strike price must be positive, got: {k}"),
            });
        }
        if !t.is_finite() || t < 0.0 {
            return Err(PricingError::InvalidInput {
                message: format!("Time to expiration cannot be negative, got: {t}"),
            });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(PricingError::InvalidInput {
                message: format!("Volatility must be positive, got: {sigma}"),
            });
        }
        Ok(())
    }
}
