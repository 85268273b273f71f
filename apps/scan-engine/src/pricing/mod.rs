//! Theoretical pricing.
//!
//! Black-Scholes valuation and Greeks on top of a hand-rolled normal
//! distribution approximation. This is the only module that touches the
//! pricing formulas; everything downstream consumes [`PricingResult`].

mod black_scholes;
pub mod normal;

pub use black_scholes::{Greeks, Pricer, PricerConfig, PricingError, PricingResult};
