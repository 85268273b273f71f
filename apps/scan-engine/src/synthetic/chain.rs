//! Synthetic option-chain builder.
//!
//! Fabricates realistic-looking chains for demos and tests: smile-shaped
//! vols, theoretical prices with a proportional bid/ask spread, and
//! volume/open-interest decaying away from the money. Seeded per
//! symbol+DTE, so the same request always builds the same chain. Never
//! used when genuine market quotes are available.

use chrono::{Days, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::smile::VolatilitySmile;
use crate::models::{OptionType, Quote};
use crate::pricing::Pricer;
use crate::scan::Candidate;
use crate::scoring::SideLiquidity;

/// A demo underlying with the stats the generator needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoUnderlying {
    /// Ticker symbol.
    pub symbol: String,
    /// Company or fund name.
    pub name: String,
    /// Current price.
    pub price: f64,
    /// Recent realized (historical) volatility.
    pub historical_vol: f64,
}

impl DemoUnderlying {
    fn new(symbol: &str, name: &str, price: f64, historical_vol: f64) -> Self {
        Self {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            historical_vol,
        }
    }
}

/// Built-in demo watchlist spanning sleepy ETFs to meme-vol names.
#[must_use]
pub fn demo_watchlist() -> Vec<DemoUnderlying> {
    vec![
        DemoUnderlying::new("AAPL", "Apple", 178.25, 0.22),
        DemoUnderlying::new("MSFT", "Microsoft", 415.50, 0.24),
        DemoUnderlying::new("NVDA", "NVIDIA", 875.40, 0.58),
        DemoUnderlying::new("TSLA", "Tesla", 172.80, 0.68),
        DemoUnderlying::new("META", "Meta", 510.20, 0.38),
        DemoUnderlying::new("AMD", "AMD", 164.85, 0.52),
        DemoUnderlying::new("AMZN", "Amazon", 194.30, 0.32),
        DemoUnderlying::new("GOOGL", "Alphabet", 175.60, 0.28),
        DemoUnderlying::new("SPY", "S&P 500 ETF", 502.70, 0.14),
        DemoUnderlying::new("QQQ", "Nasdaq ETF", 434.80, 0.18),
        DemoUnderlying::new("COIN", "Coinbase", 221.60, 0.82),
        DemoUnderlying::new("PLTR", "Palantir", 24.80, 0.72),
        DemoUnderlying::new("JPM", "JPMorgan", 196.40, 0.23),
        DemoUnderlying::new("GLD", "Gold ETF", 218.40, 0.12),
        DemoUnderlying::new("MSTR", "MicroStrategy", 1580.0, 1.12),
    ]
}

/// Number of strikes on each side of the money.
const STRIKES_EACH_SIDE: i32 = 9;
/// Bid/ask half-spread as a fraction of theoretical price.
const SPREAD_FRACTION: f64 = 0.018;
/// Volume decay rate per strike step away from the money.
const VOLUME_DECAY: f64 = 0.55;
const BASE_VOLUME: f64 = 12_000.0;

/// Builds synthetic chains.
#[derive(Debug, Clone, Default)]
pub struct ChainBuilder {
    pricer: Pricer,
    smile: VolatilitySmile,
}

impl ChainBuilder {
    /// Create a builder with explicit pricer and smile settings.
    #[must_use]
    pub const fn new(pricer: Pricer, smile: VolatilitySmile) -> Self {
        Self { pricer, smile }
    }

    /// Build scan candidates (one call and one put per strike) for an
    /// underlying at a given DTE.
    #[must_use]
    pub fn build_candidates(
        &self,
        underlying: &DemoUnderlying,
        dte: u32,
        today: NaiveDate,
    ) -> Vec<Candidate> {
        let mut rng = StdRng::seed_from_u64(chain_seed(&underlying.symbol, dte));
        let spot = underlying.price;
        let t = f64::from(dte) / 365.0;
        let step = strike_step(spot);
        let expiration = today.checked_add_days(Days::new(u64::from(dte)));

        let mut candidates = Vec::new();
        for i in -STRIKES_EACH_SIDE..=STRIKES_EACH_SIDE {
            let offset = f64::from(i) * step * spot / 100.0 * 2.0;
            let strike = ((spot + offset) / step).round() * step;
            if strike <= 0.0 {
                continue;
            }

            let iv = self
                .smile
                .implied_vol(strike, spot, underlying.historical_vol, &mut rng);
            let Ok(call) = self.pricer.price(spot, strike, t, iv, OptionType::Call) else {
                continue;
            };
            let Ok(put) = self.pricer.price(spot, strike, t, iv, OptionType::Put) else {
                continue;
            };

            let base_volume = (rng.random::<f64>() * BASE_VOLUME
                * (-VOLUME_DECAY * f64::from(i.abs())).exp())
            .floor();
            let call_liq = SideLiquidity {
                volume: (base_volume * (0.6 + rng.random::<f64>() * 0.8)) as u64,
                open_interest: (base_volume * (3.0 + rng.random::<f64>() * 9.0)) as u64,
            };
            let put_liq = SideLiquidity {
                volume: (base_volume * (0.4 + rng.random::<f64>() * 1.2)) as u64,
                open_interest: (base_volume * (2.0 + rng.random::<f64>() * 11.0)) as u64,
            };

            for (side, pricing, liq, counterpart) in [
                (OptionType::Call, &call, call_liq, put_liq),
                (OptionType::Put, &put, put_liq, call_liq),
            ] {
                let half_spread = (pricing.theoretical_price * SPREAD_FRACTION).max(0.01);
                candidates.push(Candidate {
                    symbol: underlying.symbol.clone(),
                    expiration,
                    quote: Quote {
                        underlying_price: spot,
                        strike,
                        option_type: side,
                        bid: (pricing.theoretical_price - half_spread).max(0.01),
                        ask: pricing.theoretical_price + half_spread,
                        volume: liq.volume,
                        open_interest: liq.open_interest,
                        implied_volatility: Some(iv),
                        days_to_expiration: dte,
                    },
                    historical_vol: Some(underlying.historical_vol),
                    counterpart: Some(counterpart),
                });
            }
        }
        candidates
    }
}

/// Strike spacing by price bucket, matching how listed chains space out.
fn strike_step(spot: f64) -> f64 {
    if spot < 50.0 {
        1.0
    } else if spot < 200.0 {
        5.0
    } else if spot < 600.0 {
        10.0
    } else {
        25.0
    }
}

fn chain_seed(symbol: &str, dte: u32) -> u64 {
    let first = u64::from(symbol.as_bytes().first().copied().unwrap_or(b'A'));
    first * 997 + u64::from(dte) * 31
}
