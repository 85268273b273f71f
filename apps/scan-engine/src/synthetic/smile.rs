//! Synthetic volatility smile.
//!
//! Fabricates a per-strike implied vol from an underlying's historical
//! vol: a downside-skewed parabola in log-moneyness plus a little
//! deterministic noise. Demo and test data only; real quotes bring
//! their own implied vol and this module never touches them.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smile shape parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VolatilitySmile {
    /// Linear skew coefficient in log-moneyness.
    pub skew: f64,
    /// Quadratic curvature coefficient.
    pub curvature: f64,
    /// Half-width of the uniform noise band applied to the vol.
    pub noise: f64,
    /// Synthesized vol floor.
    pub min_vol: f64,
    /// Synthesized vol cap.
    pub max_vol: f64,
}

impl Default for VolatilitySmile {
    fn default() -> Self {
        Self {
            skew: 0.3,
            curvature: 1.8,
            noise: 0.025,
            min_vol: 0.08,
            max_vol: 1.5,
        }
    }
}

impl VolatilitySmile {
    /// Synthesize an implied vol for one strike.
    pub fn implied_vol<R: Rng>(
        &self,
        strike: f64,
        spot: f64,
        historical_vol: f64,
        rng: &mut R,
    ) -> f64 {
        let m = (strike / spot).ln();
        let shaped = historical_vol * (1.0 - self.skew * m + self.curvature * m * m);
        let jitter = (rng.random::<f64>() - 0.5) * self.noise;
        (shaped + jitter).clamp(self.min_vol, self.max_vol)
    }
}
