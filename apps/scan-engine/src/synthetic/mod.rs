//! Synthetic market data for demos and integration tests.
//!
//! Everything in here fabricates quotes. Keep it out of any path that
//! handles real market data; callers opt in explicitly by constructing
//! a [`ChainBuilder`].

mod chain;
mod smile;

pub use chain::{demo_watchlist, ChainBuilder, DemoUnderlying};
pub use smile::VolatilitySmile;
