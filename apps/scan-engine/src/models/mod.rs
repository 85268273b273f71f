//! Core data model shared across the engine.

mod quote;

pub use quote::{DEFAULT_IMPLIED_VOL, OptionType, Quote, days_to_expiration};
