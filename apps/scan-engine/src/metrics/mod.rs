//! Derived contract metrics and scenario P&L.

mod contract;
mod scenario;

pub use contract::{
    ContractMetrics, required_premium_covered_call, required_strike_cash_secured_put,
};
pub use scenario::{ScenarioRow, scenario_ladder};
