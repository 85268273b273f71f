//! Types for budget-based position sizing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a fixed budget deploys into one short-premium position.
///
/// Money fields use `Decimal`: allocations are shown to users as exact
/// dollar figures and must not pick up float dust.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAllocation {
    /// Contracts the budget affords.
    pub contracts: u32,
    /// Shares bought (covered call) or deliverable on assignment (put).
    pub shares: u32,
    /// Capital tied up: stock cost or reserved collateral.
    pub capital_committed: Decimal,
    /// Budget left after committing capital.
    pub cash_leftover: Decimal,
    /// Premium collected across all contracts.
    pub total_premium: Decimal,
    /// Effective cost basis per share (the breakeven).
    pub cost_basis: Decimal,
    /// Premium income annualized over the committed capital, percent.
    /// `None` when DTE is zero or nothing was committed.
    pub annualized_income_pct: Option<Decimal>,
}
