//! Budget-based position sizing.

mod sizer;
mod types;

pub use sizer::BudgetSizer;
pub use types::BudgetAllocation;
