//! Candidate scanning and ranking.

mod filter;
mod scanner;

pub use filter::{ScanFilter, Strategy};
pub use scanner::{Candidate, Opportunity, Scanner, rank};
