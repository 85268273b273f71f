//! Budget-to-contracts sizing for covered calls and cash-secured puts.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::BudgetAllocation;

const DAYS_PER_YEAR: u32 = 365;

/// Position sizer converting a cash budget into whole contracts.
///
/// A missing or non-positive budget is a valid "not specified" state:
/// every method returns `None` for it rather than an error.
#[derive(Debug, Clone)]
pub struct BudgetSizer {
    /// Shares per contract (100 for standard equity options).
    multiplier: u32,
}

impl Default for BudgetSizer {
    fn default() -> Self {
        Self { multiplier: 100 }
    }
}

impl BudgetSizer {
    /// Create a sizer with a non-standard contract multiplier.
    #[must_use]
    pub const fn with_multiplier(multiplier: u32) -> Self {
        Self { multiplier }
    }

    /// Size a covered call: buy round lots of stock, sell one call per
    /// lot. Capital committed is the stock cost.
    ///
    /// Returns `None` when no budget was given or the share count does
    /// not fit a `u32`; a refusal, never a silently truncated answer.
    #[must_use]
    pub fn covered_call(
        &self,
        budget: Option<Decimal>,
        spot: Decimal,
        premium: Decimal,
        breakeven: Decimal,
        dte: u32,
    ) -> Option<BudgetAllocation> {
        let budget = positive_budget(budget)?;
        if spot <= Decimal::ZERO {
            return None;
        }

        let shares_affordable = (budget / spot).floor().to_u32()?;
        let contracts = shares_affordable / self.multiplier;
        let shares = contracts * self.multiplier;
        let capital_committed = Decimal::from(shares) * spot;
        let total_premium = Decimal::from(shares) * premium;

        Some(BudgetAllocation {
            contracts,
            shares,
            capital_committed,
            cash_leftover: budget - capital_committed,
            total_premium,
            cost_basis: breakeven,
            annualized_income_pct: annualized_income(total_premium, capital_committed, dte),
        })
    }

    /// Size a cash-secured put: reserve strike x multiplier per
    /// contract. Capital committed is the reserved collateral.
    ///
    /// Returns `None` when no budget was given or the contract or share
    /// count does not fit a `u32`; a refusal, never a silently
    /// truncated answer.
    #[must_use]
    pub fn cash_secured_put(
        &self,
        budget: Option<Decimal>,
        strike: Decimal,
        premium: Decimal,
        breakeven: Decimal,
        dte: u32,
    ) -> Option<BudgetAllocation> {
        let budget = positive_budget(budget)?;
        if strike <= Decimal::ZERO {
            return None;
        }

        let collateral_per_contract = strike * Decimal::from(self.multiplier);
        let contracts = (budget / collateral_per_contract).floor().to_u32()?;
        let shares = contracts.checked_mul(self.multiplier)?;
        let capital_committed = Decimal::from(contracts) * collateral_per_contract;
        let total_premium = Decimal::from(shares) * premium;

        Some(BudgetAllocation {
            contracts,
            shares,
            capital_committed,
            cash_leftover: budget - capital_committed,
            total_premium,
            cost_basis: breakeven,
            annualized_income_pct: annualized_income(total_premium, capital_committed, dte),
        })
    }
}

fn positive_budget(budget: Option<Decimal>) -> Option<Decimal> {
    budget.filter(|b| *b > Decimal::ZERO)
}

fn annualized_income(total_premium: Decimal, capital: Decimal, dte: u32) -> Option<Decimal> {
    if dte == 0 || capital <= Decimal::ZERO {
        return None;
    }
    let annual_premium = total_premium * Decimal::from(DAYS_PER_YEAR) / Decimal::from(dte);
    Some(annual_premium / capital * Decimal::from(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_covered_call_example() {
        // Budget 10000 at spot 50: 200 shares, 2 contracts, no leftover.
        let sizer = BudgetSizer::default();
        let alloc = sizer
            .covered_call(Some(dec!(10000)), dec!(50), dec!(1.25), dec!(48.75), 30)
            .unwrap();
        assert_eq!(alloc.contracts, 2);
        assert_eq!(alloc.shares, 200);
        assert_eq!(alloc.capital_committed, dec!(10000));
        assert_eq!(alloc.cash_leftover, dec!(0));
        assert_eq!(alloc.total_premium, dec!(250));
        assert_eq!(alloc.cost_basis, dec!(48.75));
    }

    #[test]
    fn test_covered_call_leftover_cash() {
        let sizer = BudgetSizer::default();
        let alloc = sizer
            .covered_call(Some(dec!(12500)), dec!(50), dec!(1.25), dec!(48.75), 30)
            .unwrap();
        // 250 shares affordable, but only 2 whole contracts.
        assert_eq!(alloc.contracts, 2);
        assert_eq!(alloc.shares, 200);
        assert_eq!(alloc.cash_leftover, dec!(2500));
    }

    #[test]
    fn test_cash_secured_put_collateral() {
        let sizer = BudgetSizer::default();
        let alloc = sizer
            .cash_secured_put(Some(dec!(20000)), dec!(95), dec!(1.80), dec!(93.20), 30)
            .unwrap();
        // 9500 collateral per contract: 2 contracts, 1000 leftover.
        assert_eq!(alloc.contracts, 2);
        assert_eq!(alloc.shares, 200);
        assert_eq!(alloc.capital_committed, dec!(19000));
        assert_eq!(alloc.cash_leftover, dec!(1000));
        assert_eq!(alloc.total_premium, dec!(360));
    }

    #[test]
    fn test_missing_budget_is_none_for_both() {
        let sizer = BudgetSizer::default();
        for budget in [None, Some(dec!(0)), Some(dec!(-500))] {
            assert!(
                sizer
                    .covered_call(budget, dec!(50), dec!(1.25), dec!(48.75), 30)
                    .is_none()
            );
            assert!(
                sizer
                    .cash_secured_put(budget, dec!(95), dec!(1.80), dec!(93.20), 30)
                    .is_none()
            );
        }
    }

    #[test]
    fn test_budget_below_one_contract() {
        let sizer = BudgetSizer::default();
        let alloc = sizer
            .cash_secured_put(Some(dec!(5000)), dec!(95), dec!(1.80), dec!(93.20), 30)
            .unwrap();
        assert_eq!(alloc.contracts, 0);
        assert_eq!(alloc.capital_committed, dec!(0));
        assert_eq!(alloc.cash_leftover, dec!(5000));
        // Nothing committed: annualized income is undefined, not zero.
        assert!(alloc.annualized_income_pct.is_none());
    }

    #[test]
    fn test_annualized_income() {
        let sizer = BudgetSizer::default();
        let alloc = sizer
            .cash_secured_put(Some(dec!(9500)), dec!(95), dec!(1.80), dec!(93.20), 30)
            .unwrap();
        // 180 premium on 9500 over 30 days: 180*365/30/9500*100 = 23.05%.
        let ann = alloc.annualized_income_pct.unwrap();
        assert!((ann - dec!(23.052631578947368421052631600)).abs() < dec!(0.001));
    }

    #[test]
    fn test_zero_dte_income_is_none() {
        let sizer = BudgetSizer::default();
        let alloc = sizer
            .cash_secured_put(Some(dec!(9500)), dec!(95), dec!(1.80), dec!(93.20), 0)
            .unwrap();
        assert!(alloc.annualized_income_pct.is_none());
    }

    #[test]
    fn test_oversized_budget_refused_not_truncated() {
        // A budget buying more shares than a u32 holds is refused
        // outright; it must never size to zero contracts with the full
        // budget reported as leftover.
        let sizer = BudgetSizer::default();
        assert!(
            sizer
                .covered_call(
                    Some(dec!(1000000000000)),
                    dec!(0.05),
                    dec!(0.01),
                    dec!(0.04),
                    30
                )
                .is_none()
        );
        assert!(
            sizer
                .cash_secured_put(
                    Some(dec!(1000000000000)),
                    dec!(0.05),
                    dec!(0.01),
                    dec!(0.04),
                    30
                )
                .is_none()
        );
    }

    #[test]
    fn test_put_share_count_overflow_refused() {
        // Contracts fit a u32 but shares (contracts x 100) would not.
        let sizer = BudgetSizer::default();
        assert!(
            sizer
                .cash_secured_put(
                    Some(dec!(100000000000)),
                    dec!(1),
                    dec!(0.01),
                    dec!(0.99),
                    30
                )
                .is_none()
        );
    }

    #[test]
    fn test_custom_multiplier() {
        let sizer = BudgetSizer::with_multiplier(10);
        let alloc = sizer
            .covered_call(Some(dec!(1000)), dec!(50), dec!(1.25), dec!(48.75), 30)
            .unwrap();
        assert_eq!(alloc.contracts, 2);
        assert_eq!(alloc.shares, 20);
    }
}
