//! Scenario P&L ladders.
//!
//! A fixed, ordered set of spot-at-expiry points per strategy, laid out
//! the way the scenario table renders them: downside moves first, then
//! flat/strike, then upside. The exact percentages are a display
//! convention; rows are recomputed fresh on every call.

use serde::{Deserialize, Serialize};

use super::contract::ContractMetrics;
use crate::models::OptionType;

/// P&L at one hypothetical spot-at-expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioRow {
    /// Display label for the move ("-10%", "Flat", "Strike", ...).
    pub label: String,
    /// Underlying price the row assumes at expiry.
    pub spot_at_expiry: f64,
    /// P&L per share for the short position.
    pub profit_loss_per_share: f64,
    /// P&L as a percentage of the strategy basis; `None` if the basis
    /// is degenerate.
    pub profit_loss_pct: Option<f64>,
}

/// Spot multipliers below and above the pivot points.
const DOWN_MOVES: [(&str, f64); 4] = [("-30%", 0.70), ("-20%", 0.80), ("-10%", 0.90), ("-5%", 0.95)];
const UP_MOVES: [(&str, f64); 3] = [("+10%", 1.10), ("+20%", 1.20), ("+30%", 1.30)];

/// Generate the scenario ladder for one short contract.
///
/// Calls order the pivots flat, +5%, strike (assignment happens above);
/// puts order them strike, flat, +5% (assignment happens below).
#[must_use]
pub fn scenario_ladder(
    side: OptionType,
    spot: f64,
    strike: f64,
    premium: f64,
) -> Vec<ScenarioRow> {
    let pivots: [(&str, f64); 3] = match side {
        OptionType::Call => [("Flat", spot), ("+5%", spot * 1.05), ("Strike", strike)],
        OptionType::Put => [("Strike", strike), ("Flat", spot), ("+5%", spot * 1.05)],
    };

    let basis = ContractMetrics::basis(side, spot, strike);
    let max_profit = premium + (strike - spot);

    DOWN_MOVES
        .iter()
        .map(|&(label, mult)| (label, spot * mult))
        .chain(pivots)
        .chain(UP_MOVES.iter().map(|&(label, mult)| (label, spot * mult)))
        .map(|(label, spot_at_expiry)| {
            let profit_loss_per_share = match side {
                OptionType::Call => max_profit.min(premium + (spot_at_expiry - spot)),
                OptionType::Put => premium - (strike - spot_at_expiry).max(0.0),
            };
            let profit_loss_pct = if basis.abs() > 1e-9 {
                Some(profit_loss_per_share / basis * 100.0)
            } else {
                None
            };
            ScenarioRow {
                label: label.to_string(),
                spot_at_expiry,
                profit_loss_per_share,
                profit_loss_pct,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_ladder_order_is_fixed() {
        let call_rows = scenario_ladder(OptionType::Call, 100.0, 105.0, 2.50);
        let call_labels: Vec<&str> = call_rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            call_labels,
            ["-30%", "-20%", "-10%", "-5%", "Flat", "+5%", "Strike", "+10%", "+20%", "+30%"]
        );

        let put_rows = scenario_ladder(OptionType::Put, 100.0, 95.0, 1.80);
        let put_labels: Vec<&str> = put_rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            put_labels,
            ["-30%", "-20%", "-10%", "-5%", "Strike", "Flat", "+5%", "+10%", "+20%", "+30%"]
        );
    }

    #[test]
    fn test_put_at_strike_keeps_full_premium() {
        let rows = scenario_ladder(OptionType::Put, 100.0, 95.0, 1.80);
        let at_strike = rows.iter().find(|r| r.label == "Strike").unwrap();
        assert!(approx_eq(at_strike.profit_loss_per_share, 1.80, 1e-9));
    }

    #[test]
    fn test_put_below_strike_loses() {
        let rows = scenario_ladder(OptionType::Put, 100.0, 95.0, 1.80);
        let down30 = &rows[0];
        // Spot 70 at expiry: premium 1.80 - (95 - 70) = -23.20 per share.
        assert!(approx_eq(down30.profit_loss_per_share, -23.20, 1e-9));
        // Percentage is against the strike basis for puts.
        assert!(approx_eq(down30.profit_loss_pct.unwrap(), -23.20 / 95.0 * 100.0, 1e-9));
    }

    #[test]
    fn test_call_capped_at_max_profit() {
        let rows = scenario_ladder(OptionType::Call, 100.0, 105.0, 2.50);
        let max_profit = 2.50 + 5.0;
        for label in ["Strike", "+10%", "+20%", "+30%"] {
            let row = rows.iter().find(|r| r.label == label).unwrap();
            assert!(row.profit_loss_per_share <= max_profit + 1e-9);
        }
        let up30 = rows.iter().find(|r| r.label == "+30%").unwrap();
        assert!(approx_eq(up30.profit_loss_per_share, max_profit, 1e-9));
        // Percentage is against the spot basis for calls.
        assert!(approx_eq(up30.profit_loss_pct.unwrap(), 7.5, 1e-9));
    }

    #[test]
    fn test_call_downside_loses_spot_move_less_premium() {
        let rows = scenario_ladder(OptionType::Call, 100.0, 105.0, 2.50);
        let down10 = rows.iter().find(|r| r.label == "-10%").unwrap();
        assert!(approx_eq(down10.profit_loss_per_share, 2.50 - 10.0, 1e-9));
    }

    #[test]
    fn test_recomputation_is_identical() {
        let a = scenario_ladder(OptionType::Put, 172.80, 165.0, 3.40);
        let b = scenario_ladder(OptionType::Put, 172.80, 165.0, 3.40);
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.label, y.label);
            assert_eq!(x.spot_at_expiry, y.spot_at_expiry);
            assert_eq!(x.profit_loss_per_share, y.profit_loss_per_share);
        }
    }
}
