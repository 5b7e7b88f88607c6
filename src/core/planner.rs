//! Hedge planning for configured bets
//!
//! Ties the pure math to the caller's world: picks the hedge book (always the
//! opposite of where the original bet sits), looks up the bankroll available
//! there, and runs both the balanced hedge and the balance-clamped arbitrage
//! assessment. Also hosts the custom-hedge sweep used to explore unbalanced
//! allocations.

use serde::{Deserialize, Serialize};

use crate::config::{BankrollConfig, BetConfig, Book};
use crate::core::arbitrage::{self, ArbitrageAssessment};
use crate::core::hedge::{compute_hedge, profit_split, HedgeResult};

/// A fully evaluated hedge recommendation for one configured bet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HedgePlan {
    /// Identifier of the bet this plan covers
    pub bet_id: String,
    /// Book the hedge bet should be placed on
    pub hedge_book: Book,
    /// Bankroll available on the hedge book
    pub available_balance: f64,
    /// Balanced hedge stake and profits (unclamped)
    pub result: HedgeResult,
    /// Arbitrage verdict with the stake clamped to the bankroll
    pub arbitrage: ArbitrageAssessment,
}

/// One point of a custom-hedge profit sweep
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SweepPoint {
    /// Hedge stake evaluated at this point
    pub hedge_stake: f64,
    /// Net profit if side A wins
    pub profit_if_a: f64,
    /// Net profit if side B wins
    pub profit_if_b: f64,
}

/// Plan the hedge for a configured bet against the current bankrolls
///
/// Pure: reads the bet and bankrolls, writes nothing.
#[must_use]
pub fn plan_bet(bet: &BetConfig, bankrolls: &BankrollConfig) -> HedgePlan {
    let hedge_book = bet.deposit_book.other();
    let available_balance = bankrolls.balance(hedge_book);

    HedgePlan {
        bet_id: bet.id.clone(),
        hedge_book,
        available_balance,
        result: compute_hedge(bet.stake, bet.odds_a, bet.odds_b),
        arbitrage: arbitrage::assess(bet.stake, bet.odds_a, bet.odds_b, available_balance),
    }
}

/// Evaluate profits across a range of caller-chosen hedge stakes
///
/// Walks `steps` evenly spaced stakes from 0 to `max_hedge` inclusive and
/// returns the profit pair at each. Lets a caller see how shifting money
/// between the two outcomes trades profit on one side for the other.
///
/// Returns an empty sweep when `max_hedge` is not positive or `steps` is zero.
#[must_use]
pub fn sweep_custom_hedge(
    stake_a: f64,
    odds_a: f64,
    odds_b: f64,
    max_hedge: f64,
    steps: usize,
) -> Vec<SweepPoint> {
    if max_hedge <= 0.0 || steps == 0 {
        return Vec::new();
    }

    (0..=steps)
        .map(|i| {
            let hedge_stake = max_hedge * i as f64 / steps as f64;
            let (profit_if_a, profit_if_b) = profit_split(stake_a, odds_a, odds_b, hedge_stake);
            SweepPoint {
                hedge_stake,
                profit_if_a,
                profit_if_b,
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    fn bankrolls() -> BankrollConfig {
        BankrollConfig {
            fanduel: 260.0,
            draftkings: 200.0,
        }
    }

    fn bet(stake: f64, odds_a: f64, odds_b: f64) -> BetConfig {
        BetConfig {
            id: "test_bet".to_string(),
            deposit_book: Book::Fanduel,
            stake,
            odds_a,
            odds_b,
        }
    }

    #[test]
    fn test_hedge_goes_on_the_opposite_book() {
        let plan = plan_bet(&bet(50.0, 2.0, 2.0), &bankrolls());

        assert_eq!(plan.hedge_book, Book::Draftkings);
        assert_eq!(plan.available_balance, 200.0);
    }

    #[test]
    fn test_plan_carries_balanced_result() {
        let plan = plan_bet(&bet(50.0, 2.0, 2.0), &bankrolls());

        assert!((plan.result.hedge_stake - 50.0).abs() < TOL);
        assert!(plan.result.is_balanced(TOL));
        assert!(!plan.arbitrage.is_arbitrage);
    }

    #[test]
    fn test_plan_clamps_arbitrage_to_hedge_book_balance() {
        // Balancing stake 400*2/2.5 = 320 exceeds the 200 on DraftKings
        let plan = plan_bet(&bet(400.0, 2.0, 2.5), &bankrolls());

        assert!(plan.arbitrage.is_arbitrage);
        assert!((plan.arbitrage.adjusted_hedge_stake - 200.0).abs() < TOL);
        assert!(
            plan.arbitrage.guaranteed_profit
                < plan.arbitrage.profit_if_a.max(plan.arbitrage.profit_if_b)
        );
    }

    #[test]
    fn test_sweep_endpoints_and_monotonicity() {
        let points = sweep_custom_hedge(50.0, 2.0, 2.0, 100.0, 10);

        assert_eq!(points.len(), 11);
        assert_eq!(points[0].hedge_stake, 0.0);
        assert!((points[10].hedge_stake - 100.0).abs() < TOL);

        // More hedge always moves profit from side A to side B
        for pair in points.windows(2) {
            assert!(pair[1].profit_if_a < pair[0].profit_if_a);
            assert!(pair[1].profit_if_b > pair[0].profit_if_b);
        }
    }

    #[test]
    fn test_sweep_crosses_balance_at_the_computed_stake() {
        // At the balancing stake the sweep's two profits meet
        let balanced = compute_hedge(50.0, 2.0, 1.8);
        let points = sweep_custom_hedge(50.0, 2.0, 1.8, balanced.hedge_stake, 4);
        let last = points.last().unwrap();
        assert!((last.profit_if_a - last.profit_if_b).abs() < 1e-6);
    }

    #[test]
    fn test_sweep_degenerate_inputs_are_empty() {
        assert!(sweep_custom_hedge(50.0, 2.0, 2.0, 0.0, 10).is_empty());
        assert!(sweep_custom_hedge(50.0, 2.0, 2.0, -5.0, 10).is_empty());
        assert!(sweep_custom_hedge(50.0, 2.0, 2.0, 100.0, 0).is_empty());
    }
}
