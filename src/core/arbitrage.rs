//! Arbitrage detection and balance-clamped hedge assessment
//!
//! Two decimal prices form an arbitrage when their implied probabilities sum
//! below one: backing both sides then returns more than the combined outlay
//! whichever side wins. The assessment here additionally clamps the hedge
//! stake to the bankroll actually available on the hedge book and reports the
//! profit that survives the clamp.

use serde::{Deserialize, Serialize};

use crate::config::constants;
use crate::core::hedge::{compute_hedge, profit_split};

/// Sum of the implied probabilities of two decimal prices
///
/// Below 1.0 the pair under-rounds (arbitrage); above 1.0 the overround is the
/// books' margin.
#[inline]
#[must_use]
pub fn implied_probability_sum(odds_a: f64, odds_b: f64) -> f64 {
    1.0 / odds_a + 1.0 / odds_b
}

/// Check whether two decimal prices jointly guarantee a profit
///
/// Nonpositive odds cannot encode a probability and never arbitrage.
#[inline]
#[must_use]
pub fn is_arbitrage(odds_a: f64, odds_b: f64) -> bool {
    if odds_a <= 0.0 || odds_b <= 0.0 {
        return false;
    }
    implied_probability_sum(odds_a, odds_b) < 1.0
}

/// Outcome of an arbitrage check with the hedge stake clamped to the bankroll
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct ArbitrageAssessment {
    /// Whether the two prices satisfy the arbitrage condition
    pub is_arbitrage: bool,
    /// Sum of implied probabilities (the verdict's margin)
    pub implied_sum: f64,
    /// Hedge stake after clamping to the available balance
    pub adjusted_hedge_stake: f64,
    /// Net profit if side A wins, at the clamped stake
    pub profit_if_a: f64,
    /// Net profit if side B wins, at the clamped stake
    pub profit_if_b: f64,
    /// Worst-case profit across both outcomes at the clamped stake
    pub guaranteed_profit: f64,
}

impl ArbitrageAssessment {
    /// Whether the guaranteed profit clears the reporting threshold
    ///
    /// The original calculator only surfaces opportunities above one cent;
    /// the threshold is overridable via `MIN_GUARANTEED_PROFIT`.
    #[inline]
    pub fn is_reportable(&self) -> bool {
        self.is_arbitrage && self.guaranteed_profit > constants::min_guaranteed_profit()
    }
}

/// Assess an arbitrage opportunity against the balance available for the hedge
///
/// The balancing hedge stake is clamped to `available_balance` and both
/// profits recomputed at the clamped stake. When the clamp binds, the two
/// profits diverge and the guaranteed profit is the worse of the two.
///
/// # Arguments
/// * `stake_a` - Stake already placed on side A
/// * `odds_a` - Decimal odds on side A
/// * `odds_b` - Decimal odds on side B (the hedge side)
/// * `available_balance` - Bankroll available on the hedge book
#[must_use]
pub fn assess(
    stake_a: f64,
    odds_a: f64,
    odds_b: f64,
    available_balance: f64,
) -> ArbitrageAssessment {
    let balanced = compute_hedge(stake_a, odds_a, odds_b);
    let adjusted_hedge_stake = balanced.hedge_stake.min(available_balance.max(0.0));
    let (profit_if_a, profit_if_b) = profit_split(stake_a, odds_a, odds_b, adjusted_hedge_stake);

    ArbitrageAssessment {
        is_arbitrage: is_arbitrage(odds_a, odds_b),
        implied_sum: implied_probability_sum(odds_a, odds_b),
        adjusted_hedge_stake,
        profit_if_a,
        profit_if_b,
        guaranteed_profit: profit_if_a.min(profit_if_b),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    // =========================================================================
    // Predicate
    // =========================================================================

    #[test]
    fn test_even_pair_is_not_arbitrage() {
        // Implied sum exactly 1.0 - not strictly below
        assert!(!is_arbitrage(2.0, 2.0));
        assert!((implied_probability_sum(2.0, 2.0) - 1.0).abs() < TOL);
    }

    #[test]
    fn test_generous_pair_is_arbitrage() {
        // 1/2.5 + 1/2.5 = 0.8
        assert!(is_arbitrage(2.5, 2.5));
        assert!((implied_probability_sum(2.5, 2.5) - 0.8).abs() < TOL);
    }

    #[test]
    fn test_overround_pair_is_not_arbitrage() {
        // Typical book margin: 1/1.9 + 1/1.9 > 1
        assert!(!is_arbitrage(1.9, 1.9));
    }

    #[test]
    fn test_nonpositive_odds_never_arbitrage() {
        assert!(!is_arbitrage(0.0, 2.5));
        assert!(!is_arbitrage(2.5, 0.0));
        assert!(!is_arbitrage(-2.0, -2.0));
    }

    // =========================================================================
    // Balance-clamped assessment
    // =========================================================================

    #[test]
    fn test_unclamped_assessment_keeps_profits_balanced() {
        // Balancing stake 100*2/2.5 = 80 fits inside the 200 bankroll
        let assessment = assess(100.0, 2.0, 2.5, 200.0);

        assert!(assessment.is_arbitrage);
        assert!((assessment.adjusted_hedge_stake - 80.0).abs() < TOL);
        assert!((assessment.profit_if_a - 20.0).abs() < TOL);
        assert!((assessment.profit_if_b - 20.0).abs() < TOL);
        assert!((assessment.guaranteed_profit - 20.0).abs() < TOL);
    }

    #[test]
    fn test_clamp_binds_and_guaranteed_profit_is_the_worse_side() {
        // Balancing stake would be 80 but only 60 is available
        let assessment = assess(100.0, 2.0, 2.5, 60.0);

        assert!((assessment.adjusted_hedge_stake - 60.0).abs() < TOL);
        // A wins: 200 - 160 = 40; B wins: 150 - 160 = -10
        assert!((assessment.profit_if_a - 40.0).abs() < TOL);
        assert!((assessment.profit_if_b - (-10.0)).abs() < TOL);
        assert!((assessment.guaranteed_profit - (-10.0)).abs() < TOL);
    }

    #[test]
    fn test_reportable_requires_profit_above_threshold() {
        let good = assess(100.0, 2.0, 2.5, 200.0);
        assert!(good.is_reportable());

        // Arbitrage condition holds but the clamp erases the profit
        let starved = assess(100.0, 2.0, 2.5, 0.0);
        assert!(starved.is_arbitrage);
        assert!(!starved.is_reportable());
    }

    #[test]
    fn test_negative_balance_treated_as_empty() {
        let assessment = assess(100.0, 2.0, 2.5, -50.0);
        assert_eq!(assessment.adjusted_hedge_stake, 0.0);
    }

    #[test]
    fn test_sub_unity_hedge_odds_yield_no_stake() {
        // compute_hedge returns the zero sentinel, so nothing to clamp
        let assessment = assess(100.0, 2.0, 0.9, 200.0);
        assert_eq!(assessment.adjusted_hedge_stake, 0.0);
        assert!(!assessment.is_arbitrage);
        // Unhedged: A wins the full edge, B loses the stake
        assert!((assessment.profit_if_a - 100.0).abs() < TOL);
        assert!((assessment.profit_if_b - (-100.0)).abs() < TOL);
    }
}
