//! Hedge stake arithmetic for two-sided bets
//!
//! Given a stake already placed on side A at decimal odds A, computes the
//! counter-stake on side B that equalizes the net result of both outcomes,
//! plus the profit on each side and the break-even hedge odds.

use serde::{Deserialize, Serialize};

/// Result of a hedge stake calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[must_use]
pub struct HedgeResult {
    /// Stake to place on side B so both outcomes net the same amount
    pub hedge_stake: f64,
    /// Net profit if side A wins (payout A minus total outlay)
    pub profit_if_a: f64,
    /// Net profit if side B wins (payout B minus total outlay)
    pub profit_if_b: f64,
    /// Odds on side B at which the hedge breaks even against side A's payout
    pub min_hedge_odds: f64,
}

impl HedgeResult {
    /// The all-zero sentinel returned when the hedge odds cannot support a hedge
    pub fn zero() -> Self {
        Self {
            hedge_stake: 0.0,
            profit_if_a: 0.0,
            profit_if_b: 0.0,
            min_hedge_odds: 0.0,
        }
    }

    /// Check that both outcomes net the same profit (tolerance in currency units)
    #[inline]
    pub fn is_balanced(&self, tolerance: f64) -> bool {
        (self.profit_if_a - self.profit_if_b).abs() <= tolerance
    }
}

/// Calculate the balancing hedge stake and the profit on each outcome
///
/// # Arguments
/// * `stake_a` - Stake already placed on side A (currency units)
/// * `odds_a` - Decimal odds on side A
/// * `odds_b` - Decimal odds on side B (the hedge side)
///
/// # Returns
/// * `HedgeResult` with the balancing stake and both profits
/// * `HedgeResult::zero()` when `odds_b <= 1` - at unity or below, the hedge
///   side cannot return more than it costs, so no balancing stake exists
#[inline]
#[must_use]
pub fn compute_hedge(stake_a: f64, odds_a: f64, odds_b: f64) -> HedgeResult {
    // Odds at or below 1.0 would divide by a non-positive edge; signal
    // "no hedge" with the zero sentinel rather than an error.
    if odds_b <= 1.0 {
        return HedgeResult::zero();
    }

    // The stake on B that makes payout B equal payout A
    let hedge_stake = stake_a * odds_a / odds_b;
    let (profit_if_a, profit_if_b) = profit_split(stake_a, odds_a, odds_b, hedge_stake);

    // Break-even odds for the hedge side, exposed for caller display.
    // Guard stake_a <= 0 to avoid dividing by zero.
    let payout_a = stake_a * odds_a;
    let min_hedge_odds = if stake_a > 0.0 { payout_a / stake_a } else { 0.0 };

    HedgeResult {
        hedge_stake,
        profit_if_a,
        profit_if_b,
        min_hedge_odds,
    }
}

/// Net profit on each outcome for an explicit hedge stake
///
/// This is the single profit formula shared by the balanced hedge, the
/// balance-clamped arbitrage path, and the custom-hedge sweep: callers pass
/// whatever hedge stake they intend to place and get both signed profits back.
///
/// # Returns
/// `(profit_if_a, profit_if_b)` where each is the side's payout minus the
/// total outlay `stake_a + hedge_stake`.
#[inline]
#[must_use]
pub fn profit_split(stake_a: f64, odds_a: f64, odds_b: f64, hedge_stake: f64) -> (f64, f64) {
    let total_outlay = stake_a + hedge_stake;
    let profit_if_a = stake_a * odds_a - total_outlay;
    let profit_if_b = hedge_stake * odds_b - total_outlay;
    (profit_if_a, profit_if_b)
}

/// Expected value of a single bet under the quoted odds' own implied probability
///
/// `implied_prob = 1 / odds`, `payout = stake * odds`, EV = `payout * implied_prob - stake`.
///
/// Note that under this formula the implied probability and the payout cancel
/// exactly, so the result is identically zero for any positive odds: the quoted
/// price is treated as fair by construction. A meaningful EV estimate would need
/// a true-probability input distinct from the quoted odds.
#[inline]
#[must_use]
pub fn expected_value(odds: f64, stake: f64) -> f64 {
    if odds == 0.0 {
        return 0.0;
    }
    let implied_prob = 1.0 / odds;
    let payout = stake * odds;
    payout * implied_prob - stake
}

// ============================================================================
// Tests
// ============================================================================
