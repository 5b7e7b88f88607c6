//! Application-wide constants and configuration defaults
//!
//! This module centralizes all hardcoded values to make them configurable
//! and maintainable. Values can be overridden via environment variables.

// =============================================================================
// Arbitrage Reporting
// =============================================================================

/// Minimum guaranteed profit before an arbitrage is reported (default: 0.01)
///
/// Environment variable: `MIN_GUARANTEED_PROFIT`
pub fn min_guaranteed_profit() -> f64 {
    std::env::var("MIN_GUARANTEED_PROFIT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0.01)
}

/// Tolerance when checking the two hedged profits agree (default: 1e-9)
///
/// Environment variable: `PROFIT_BALANCE_TOLERANCE`
pub fn profit_balance_tolerance() -> f64 {
    std::env::var("PROFIT_BALANCE_TOLERANCE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(1e-9)
}

// =============================================================================
// Custom Hedge Sweep
// =============================================================================

/// Number of steps in a custom-hedge profit sweep (default: 20)
///
/// Environment variable: `HEDGE_SWEEP_STEPS`
pub fn sweep_steps() -> usize {
    std::env::var("HEDGE_SWEEP_STEPS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(20)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_min_guaranteed_profit_default() {
        std::env::remove_var("MIN_GUARANTEED_PROFIT");
        assert_eq!(min_guaranteed_profit(), 0.01);
    }

    #[test]
    #[serial]
    fn test_min_guaranteed_profit_override() {
        std::env::set_var("MIN_GUARANTEED_PROFIT", "0.50");
        assert_eq!(min_guaranteed_profit(), 0.50);
        std::env::remove_var("MIN_GUARANTEED_PROFIT");
    }

    #[test]
    #[serial]
    fn test_invalid_override_falls_back_to_default() {
        std::env::set_var("HEDGE_SWEEP_STEPS", "not-a-number");
        assert_eq!(sweep_steps(), 20);
        std::env::remove_var("HEDGE_SWEEP_STEPS");
    }

    #[test]
    #[serial]
    fn test_sweep_steps_override() {
        std::env::set_var("HEDGE_SWEEP_STEPS", "5");
        assert_eq!(sweep_steps(), 5);
        std::env::remove_var("HEDGE_SWEEP_STEPS");
    }
}
