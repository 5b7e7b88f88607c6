//! Core module - hedge arithmetic, arbitrage assessment, planning, history, logging
//!
//! This module uses **explicit re-exports** instead of glob exports
//! (`pub use module::*`) to provide better API visibility and prevent
//! accidental public API changes.
//!
//! ## Usage
//! Prefer importing from `crate::core`:
//! ```ignore
//! use crate::core::{compute_hedge, HedgeResult, BetHistory};
//! ```

pub mod arbitrage;
pub mod hedge;
pub mod logging;
pub mod planner;
pub mod session;

// Explicit re-exports for hedge module
pub use hedge::{compute_hedge, expected_value, profit_split, HedgeResult};

// Explicit re-exports for arbitrage module
pub use arbitrage::{implied_probability_sum, is_arbitrage, ArbitrageAssessment};

// Explicit re-exports for planner module
pub use planner::{plan_bet, sweep_custom_hedge, HedgePlan, SweepPoint};

// Explicit re-exports for session module
pub use session::{BetHistory, BetRecord};

// Explicit re-exports for logging module
pub use logging::{init_logging, init_logging_with_config, LoggingConfig, DEFAULT_LOG_LEVEL};
