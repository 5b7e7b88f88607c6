//! Hedge Betting Calculator
//!
//! Computes hedge-betting allocations: given a stake already placed on one
//! outcome, derives the counter-stake on the opposing outcome that balances
//! the net result, and flags price pairs that form a risk-free arbitrage.
//!
//! - Pure hedge/arbitrage arithmetic (`core::hedge`, `core::arbitrage`)
//! - Bet planning against per-book bankrolls (`core::planner`)
//! - Append-only session history with CSV/JSON export (`core::session`)

pub mod config;
pub mod core;
pub mod error;

pub use error::AppError;
