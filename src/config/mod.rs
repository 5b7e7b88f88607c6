//! Configuration module for bankroll settings and YAML loading
//!
//! This module provides:
//! - Configuration types (`AppConfig`, `BetConfig`, `BankrollConfig`, `ExportConfig`)
//! - YAML loading functionality (`load_config`)
//! - Application constants with environment variable overrides

pub mod constants;
mod loader;
mod types;

// Re-export types
pub use types::{AppConfig, BankrollConfig, BetConfig, Book, ExportConfig, ExportFormat};

// Re-export loader functions
pub use loader::{load_config, load_config_from_str};
