//! Configuration types for bankrolls and tracked bets
//!
//! This module defines all configuration structs that are loaded from YAML.
//! Every struct validates its own rules; `AppConfig::validate` runs them all.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ============================================================================
// Enums
// ============================================================================

/// Supported sportsbooks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Book {
    Fanduel,
    Draftkings,
}

impl Book {
    /// The opposite book - where the hedge bet is placed
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Book::Fanduel => Book::Draftkings,
            Book::Draftkings => Book::Fanduel,
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Book::Fanduel => write!(f, "fanduel"),
            Book::Draftkings => write!(f, "draftkings"),
        }
    }
}

/// Output format for bet history export
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

// ============================================================================
// Configuration Structs
// ============================================================================

/// Available balance on each sportsbook
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct BankrollConfig {
    /// Balance on FanDuel (currency units)
    pub fanduel: f64,
    /// Balance on DraftKings (currency units)
    pub draftkings: f64,
}

impl BankrollConfig {
    /// Balance available on the given book
    #[inline]
    pub fn balance(&self, book: Book) -> f64 {
        match book {
            Book::Fanduel => self.fanduel,
            Book::Draftkings => self.draftkings,
        }
    }

    /// Validate bankroll rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: balances cannot be negative
        if self.fanduel < 0.0 || self.draftkings < 0.0 {
            return Err(AppError::Config(format!(
                "Bankrolls cannot be negative (fanduel: {}, draftkings: {})",
                self.fanduel, self.draftkings
            )));
        }
        Ok(())
    }
}

/// A bet already placed, awaiting a hedge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetConfig {
    /// Unique identifier for the bet (e.g., "nba_finals_game3")
    pub id: String,
    /// Book where the original bet was placed; the hedge goes on the other book
    pub deposit_book: Book,
    /// Stake already placed on side A (currency units)
    pub stake: f64,
    /// Decimal odds on side A (the side already bet)
    pub odds_a: f64,
    /// Decimal odds on side B (the hedge side)
    pub odds_b: f64,
}

impl BetConfig {
    /// Validate bet configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: bet ID cannot be empty
        if self.id.trim().is_empty() {
            return Err(AppError::Config("Bet ID cannot be empty".to_string()));
        }

        // Rule: stake must be positive
        if self.stake <= 0.0 {
            return Err(AppError::Config(format!(
                "Bet '{}': stake must be > 0, got {}",
                self.id, self.stake
            )));
        }

        // Rule: decimal odds must be above 1 and below a sanity ceiling.
        // The math core tolerates any odds, but configured bets come from a
        // real book and anything outside this range is a typo.
        for (label, odds) in [("odds_a", self.odds_a), ("odds_b", self.odds_b)] {
            if odds <= 1.0 || odds >= 1000.0 {
                return Err(AppError::Config(format!(
                    "Bet '{}': {} must be > 1 and < 1000, got {}",
                    self.id, label, odds
                )));
            }
        }

        Ok(())
    }
}

/// Bet history export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Destination file for the exported history
    pub path: PathBuf,
    /// Output format (defaults to CSV)
    #[serde(default)]
    pub format: ExportFormat,
}

/// Root application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Available balance on each book
    #[serde(default)]
    pub bankrolls: BankrollConfig,
    /// Bets to plan hedges for
    pub bets: Vec<BetConfig>,
    /// Optional history export destination
    #[serde(default)]
    pub export: Option<ExportConfig>,
}

impl AppConfig {
    /// Validate all configuration rules
    pub fn validate(&self) -> Result<(), AppError> {
        // Rule: at least one bet must be configured
        if self.bets.is_empty() {
            return Err(AppError::Config(
                "Configuration must contain at least one bet".to_string(),
            ));
        }

        self.bankrolls.validate()?;

        for bet in &self.bets {
            bet.validate()?;
        }

        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
