//! Append-only bet history and export
//!
//! The history is an explicit collection owned by the caller - the math core
//! never sees it. Records are snapshots of computed hedges; nothing in them is
//! ever mutated after append. Export writes the whole history as CSV (one
//! record per row) or pretty JSON.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{ExportConfig, ExportFormat};
use crate::core::planner::HedgePlan;
use crate::error::AppError;

/// CSV header row; field order matches the exported columns
const CSV_HEADER: &str = "odds_a,odds_b,hedge_stake,profit_a,profit_b";

/// One saved hedge computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BetRecord {
    /// Record identifier
    pub id: Uuid,
    /// When the record was appended
    pub recorded_at: DateTime<Utc>,
    /// Decimal odds on side A
    pub odds_a: f64,
    /// Decimal odds on side B
    pub odds_b: f64,
    /// Balancing hedge stake
    pub hedge_stake: f64,
    /// Net profit if side A wins
    pub profit_a: f64,
    /// Net profit if side B wins
    pub profit_b: f64,
}

impl BetRecord {
    /// Snapshot a hedge plan together with the odds it was computed from
    pub fn from_plan(odds_a: f64, odds_b: f64, plan: &HedgePlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            odds_a,
            odds_b,
            hedge_stake: plan.result.hedge_stake,
            profit_a: plan.result.profit_if_a,
            profit_b: plan.result.profit_if_b,
        }
    }
}

/// Append-only history of saved hedge computations
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BetHistory {
    records: Vec<BetRecord>,
}

impl BetHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; records are never removed or rewritten
    pub fn append(&mut self, record: BetRecord) {
        self.records.push(record);
    }

    /// All records in append order
    pub fn records(&self) -> &[BetRecord] {
        &self.records
    }

    /// Number of saved records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the history has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Write the history as CSV to any writer
    ///
    /// One record per row, columns `odds_a,odds_b,hedge_stake,profit_a,profit_b`.
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writeln!(writer, "{}", CSV_HEADER)?;
        for record in &self.records {
            writeln!(
                writer,
                "{},{},{},{},{}",
                record.odds_a, record.odds_b, record.hedge_stake, record.profit_a, record.profit_b
            )?;
        }
        Ok(())
    }

    /// Export the history to a file per the export configuration
    pub fn export(&self, config: &ExportConfig) -> Result<(), AppError> {
        match config.format {
            ExportFormat::Csv => self.export_csv(&config.path),
            ExportFormat::Json => self.export_json(&config.path),
        }
    }

    /// Export the history as a CSV file
    pub fn export_csv(&self, path: &Path) -> Result<(), AppError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_csv(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Export the history as a pretty-printed JSON file
    pub fn export_json(&self, path: &Path) -> Result<(), AppError> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.records)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
