//! Hedge Betting Calculator - Entry Point
//!
//! This binary:
//! 1. Loads configuration
//! 2. Plans a hedge for every configured bet
//! 3. Logs hedge stakes, profits, and arbitrage verdicts
//! 4. Appends each plan to the session history and exports it if configured

use std::path::Path;

use tracing::{error, info, warn};

use hedge_bot::config;
use hedge_bot::config::constants;
use hedge_bot::core::logging::init_logging;
use hedge_bot::core::session::{BetHistory, BetRecord};
use hedge_bot::core::{expected_value, plan_bet};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if it exists)
    dotenvy::dotenv().ok();

    // Initialize logging
    init_logging();

    info!("Hedge betting calculator starting...");

    // Configuration path can be overridden as the first argument
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from {}...", config_path);
    let config = match config::load_config(Path::new(&config_path)) {
        Ok(cfg) => {
            info!(
                "[CONFIG] Loaded {} bets (bankrolls: fanduel ${}, draftkings ${})",
                cfg.bets.len(),
                cfg.bankrolls.fanduel,
                cfg.bankrolls.draftkings
            );
            cfg
        }
        Err(e) => {
            error!("[ERROR] Configuration failed: {}", e);
            std::process::exit(1);
        }
    };

    let mut history = BetHistory::new();

    for bet in &config.bets {
        let plan = plan_bet(bet, &config.bankrolls);

        info!("[BET {}] {} @ {} hedged at {}", bet.id, bet.stake, bet.odds_a, bet.odds_b);
        info!(
            "   Hedge: ${:.2} on {} (balance ${:.2})",
            plan.result.hedge_stake, plan.hedge_book, plan.available_balance
        );
        info!(
            "   Profit if A: ${:.2} | Profit if B: ${:.2} | Break-even hedge odds: {:.2}",
            plan.result.profit_if_a, plan.result.profit_if_b, plan.result.min_hedge_odds
        );
        info!(
            "   EV at quoted odds: ${:.2}",
            expected_value(bet.odds_a, bet.stake)
        );

        // Should hold by construction whenever odds_b > 1
        if !plan.result.is_balanced(constants::profit_balance_tolerance()) {
            warn!(
                "   Profits diverge beyond tolerance: {} vs {}",
                plan.result.profit_if_a, plan.result.profit_if_b
            );
        }

        if plan.arbitrage.is_reportable() {
            info!(
                "   Risk-free arbitrage! Guaranteed profit ${:.2} with ${:.2} on {}",
                plan.arbitrage.guaranteed_profit,
                plan.arbitrage.adjusted_hedge_stake,
                plan.hedge_book
            );
        } else if plan.arbitrage.is_arbitrage {
            warn!("   Arbitrage prices, but profit below threshold after the balance clamp");
        } else {
            warn!(
                "   No risk-free arbitrage (implied sum {:.4}); adjust odds or stake",
                plan.arbitrage.implied_sum
            );
        }

        history.append(BetRecord::from_plan(bet.odds_a, bet.odds_b, &plan));
    }

    match &config.export {
        Some(export) if !history.is_empty() => {
            history.export(export)?;
            info!(
                "[EXPORT] Saved {} records to {}",
                history.len(),
                export.path.display()
            );
        }
        Some(_) => warn!("[EXPORT] No bets to export"),
        None => {}
    }

    info!("Done");
    Ok(())
}
