//! Custom-hedge profit sweep utility
//!
//! Prints the profit on each outcome across a range of hedge stakes, so a
//! caller can see how moving money onto the hedge side trades profit between
//! the two outcomes.
//!
//! Usage: `hedge_sweep <stake_a> <odds_a> <odds_b> [max_hedge]`
//!
//! When `max_hedge` is omitted, the sweep runs up to twice the balancing
//! stake. Step count comes from `HEDGE_SWEEP_STEPS` (default 20).

use anyhow::{bail, Context};
use tracing::info;

use hedge_bot::config::constants;
use hedge_bot::core::logging::init_logging;
use hedge_bot::core::{compute_hedge, sweep_custom_hedge};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 3 {
        bail!("usage: hedge_sweep <stake_a> <odds_a> <odds_b> [max_hedge]");
    }

    let stake_a: f64 = args[0].parse().context("stake_a must be a number")?;
    let odds_a: f64 = args[1].parse().context("odds_a must be a number")?;
    let odds_b: f64 = args[2].parse().context("odds_b must be a number")?;

    let balanced = compute_hedge(stake_a, odds_a, odds_b);
    let max_hedge = match args.get(3) {
        Some(raw) => raw.parse().context("max_hedge must be a number")?,
        None => balanced.hedge_stake * 2.0,
    };

    info!(
        "Sweeping hedge stakes for {} @ {} vs {} (balancing stake ${:.2})",
        stake_a, odds_a, odds_b, balanced.hedge_stake
    );

    let points = sweep_custom_hedge(stake_a, odds_a, odds_b, max_hedge, constants::sweep_steps());
    if points.is_empty() {
        bail!("nothing to sweep: max_hedge must be positive");
    }

    println!("{:>12} {:>12} {:>12}", "hedge_stake", "profit_a", "profit_b");
    for point in &points {
        println!(
            "{:>12.2} {:>12.2} {:>12.2}",
            point.hedge_stake, point.profit_if_a, point.profit_if_b
        );
    }

    Ok(())
}
