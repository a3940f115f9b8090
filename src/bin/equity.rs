//! Equity Binary
//!
//! Estimates preflop equity, or straight and flush rates, for a batch of
//! starting hands and writes one report per hand plus CSV and JSON
//! summaries.
//!
//! Type Q + Enter to stop after the current hand.

use clap::Parser;
use colored::Colorize;
use preflop_equity::aggregation::Report;
use preflop_equity::config::Config;
use preflop_equity::*;

fn main() -> anyhow::Result<()> {
    log();
    brb();
    let config = Config::parse();
    let hands = config.hands()?;
    let aggregator = config.aggregator()?;
    let report = Report::new(config.output())?;
    log::info!(
        "simulating {} of {} hands into {}",
        aggregator.target(),
        hands.len(),
        report.directory().display()
    );
    let summaries = aggregator.simulate(&hands, halt(), |summary| {
        report.write(summary)?;
        println!(
            "{:<4} {} {}",
            summary.hand().to_string().bold(),
            format!("{:.4}", summary.mean()).green(),
            format!("± {:.4}", summary.deviation()).dimmed(),
        );
        Ok(())
    })?;
    if interrupted() {
        log::warn!("interrupted after {} of {} hands", summaries.len(), hands.len());
    }
    report.summarize(&summaries)?;
    Ok(())
}
