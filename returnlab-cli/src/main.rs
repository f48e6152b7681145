//! ReturnLab CLI — trailing one-year return percentiles.
//!
//! Reads `sp500.csv` and `Coinbase_BTCUSD_d.csv` from the working directory
//! and prints the 0th..100th percentile (in steps of 5) of every one-year
//! return in each history. Takes no options; set `RUST_LOG=info` or
//! `RUST_LOG=debug` for progress logs on stderr.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use returnlab_core::{run_report, ReportConfig};

#[derive(Parser)]
#[command(
    name = "returnlab",
    version,
    about = "ReturnLab — historical distribution of trailing one-year returns for sp500 and btc"
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ReportConfig::default();
    log::debug!("report config: {config:?}");

    // The full report is built before anything reaches stdout.
    let report = run_report(&config).context("return report failed")?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .and_then(|()| stdout.flush())
        .context("failed to write report to stdout")?;
    Ok(())
}
