//! Futures Order CLI Binary
//!
//! Validates one futures order and places it on Binance (testnet by default).
//!
//! # Usage
//!
//! ```bash
//! futures-order-cli --symbol BTCUSDT --side BUY --order-type LIMIT \
//!     --quantity 0.01 --price 50000
//! ```
//!
//! # Environment Variables
//!
//! - `BINANCE_API_KEY`: API key (required unless `--dry-run`)
//! - `BINANCE_API_SECRET`: API secret (required unless `--dry-run`)
//! - `BINANCE_ENV`: TESTNET | LIVE (default: TESTNET)
//! - `RUST_LOG`: Log filter (default: `--log-level`)
//!
//! # Exit Codes
//!
//! - `0`: dry run printed, or the order call finished (the result may be `null`)
//! - `1`: configuration or setup failure
//! - `2`: invalid input

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use futures_order_cli::cli::{Cli, run};
use futures_order_cli::config::{load_dotenv, logging_config};
use futures_order_cli::observability::init_logging;

fn main() -> anyhow::Result<ExitCode> {
    let dotenv = load_dotenv();
    let cli = Cli::parse();

    init_logging(&logging_config(&cli)).context("failed to initialize logging")?;
    match dotenv {
        Ok(Some(path)) => tracing::debug!(path = %path.display(), "Loaded .env file"),
        Ok(None) => {}
        Err(e) => tracing::warn!(error = %e, "Failed to load .env file"),
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    let outcome = runtime
        .block_on(async {
            let mut stdout = io::stdout().lock();
            run(&cli, &mut stdout).await
        })
        .inspect_err(|e| tracing::error!(error = ?e, "Order run failed"))?;

    Ok(ExitCode::from(outcome.exit_code()))
}
