//! Command-line surface and the single-order run.

use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::application::services::OrderService;
use crate::config::AppConfig;
use crate::domain::order_entry::{OrderPayload, OrderRequest, validate_order_inputs};
use crate::infrastructure::exchange::binance::BinanceFuturesGateway;

/// Binance USD-M futures order CLI.
#[derive(Debug, Clone, Parser)]
#[command(name = "futures-order-cli")]
#[command(about = "Validate and place MARKET or LIMIT futures orders on Binance")]
#[command(version)]
pub struct Cli {
    /// Trading symbol, e.g. BTCUSDT
    #[arg(long)]
    pub symbol: String,

    /// Order side: BUY or SELL
    #[arg(long)]
    pub side: String,

    /// Order type: MARKET or LIMIT
    #[arg(long)]
    pub order_type: String,

    /// Order quantity
    #[arg(long, allow_negative_numbers = true, value_parser = parse_decimal)]
    pub quantity: Decimal,

    /// Limit order price
    #[arg(long, allow_negative_numbers = true, value_parser = parse_decimal)]
    pub price: Option<Decimal>,

    /// Validate and print the order payload without sending it
    #[arg(long)]
    pub dry_run: bool,

    /// Trade on the live exchange instead of testnet
    #[arg(long)]
    pub live: bool,

    /// API key (defaults to BINANCE_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// API secret (defaults to BINANCE_API_SECRET)
    #[arg(long)]
    pub api_secret: Option<String>,

    /// Override the exchange REST base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Directory for the log file
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Log file name
    #[arg(long, default_value = "trading_bot.log")]
    pub log_file: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Parse a decimal in plain (`0.001`) or scientific (`1e-3`) notation.
///
/// # Errors
///
/// Returns a message naming the rejected input.
pub fn parse_decimal(value: &str) -> Result<Decimal, String> {
    let trimmed = value.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| format!("invalid number: {value:?}"))
}

/// How a run ended, short of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Dry run printed, or the order call finished (with or without a result).
    Completed,
    /// Input failed validation; nothing was sent.
    InvalidInput,
}

impl RunOutcome {
    /// Process exit code.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::InvalidInput => 2,
        }
    }
}

#[derive(Serialize)]
struct DryRunOutput<'a> {
    dry_run: bool,
    payload: &'a OrderPayload,
}

/// Validate the order, then print the dry-run payload or place it.
///
/// An exchange failure is not an error here: it prints `null` and the run
/// still completes.
///
/// # Errors
///
/// Returns an error on invalid configuration, missing credentials, or a
/// failed write to `out`.
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<RunOutcome> {
    let request = match validate_order_inputs(
        &cli.symbol,
        &cli.side,
        &cli.order_type,
        cli.quantity,
        cli.price,
    ) {
        Ok(request) => request,
        Err(e) => {
            error!(field = e.field(), "Input validation failed: {e}");
            writeln!(out, "Input error: {e}")?;
            return Ok(RunOutcome::InvalidInput);
        }
    };

    if cli.dry_run {
        let payload = OrderPayload::from_request(&request);
        info!("Dry-run enabled. payload={}", serde_json::to_string(&payload)?);
        let output = DryRunOutput {
            dry_run: true,
            payload: &payload,
        };
        writeln!(out, "{}", serde_json::to_string(&output)?)?;
        return Ok(RunOutcome::Completed);
    }

    let config = AppConfig::resolve(cli)?;
    place_order(&config, &request, out).await
}

/// Build the gateway from `config` and place `request`.
///
/// # Errors
///
/// Returns an error if credentials are missing, the gateway cannot be built,
/// or writing to `out` fails.
pub async fn place_order<W: Write>(
    config: &AppConfig,
    request: &OrderRequest,
    out: &mut W,
) -> anyhow::Result<RunOutcome> {
    if config.environment.is_live() {
        warn!("LIVE trading enabled - orders will use real funds");
    }

    let gateway = BinanceFuturesGateway::new(config.binance_config()?)?;
    let service = OrderService::new(gateway);

    let result = service.submit(request).await;
    let rendered = serde_json::to_string(&result)?;

    info!("CLI order result={rendered}");
    writeln!(out, "{rendered}")?;
    Ok(RunOutcome::Completed)
}
