//! Binance USD-M Futures Adapter
//!
//! Implementation of `ExchangePort` for the Binance futures REST API with:
//! - HMAC-SHA256 signed, form-encoded order requests
//! - Error classification into rejections, rate limits and auth failures
//! - Environment-aware safety logging (TESTNET vs LIVE)

mod api_types;
mod config;
mod error;
mod gateway;
mod http_client;
mod signer;

pub use api_types::{BinanceErrorResponse, BinanceOrderResponse};
pub use config::{BinanceConfig, BinanceEnvironment};
pub use error::BinanceError;
pub use gateway::BinanceFuturesGateway;
pub use http_client::classify_error;
pub use signer::{BinanceSigner, build_query_string};
