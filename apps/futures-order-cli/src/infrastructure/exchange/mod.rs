//! Exchange Adapters
//!
//! Implementations of `ExchangePort`.

pub mod binance;

pub use binance::{BinanceConfig, BinanceEnvironment, BinanceError, BinanceFuturesGateway};
