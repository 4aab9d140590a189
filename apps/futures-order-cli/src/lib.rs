// Allow unwrap/expect in tests - tests should panic on unexpected errors
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Futures Order CLI - Rust Core Library
//!
//! Validates operator-supplied futures orders and places them on Binance
//! USD-M futures (testnet or live), returning a normalized result.
//!
//! # Architecture (Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Validation rules and order types
//!   - `order_entry`: `OrderRequest`, `OrderPayload`, `OrderResult`, validators
//!
//! - **Application**: Ports and orchestration
//!   - `ports`: `ExchangePort` and its error type
//!   - `services`: `OrderService` (request/response logging)
//!
//! - **Infrastructure**: Adapters
//!   - `exchange::binance`: Signed REST gateway for Binance futures
//!
//! - **Edges**: `config`, `observability`, `cli`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

/// Domain layer - Validation and order types with no I/O.
pub mod domain;

/// Application layer - Ports and services.
pub mod application;

/// Infrastructure layer - Exchange adapters.
pub mod infrastructure;

/// Log sink setup.
pub mod observability;

/// Process configuration.
pub mod config;

/// Command-line surface.
pub mod cli;

// Re-exports
pub use application::ports::{ExchangeError, ExchangePort, ServerTime};
pub use application::services::OrderService;
pub use cli::{Cli, RunOutcome, run};
pub use domain::order_entry::{
    OrderPayload, OrderRequest, OrderResult, OrderSide, OrderType, Symbol, TimeInForce,
    ValidationError, validate_order_inputs,
};
pub use infrastructure::exchange::binance::{
    BinanceConfig, BinanceEnvironment, BinanceError, BinanceFuturesGateway,
};
