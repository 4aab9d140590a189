//! Shared helpers for integration tests.

#![allow(dead_code)]

use futures_order_cli::Cli;

pub use futures_order_cli::observability::testing::CapturedLogs;

/// Parse a command line, prefixed with the binary name.
pub fn cli(args: &[&str]) -> Cli {
    use clap::Parser;

    let mut full = vec!["futures-order-cli"];
    full.extend_from_slice(args);
    Cli::parse_from(full)
}

/// Minimal order acknowledgement as returned by the futures API.
pub fn order_ack(order_type: &str, side: &str) -> serde_json::Value {
    serde_json::json!({
        "orderId": 4_052_917_371_i64,
        "symbol": "BTCUSDT",
        "status": "NEW",
        "clientOrderId": "web_abc123",
        "price": "0",
        "avgPrice": "0.00",
        "origQty": "1",
        "executedQty": "0",
        "cumQuote": "0",
        "timeInForce": "GTC",
        "type": order_type,
        "reduceOnly": false,
        "side": side,
        "updateTime": 1_719_387_273_010_i64
    })
}
