//! Exchange Port (Driven Port)
//!
//! Interface for placing futures orders on an exchange.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::order_entry::{OrderResult, TimeInForce};

/// Exchange clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    /// Milliseconds since the Unix epoch.
    pub server_time: i64,
}

impl ServerTime {
    /// Convert to a UTC timestamp, if in range.
    #[must_use]
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.server_time)
    }
}

/// Exchange port error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// The exchange returned a structured rejection.
    #[error("Order rejected ({code}): {message}")]
    Rejected {
        /// Exchange error code.
        code: i64,
        /// Exchange error message.
        message: String,
    },

    /// Rate limited.
    #[error("Rate limited by exchange")]
    RateLimited,

    /// Credentials refused.
    #[error("Exchange refused credentials")]
    Unauthorized,

    /// Request failed local checks before being sent.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Validation message.
        reason: String,
    },

    /// Transport failure.
    #[error("Exchange connection error: {message}")]
    Connection {
        /// Error details.
        message: String,
    },

    /// Anything else.
    #[error("Exchange error: {message}")]
    Unknown {
        /// Error details.
        message: String,
    },
}

/// Port for order placement.
///
/// Order calls contain every exchange failure and return `None`; the
/// implementation is responsible for logging the cause.
#[async_trait]
pub trait ExchangePort: Send + Sync {
    /// Place a MARKET order.
    async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Option<OrderResult>;

    /// Place a LIMIT order.
    async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Option<OrderResult>;

    /// Read the exchange clock.
    async fn get_server_time(&self) -> Result<ServerTime, ExchangeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_time_deserializes_and_converts() {
        let time: ServerTime = serde_json::from_str(r#"{"serverTime":1499827319559}"#).unwrap();
        assert_eq!(time.server_time, 1_499_827_319_559);

        let dt = time.as_datetime().unwrap();
        assert_eq!(dt.timestamp_millis(), 1_499_827_319_559);
    }

    #[test]
    fn exchange_error_display() {
        let err = ExchangeError::Rejected {
            code: -2019,
            message: "Margin is insufficient.".to_string(),
        };
        assert_eq!(err.to_string(), "Order rejected (-2019): Margin is insufficient.");
    }
}
