//! Binance-specific error types.

use thiserror::Error;

use crate::application::ports::ExchangeError;
use crate::domain::order_entry::ValidationError;

/// Errors from the Binance adapter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BinanceError {
    /// Exchange returned a structured error body.
    #[error("API error: {code} - {message}")]
    Api {
        /// Binance error code, e.g. `-2019`.
        code: i64,
        /// Binance error message.
        message: String,
    },

    /// Request weight or order rate exceeded.
    #[error("Rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Suggested retry delay in seconds.
        retry_after_secs: u64,
    },

    /// Key or signature refused.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Exchange message.
        message: String,
    },

    /// Transport failure (connect, timeout, body read).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status without a Binance error body.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Response body did not match the expected shape.
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// Request parameters could not be form-encoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Request failed local checks; nothing was sent.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The client could not be constructed.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl BinanceError {
    /// True for structured refusals from the exchange itself.
    #[must_use]
    pub const fn is_exchange_rejection(&self) -> bool {
        matches!(
            self,
            Self::Api { .. } | Self::RateLimited { .. } | Self::AuthenticationFailed { .. }
        )
    }
}

impl From<BinanceError> for ExchangeError {
    fn from(err: BinanceError) -> Self {
        match err {
            BinanceError::Api { code, message } => Self::Rejected { code, message },
            BinanceError::RateLimited { .. } => Self::RateLimited,
            BinanceError::AuthenticationFailed { .. } => Self::Unauthorized,
            BinanceError::Network(message) => Self::Connection { message },
            BinanceError::InvalidInput(err) => Self::InvalidInput {
                reason: err.to_string(),
            },
            err @ (BinanceError::Http { .. }
            | BinanceError::JsonParse(_)
            | BinanceError::Encoding(_)
            | BinanceError::Configuration(_)) => Self::Unknown {
                message: err.to_string(),
            },
        }
    }
}
