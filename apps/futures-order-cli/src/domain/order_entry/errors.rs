//! Input validation errors.

use thiserror::Error;

/// A raw order field failed validation.
///
/// The display text is the user-facing reason printed after `Input error:`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Symbol is not 5-20 uppercase alphanumeric characters.
    #[error("symbol must be alphanumeric like BTCUSDT")]
    InvalidSymbol {
        /// The rejected input, after trimming and uppercasing.
        value: String,
    },

    /// Side is neither BUY nor SELL.
    #[error("side must be BUY or SELL")]
    InvalidSide {
        /// The rejected input.
        value: String,
    },

    /// Order type is neither MARKET nor LIMIT.
    #[error("order_type must be MARKET or LIMIT")]
    InvalidOrderType {
        /// The rejected input.
        value: String,
    },

    /// Quantity is zero or negative.
    #[error("quantity must be a positive number")]
    NonPositiveQuantity,

    /// LIMIT order submitted without a price.
    #[error("price is required for LIMIT orders")]
    MissingLimitPrice,

    /// LIMIT order price is zero or negative.
    #[error("price must be a positive number")]
    NonPositiveLimitPrice,

    /// MARKET order carries an optional price that is zero or negative.
    #[error("price must be a positive number when provided")]
    NonPositiveOptionalPrice,
}

impl ValidationError {
    /// Name of the offending field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidSymbol { .. } => "symbol",
            Self::InvalidSide { .. } => "side",
            Self::InvalidOrderType { .. } => "order_type",
            Self::NonPositiveQuantity => "quantity",
            Self::MissingLimitPrice
            | Self::NonPositiveLimitPrice
            | Self::NonPositiveOptionalPrice => "price",
        }
    }
}
