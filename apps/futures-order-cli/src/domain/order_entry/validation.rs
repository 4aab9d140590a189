//! Pure input validation for raw order fields.
//!
//! Each field check is usable on its own; [`validate_order_inputs`] runs them
//! in a fixed order and stops at the first failure, so a partially valid
//! request is never observable.

use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;

use super::errors::ValidationError;
use super::request::OrderRequest;
use super::value_objects::{OrderSide, OrderType, Symbol};

/// Full-match pattern for a normalized symbol.
const SYMBOL_PATTERN: &str = r"^[A-Z0-9]{5,20}$";

#[allow(clippy::expect_used)] // Pattern is a compile-time constant
fn symbol_regex() -> &'static Regex {
    static SYMBOL_REGEX: OnceLock<Regex> = OnceLock::new();
    SYMBOL_REGEX.get_or_init(|| Regex::new(SYMBOL_PATTERN).expect("symbol regex is valid"))
}

/// Trim, uppercase and check a contract symbol.
pub fn validate_symbol(symbol: &str) -> Result<Symbol, ValidationError> {
    let normalized = symbol.trim().to_uppercase();
    if !symbol_regex().is_match(&normalized) {
        return Err(ValidationError::InvalidSymbol { value: normalized });
    }
    Ok(Symbol::from_validated(normalized))
}

/// Trim, uppercase and parse an order side.
pub fn validate_side(side: &str) -> Result<OrderSide, ValidationError> {
    match side.trim().to_uppercase().as_str() {
        "BUY" => Ok(OrderSide::Buy),
        "SELL" => Ok(OrderSide::Sell),
        _ => Err(ValidationError::InvalidSide {
            value: side.to_string(),
        }),
    }
}

/// Trim, uppercase and parse an order type.
pub fn validate_order_type(order_type: &str) -> Result<OrderType, ValidationError> {
    match order_type.trim().to_uppercase().as_str() {
        "MARKET" => Ok(OrderType::Market),
        "LIMIT" => Ok(OrderType::Limit),
        _ => Err(ValidationError::InvalidOrderType {
            value: order_type.to_string(),
        }),
    }
}

/// Quantity must be strictly positive; returned unchanged.
pub fn validate_quantity(quantity: Decimal) -> Result<Decimal, ValidationError> {
    if quantity <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveQuantity);
    }
    Ok(quantity)
}

/// Check a price against the (already validated) order type.
///
/// LIMIT requires a positive price. MARKET accepts no price, but a supplied
/// one must still be positive. The price is returned unchanged.
pub fn validate_price(
    price: Option<Decimal>,
    order_type: OrderType,
) -> Result<Option<Decimal>, ValidationError> {
    let limit = order_type.requires_limit_price();
    match price {
        None if limit => Err(ValidationError::MissingLimitPrice),
        Some(p) if p <= Decimal::ZERO && limit => Err(ValidationError::NonPositiveLimitPrice),
        Some(p) if p <= Decimal::ZERO => Err(ValidationError::NonPositiveOptionalPrice),
        _ => Ok(price),
    }
}

/// Validate every raw field and build the canonical [`OrderRequest`].
///
/// Order type is checked first because price validation depends on it,
/// then symbol, side, quantity and price. The first failure is returned.
pub fn validate_order_inputs(
    symbol: &str,
    side: &str,
    order_type: &str,
    quantity: Decimal,
    price: Option<Decimal>,
) -> Result<OrderRequest, ValidationError> {
    let order_type = validate_order_type(order_type)?;
    let symbol = validate_symbol(symbol)?;
    let side = validate_side(side)?;
    let quantity = validate_quantity(quantity)?;
    let price = validate_price(price, order_type)?;

    Ok(OrderRequest::new(symbol, side, order_type, quantity, price))
}
