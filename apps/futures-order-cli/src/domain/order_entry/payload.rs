//! Exchange order payload built from a validated request.

use rust_decimal::Decimal;
use serde::Serialize;

use super::request::OrderRequest;
use super::value_objects::{OrderSide, OrderType, TimeInForce};

/// Order-creation parameters in exchange field order.
///
/// Serializes to `{symbol, side, type, quantity}` plus `timeInForce` and
/// `price` for LIMIT orders. Numbers are written as JSON numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderPayload {
    symbol: String,
    side: OrderSide,
    #[serde(rename = "type")]
    order_type: OrderType,
    #[serde(with = "rust_decimal::serde::float")]
    quantity: Decimal,
    #[serde(rename = "timeInForce", skip_serializing_if = "Option::is_none")]
    time_in_force: Option<TimeInForce>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    price: Option<Decimal>,
}

impl OrderPayload {
    /// MARKET payload. `symbol` is sent as given.
    #[must_use]
    pub const fn market(symbol: String, side: OrderSide, quantity: Decimal) -> Self {
        Self {
            symbol,
            side,
            order_type: OrderType::Market,
            quantity,
            time_in_force: None,
            price: None,
        }
    }

    /// LIMIT payload.
    #[must_use]
    pub const fn limit(
        symbol: String,
        side: OrderSide,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol,
            side,
            order_type: OrderType::Limit,
            quantity,
            time_in_force: Some(time_in_force),
            price: Some(price),
        }
    }

    /// Payload a validated request would send. LIMIT orders use GTC.
    #[must_use]
    pub fn from_request(request: &OrderRequest) -> Self {
        let symbol = request.symbol().as_str().to_string();
        match request.limit_price() {
            Some(price) => Self::limit(
                symbol,
                request.side(),
                request.quantity(),
                price,
                TimeInForce::default(),
            ),
            None => Self::market(symbol, request.side(), request.quantity()),
        }
    }

    /// Contract symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Ordered `(key, value)` pairs for a form-encoded request body.
    ///
    /// Decimals are written without trailing zeros.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("symbol", self.symbol.clone()),
            ("side", self.side.to_string()),
            ("type", self.order_type.to_string()),
        ];
        if let Some(tif) = self.time_in_force {
            pairs.push(("timeInForce", tif.to_string()));
        }
        pairs.push(("quantity", self.quantity.normalize().to_string()));
        if let Some(price) = self.price {
            pairs.push(("price", price.normalize().to_string()));
        }
        pairs
    }
}
