//! Canonical validated order request.

use rust_decimal::Decimal;

use super::value_objects::{OrderSide, OrderType, Symbol};

/// A fully validated order, ready to hand to the exchange gateway.
///
/// Only [`validate_order_inputs`](super::validate_order_inputs) builds one, so
/// holding an `OrderRequest` means every field passed validation:
/// quantity is positive, and a LIMIT order always carries a positive price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    symbol: Symbol,
    side: OrderSide,
    order_type: OrderType,
    quantity: Decimal,
    price: Option<Decimal>,
}

impl OrderRequest {
    pub(crate) const fn new(
        symbol: Symbol,
        side: OrderSide,
        order_type: OrderType,
        quantity: Decimal,
        price: Option<Decimal>,
    ) -> Self {
        Self {
            symbol,
            side,
            order_type,
            quantity,
            price,
        }
    }

    /// Contract symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Order side.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        self.side
    }

    /// Order type.
    #[must_use]
    pub const fn order_type(&self) -> OrderType {
        self.order_type
    }

    /// Order quantity (always positive).
    #[must_use]
    pub const fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Price as supplied. MARKET orders may carry one; it is not sent.
    #[must_use]
    pub const fn price(&self) -> Option<Decimal> {
        self.price
    }

    /// Limit price, present exactly when this is a LIMIT order.
    #[must_use]
    pub const fn limit_price(&self) -> Option<Decimal> {
        match self.order_type {
            OrderType::Limit => self.price,
            OrderType::Market => None,
        }
    }
}
