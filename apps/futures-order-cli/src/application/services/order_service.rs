//! Order Service
//!
//! Logs each order immediately before and after the exchange call. No
//! validation and no transformation happen here.

use rust_decimal::Decimal;
use tracing::info;

use crate::application::ports::ExchangePort;
use crate::domain::order_entry::{OrderRequest, OrderResult, TimeInForce};

/// Pass-through order placement with request/response logging.
#[derive(Debug)]
pub struct OrderService<E> {
    exchange: E,
}

impl<E: ExchangePort> OrderService<E> {
    /// Wrap an exchange adapter.
    #[must_use]
    pub const fn new(exchange: E) -> Self {
        Self { exchange }
    }

    /// The wrapped exchange adapter.
    #[must_use]
    pub const fn exchange(&self) -> &E {
        &self.exchange
    }

    /// Place a MARKET order.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Option<OrderResult> {
        info!("Order request type=MARKET symbol={symbol} side={side} quantity={quantity}");
        let result = self
            .exchange
            .place_market_order(symbol, side, quantity)
            .await;
        info!(
            "Order response type=MARKET response={}",
            render(result.as_ref())
        );
        result
    }

    /// Place a LIMIT order.
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Option<OrderResult> {
        info!(
            "Order request type=LIMIT symbol={symbol} side={side} quantity={quantity} price={price}"
        );
        let result = self
            .exchange
            .place_limit_order(symbol, side, quantity, price, time_in_force)
            .await;
        info!(
            "Order response type=LIMIT response={}",
            render(result.as_ref())
        );
        result
    }

    /// Place a validated request, dispatching on its order type.
    ///
    /// LIMIT orders are sent GTC. A price carried by a MARKET request is not sent.
    pub async fn submit(&self, request: &OrderRequest) -> Option<OrderResult> {
        let symbol = request.symbol().as_str();
        let side = request.side().as_str();
        match request.limit_price() {
            Some(price) => {
                self.place_limit_order(
                    symbol,
                    side,
                    request.quantity(),
                    price,
                    TimeInForce::default(),
                )
                .await
            }
            None => {
                self.place_market_order(symbol, side, request.quantity())
                    .await
            }
        }
    }
}

fn render(result: Option<&OrderResult>) -> String {
    serde_json::to_string(&result).unwrap_or_else(|e| format!("<unserializable: {e}>"))
}
