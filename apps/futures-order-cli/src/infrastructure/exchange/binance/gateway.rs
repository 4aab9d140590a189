//! Binance futures gateway implementing `ExchangePort`.

use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{error, info, warn};

use crate::application::ports::{ExchangeError, ExchangePort, ServerTime};
use crate::domain::order_entry::{
    OrderPayload, OrderResult, OrderType, TimeInForce, validate_side,
};

use super::api_types::BinanceOrderResponse;
use super::config::{BinanceConfig, BinanceEnvironment};
use super::error::BinanceError;
use super::http_client::BinanceHttpClient;

const ORDER_PATH: &str = "/fapi/v1/order";
const TIME_PATH: &str = "/fapi/v1/time";

/// Binance USD-M futures gateway.
///
/// The `try_*` methods return the full [`BinanceError`]. The `place_*`
/// methods are the failure boundary: they log any error and return `None`.
/// Only construction can fail outright.
#[derive(Debug, Clone)]
pub struct BinanceFuturesGateway {
    client: BinanceHttpClient,
    environment: BinanceEnvironment,
}

impl BinanceFuturesGateway {
    /// Build the gateway.
    ///
    /// # Errors
    ///
    /// [`BinanceError::Configuration`] when credentials are empty or the HTTP
    /// client cannot be built.
    pub fn new(config: BinanceConfig) -> Result<Self, BinanceError> {
        let client = BinanceHttpClient::new(&config)?;
        info!(
            environment = %config.environment,
            base_url = client.base_url(),
            "Binance client initialized"
        );
        Ok(Self {
            client,
            environment: config.environment,
        })
    }

    /// Target environment.
    #[must_use]
    pub const fn environment(&self) -> BinanceEnvironment {
        self.environment
    }

    /// Check if we're in live trading mode.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.environment.is_live()
    }

    /// Place a MARKET order, returning any failure.
    ///
    /// `side` is re-validated here; an invalid side fails without a request.
    pub async fn try_place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Result<OrderResult, BinanceError> {
        let side = validate_side(side)?;
        let payload = OrderPayload::market(normalize_symbol(symbol), side, quantity);
        self.send_order(&payload).await
    }

    /// Place a LIMIT order, returning any failure.
    pub async fn try_place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Result<OrderResult, BinanceError> {
        let side = validate_side(side)?;
        let payload =
            OrderPayload::limit(normalize_symbol(symbol), side, quantity, price, time_in_force);
        self.send_order(&payload).await
    }

    /// Place a MARKET order; `None` on any failure.
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Option<OrderResult> {
        let result = self.try_place_market_order(symbol, side, quantity).await;
        contain(result, OrderType::Market)
    }

    /// Place a LIMIT order; `None` on any failure.
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Option<OrderResult> {
        let result = self
            .try_place_limit_order(symbol, side, quantity, price, time_in_force)
            .await;
        contain(result, OrderType::Limit)
    }

    /// Exchange clock, passed through unchanged.
    pub async fn get_server_time(&self) -> Result<ServerTime, BinanceError> {
        self.client.get(TIME_PATH).await
    }

    async fn send_order(&self, payload: &OrderPayload) -> Result<OrderResult, BinanceError> {
        if self.is_live() {
            warn!(
                symbol = payload.symbol(),
                "Submitting LIVE order - this will execute real trades"
            );
        }

        info!(
            order_type = %payload.order_type(),
            payload = %serde_json::to_string(payload).unwrap_or_default(),
            "Placing order"
        );

        let response: BinanceOrderResponse =
            self.client.post_signed(ORDER_PATH, &payload.query_pairs()).await?;

        info!(
            order_id = ?response.order_id,
            status = ?response.status,
            "Order placed"
        );

        Ok(response.into_order_result())
    }
}

fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Log a failed order call and collapse it to `None`.
fn contain(result: Result<OrderResult, BinanceError>, order_type: OrderType) -> Option<OrderResult> {
    match result {
        Ok(order) => Some(order),
        Err(err @ BinanceError::InvalidInput(_)) => {
            error!(%order_type, error = %err, "Order rejected before sending");
            None
        }
        Err(err) if err.is_exchange_rejection() => {
            error!(%order_type, error = %err, "Binance API error while placing order");
            None
        }
        Err(err) => {
            error!(%order_type, error = ?err, "Unexpected error while placing order");
            None
        }
    }
}

#[async_trait]
impl ExchangePort for BinanceFuturesGateway {
    async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
    ) -> Option<OrderResult> {
        Self::place_market_order(self, symbol, side, quantity).await
    }

    async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Option<OrderResult> {
        Self::place_limit_order(self, symbol, side, quantity, price, time_in_force).await
    }

    async fn get_server_time(&self) -> Result<ServerTime, ExchangeError> {
        Self::get_server_time(self).await.map_err(ExchangeError::from)
    }
}
