//! Binance USD-M futures REST types.
//!
//! Every response field is optional; the exchange omits some of them
//! depending on order type and account mode.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::order_entry::OrderResult;

/// `POST /fapi/v1/order` response.
///
/// Fields are read leniently: a string field that arrives as a number or
/// bool keeps its JSON text, so an accepted order never fails to parse.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BinanceOrderResponse {
    /// Exchange order ID.
    #[serde(deserialize_with = "lenient_i64")]
    pub order_id: Option<i64>,
    /// Client order ID.
    #[serde(deserialize_with = "lenient_text")]
    pub client_order_id: Option<String>,
    /// Symbol.
    #[serde(deserialize_with = "lenient_text")]
    pub symbol: Option<String>,
    /// Side.
    #[serde(deserialize_with = "lenient_text")]
    pub side: Option<String>,
    /// Order type.
    #[serde(rename = "type", deserialize_with = "lenient_text")]
    pub order_type: Option<String>,
    /// Status.
    #[serde(deserialize_with = "lenient_text")]
    pub status: Option<String>,
    /// Time in force.
    #[serde(deserialize_with = "lenient_text")]
    pub time_in_force: Option<String>,
    /// Limit price.
    #[serde(deserialize_with = "lenient_text")]
    pub price: Option<String>,
    /// Original quantity.
    #[serde(deserialize_with = "lenient_text")]
    pub orig_qty: Option<String>,
    /// Executed quantity.
    #[serde(deserialize_with = "lenient_text")]
    pub executed_qty: Option<String>,
    /// Average fill price.
    #[serde(deserialize_with = "lenient_text")]
    pub avg_price: Option<String>,
    /// Last update, epoch milliseconds.
    #[serde(deserialize_with = "lenient_i64")]
    pub update_time: Option<i64>,
}

/// Any JSON scalar as text; `null` as `None`.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Integer or integer string; anything else is `None`.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

impl BinanceOrderResponse {
    /// Normalize into an [`OrderResult`], mapping each field through unchanged.
    #[must_use]
    pub fn into_order_result(self) -> OrderResult {
        OrderResult {
            order_id: self.order_id,
            symbol: self.symbol,
            side: self.side,
            order_type: self.order_type,
            status: self.status,
            orig_qty: self.orig_qty,
            executed_qty: self.executed_qty,
            avg_price: self.avg_price,
        }
    }
}

/// Error body, e.g. `{"code":-1121,"msg":"Invalid symbol."}`.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceErrorResponse {
    /// Error code.
    pub code: i64,
    /// Error message.
    pub msg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_response_maps_through() {
        let body = r#"{
            "orderId": 4052917371,
            "symbol": "BTCUSDT",
            "status": "NEW",
            "clientOrderId": "x-abc",
            "price": "50000.00",
            "avgPrice": "0.00",
            "origQty": "0.010",
            "executedQty": "0.000",
            "cumQuote": "0.00000",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "reduceOnly": false,
            "side": "BUY",
            "updateTime": 1719387273010
        }"#;

        let response: BinanceOrderResponse = serde_json::from_str(body).unwrap();
        let result = response.into_order_result();

        assert_eq!(result.order_id, Some(4_052_917_371));
        assert_eq!(result.symbol.as_deref(), Some("BTCUSDT"));
        assert_eq!(result.side.as_deref(), Some("BUY"));
        assert_eq!(result.order_type.as_deref(), Some("LIMIT"));
        assert_eq!(result.status.as_deref(), Some("NEW"));
        assert_eq!(result.orig_qty.as_deref(), Some("0.010"));
        assert_eq!(result.executed_qty.as_deref(), Some("0.000"));
        assert_eq!(result.avg_price.as_deref(), Some("0.00"));
    }

    #[test]
    fn missing_avg_price_becomes_none() {
        let body = r#"{"orderId":1,"symbol":"BTCUSDT","side":"SELL","type":"MARKET","status":"FILLED","origQty":"2","executedQty":"2"}"#;

        let result = serde_json::from_str::<BinanceOrderResponse>(body)
            .unwrap()
            .into_order_result();

        assert_eq!(result.avg_price, None);
        assert_eq!(result.status.as_deref(), Some("FILLED"));
        assert_eq!(result.executed_qty.as_deref(), Some("2"));
    }

    #[test]
    fn empty_object_is_all_none() {
        let result = serde_json::from_str::<BinanceOrderResponse>("{}")
            .unwrap()
            .into_order_result();
        assert_eq!(result, OrderResult::default());
    }

    #[test]
    fn numeric_and_bool_fields_keep_their_text() {
        let body = r#"{"orderId":"17","symbol":"BTCUSDT","status":"FILLED","avgPrice":50000.5,"origQty":2,"executedQty":true,"updateTime":1719387273010}"#;

        let response: BinanceOrderResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.update_time, Some(1_719_387_273_010));

        let result = response.into_order_result();
        assert_eq!(result.order_id, Some(17));
        assert_eq!(result.avg_price.as_deref(), Some("50000.5"));
        assert_eq!(result.orig_qty.as_deref(), Some("2"));
        assert_eq!(result.executed_qty.as_deref(), Some("true"));
    }

    #[test]
    fn explicit_nulls_and_odd_ids_become_none() {
        let body = r#"{"orderId":"abc","symbol":null,"avgPrice":null,"side":"BUY"}"#;

        let result = serde_json::from_str::<BinanceOrderResponse>(body)
            .unwrap()
            .into_order_result();

        assert_eq!(result.order_id, None);
        assert_eq!(result.symbol, None);
        assert_eq!(result.avg_price, None);
        assert_eq!(result.side.as_deref(), Some("BUY"));
    }

    #[test]
    fn error_body_parses() {
        let err: BinanceErrorResponse =
            serde_json::from_str(r#"{"code":-2019,"msg":"Margin is insufficient."}"#).unwrap();
        assert_eq!(err.code, -2019);
        assert_eq!(err.msg, "Margin is insufficient.");
    }
}
