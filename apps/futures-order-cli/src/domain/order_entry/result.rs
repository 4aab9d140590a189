//! Normalized order result.

use serde::{Deserialize, Serialize};

/// Exchange-independent summary of a placed order.
///
/// Every field is optional because any of them may be missing from the raw
/// response. Serialization always writes all eight keys, using `null` for
/// absent values. Quantities and prices keep the exchange's textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    /// Exchange-assigned order ID.
    pub order_id: Option<i64>,
    /// Contract symbol.
    pub symbol: Option<String>,
    /// `BUY` or `SELL`.
    pub side: Option<String>,
    /// Order type as reported by the exchange.
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    /// Order status, e.g. `NEW` or `FILLED`.
    pub status: Option<String>,
    /// Original quantity.
    pub orig_qty: Option<String>,
    /// Quantity filled so far.
    pub executed_qty: Option<String>,
    /// Average fill price.
    pub avg_price: Option<String>,
}
