//! Symbol value object for futures contracts.

use serde::Serialize;
use std::fmt;

/// A validated futures contract symbol, e.g. `BTCUSDT`.
///
/// Always uppercase ASCII alphanumeric, 5 to 20 characters. Obtained through
/// [`validate_symbol`](crate::domain::order_entry::validate_symbol).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub(crate) const fn from_validated(value: String) -> Self {
        Self(value)
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
