//! Binance adapter configuration.

use std::fmt;
use std::time::Duration;

/// Binance USD-M futures environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BinanceEnvironment {
    /// Futures testnet (no real funds).
    #[default]
    Testnet,
    /// Production (real money).
    Live,
}

impl BinanceEnvironment {
    /// REST base URL for the environment.
    #[must_use]
    pub const fn base_url(&self) -> &'static str {
        match self {
            Self::Testnet => "https://testnet.binancefuture.com",
            Self::Live => "https://fapi.binance.com",
        }
    }

    /// Check if this is live trading.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Parse `TESTNET` or `LIVE`, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_uppercase().as_str() {
            "TESTNET" => Some(Self::Testnet),
            "LIVE" => Some(Self::Live),
            _ => None,
        }
    }
}

impl fmt::Display for BinanceEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Testnet => write!(f, "TESTNET"),
            Self::Live => write!(f, "LIVE"),
        }
    }
}

/// Configuration for the Binance futures gateway.
#[derive(Clone)]
pub struct BinanceConfig {
    /// API key, sent as `X-MBX-APIKEY`.
    pub api_key: String,
    /// API secret, used only for signing.
    pub api_secret: String,
    /// Target environment.
    pub environment: BinanceEnvironment,
    /// Overrides the environment's base URL.
    pub base_url: Option<String>,
    /// HTTP request timeout.
    pub timeout: Duration,
    /// `recvWindow` sent with signed requests, in milliseconds.
    pub recv_window_ms: u64,
}

impl BinanceConfig {
    /// Create a new configuration.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
        environment: BinanceEnvironment,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            environment,
            base_url: None,
            timeout: Duration::from_secs(10),
            recv_window_ms: 5000,
        }
    }

    /// Set the HTTP timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set `recvWindow`.
    #[must_use]
    pub const fn with_recv_window(mut self, recv_window_ms: u64) -> Self {
        self.recv_window_ms = recv_window_ms;
        self
    }

    /// Point the client at a different host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Effective base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.environment.base_url())
            .trim_end_matches('/')
    }
}

impl fmt::Debug for BinanceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceConfig")
            .field("api_key", &redact(&self.api_key))
            .field("api_secret", &"<redacted>")
            .field("environment", &self.environment)
            .field("base_url", &self.base_url())
            .field("timeout", &self.timeout)
            .field("recv_window_ms", &self.recv_window_ms)
            .finish()
    }
}

fn redact(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    format!("{visible}***")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_urls() {
        assert!(BinanceEnvironment::Testnet.base_url().contains("testnet"));
        assert!(!BinanceEnvironment::Testnet.is_live());
        assert_eq!(BinanceEnvironment::Live.base_url(), "https://fapi.binance.com");
        assert!(BinanceEnvironment::Live.is_live());
    }

    #[test]
    fn environment_from_name() {
        assert_eq!(
            BinanceEnvironment::from_name("testnet"),
            Some(BinanceEnvironment::Testnet)
        );
        assert_eq!(
            BinanceEnvironment::from_name(" LIVE "),
            Some(BinanceEnvironment::Live)
        );
        assert_eq!(BinanceEnvironment::from_name("paper"), None);
    }

    #[test]
    fn environment_display() {
        assert_eq!(BinanceEnvironment::Testnet.to_string(), "TESTNET");
        assert_eq!(BinanceEnvironment::Live.to_string(), "LIVE");
    }

    #[test]
    fn config_defaults() {
        let config = BinanceConfig::new("key", "secret", BinanceEnvironment::Testnet);
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.recv_window_ms, 5000);
        assert_eq!(config.base_url(), "https://testnet.binancefuture.com");
    }

    #[test]
    fn config_base_url_override_strips_slash() {
        let config = BinanceConfig::new("key", "secret", BinanceEnvironment::Live)
            .with_base_url("http://127.0.0.1:9000/")
            .with_timeout(Duration::from_secs(2))
            .with_recv_window(10_000);
        assert_eq!(config.base_url(), "http://127.0.0.1:9000");
        assert_eq!(config.timeout, Duration::from_secs(2));
        assert_eq!(config.recv_window_ms, 10_000);
    }

    #[test]
    fn debug_hides_secret() {
        let config = BinanceConfig::new("abcdefgh", "topsecret", BinanceEnvironment::Testnet);
        let text = format!("{config:?}");
        assert!(!text.contains("topsecret"));
        assert!(!text.contains("abcdefgh"));
        assert!(text.contains("abcd***"));
    }
}
