//! Process configuration.
//!
//! Values are resolved in this order: explicit CLI flags, then environment
//! variables (which `.env` may have populated), then defaults.
//!
//! | Variable             | Meaning                              |
//! |----------------------|--------------------------------------|
//! | `BINANCE_API_KEY`    | API key                              |
//! | `BINANCE_API_SECRET` | API secret                           |
//! | `BINANCE_ENV`        | `TESTNET` (default) or `LIVE`        |

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::Cli;
use crate::infrastructure::exchange::binance::{BinanceConfig, BinanceEnvironment};
use crate::observability::LoggingConfig;

/// API key variable.
pub const API_KEY_VAR: &str = "BINANCE_API_KEY";
/// API secret variable.
pub const API_SECRET_VAR: &str = "BINANCE_API_SECRET";
/// Environment selector variable.
pub const ENVIRONMENT_VAR: &str = "BINANCE_ENV";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `BINANCE_ENV` holds something other than `TESTNET` or `LIVE`.
    #[error("Invalid BINANCE_ENV value {0:?}: expected TESTNET or LIVE")]
    InvalidEnvironment(String),

    /// Credentials are required to reach the exchange.
    #[error("Missing required credentials: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
}

/// API key and secret, either possibly absent.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// API key.
    pub api_key: Option<String>,
    /// API secret.
    pub api_secret: Option<String>,
}

impl Credentials {
    /// Names of the variables still missing.
    #[must_use]
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if is_blank(self.api_key.as_deref()) {
            missing.push(API_KEY_VAR);
        }
        if is_blank(self.api_secret.as_deref()) {
            missing.push(API_SECRET_VAR);
        }
        missing
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
            .field("api_secret", &self.api_secret.as_ref().map(|_| "<set>"))
            .finish()
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Target exchange environment.
    pub environment: BinanceEnvironment,
    /// Exchange credentials.
    pub credentials: Credentials,
    /// Exchange base URL override.
    pub base_url: Option<String>,
    /// Log sink settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolve from CLI flags and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `BINANCE_ENV` is set to an unknown value.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        Self::resolve_with(cli, |name| std::env::var(name).ok())
    }

    /// Resolve using `lookup` in place of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment selector is set to an unknown value.
    pub fn resolve_with<F>(cli: &Cli, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = if cli.live {
            BinanceEnvironment::Live
        } else {
            match lookup(ENVIRONMENT_VAR).filter(|v| !v.trim().is_empty()) {
                Some(name) => BinanceEnvironment::from_name(&name)
                    .ok_or(ConfigError::InvalidEnvironment(name))?,
                None => BinanceEnvironment::default(),
            }
        };

        let credentials = Credentials {
            api_key: cli.api_key.clone().or_else(|| lookup(API_KEY_VAR)),
            api_secret: cli.api_secret.clone().or_else(|| lookup(API_SECRET_VAR)),
        };

        Ok(Self {
            environment,
            credentials,
            base_url: cli.base_url.clone(),
            logging: logging_config(cli),
        })
    }

    /// Gateway configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredentials`] if the key or secret is absent.
    pub fn binance_config(&self) -> Result<BinanceConfig, ConfigError> {
        let missing = self.credentials.missing();
        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        let key = self.credentials.api_key.clone().unwrap_or_default();
        let secret = self.credentials.api_secret.clone().unwrap_or_default();
        let config = BinanceConfig::new(key, secret, self.environment);

        Ok(match &self.base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        })
    }
}

/// Log settings from CLI flags alone, for use before anything else resolves.
#[must_use]
pub fn logging_config(cli: &Cli) -> LoggingConfig {
    LoggingConfig::default()
        .with_log_dir(cli.log_dir.clone())
        .with_log_file(cli.log_file.clone())
        .with_level(cli.log_level.clone())
}

/// Load `.env` from the working directory or an ancestor, if present.
///
/// Returns the path loaded, or `None` when there is no file. Runs before
/// logging is set up, so the caller reports the outcome.
///
/// # Errors
///
/// The file exists but could not be read or parsed.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenv_outcome(dotenvy::dotenv())
}

/// Load a specific env file, with the same outcome rules as [`load_dotenv`].
///
/// # Errors
///
/// The file exists but could not be read or parsed.
pub fn load_dotenv_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    dotenv_outcome(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn dotenv_outcome(
    result: Result<PathBuf, dotenvy::Error>,
) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn cli(extra: &[&str]) -> Cli {
        let mut args = vec![
            "futures-order-cli",
            "--symbol",
            "BTCUSDT",
            "--side",
            "BUY",
            "--order-type",
            "MARKET",
            "--quantity",
            "1",
        ];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_to_testnet() {
        let config = AppConfig::resolve_with(&cli(&[]), env(&[])).unwrap();
        assert_eq!(config.environment, BinanceEnvironment::Testnet);
        assert_eq!(config.base_url, None);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn environment_variable_selects_live() {
        let config = AppConfig::resolve_with(&cli(&[]), env(&[("BINANCE_ENV", "live")])).unwrap();
        assert_eq!(config.environment, BinanceEnvironment::Live);
    }

    #[test]
    fn live_flag_wins_over_environment() {
        let config =
            AppConfig::resolve_with(&cli(&["--live"]), env(&[("BINANCE_ENV", "TESTNET")]))
                .unwrap();
        assert!(config.environment.is_live());
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = AppConfig::resolve_with(&cli(&[]), env(&[("BINANCE_ENV", "PAPER")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidEnvironment("PAPER".to_string()));
    }

    #[test]
    fn cli_credentials_override_environment() {
        let lookup = env(&[
            ("BINANCE_API_KEY", "env-key"),
            ("BINANCE_API_SECRET", "env-secret"),
        ]);
        let config = AppConfig::resolve_with(&cli(&["--api-key", "cli-key"]), lookup).unwrap();

        assert_eq!(config.credentials.api_key.as_deref(), Some("cli-key"));
        assert_eq!(config.credentials.api_secret.as_deref(), Some("env-secret"));
    }

    #[test]
    fn missing_credentials_reported_when_building_gateway_config() {
        let config =
            AppConfig::resolve_with(&cli(&[]), env(&[("BINANCE_API_SECRET", "s")])).unwrap();
        assert_eq!(
            config.binance_config().unwrap_err(),
            ConfigError::MissingCredentials(vec!["BINANCE_API_KEY"])
        );

        let config = AppConfig::resolve_with(&cli(&["--api-key", " "]), env(&[])).unwrap();
        assert_eq!(
            config.binance_config().unwrap_err().to_string(),
            "Missing required credentials: BINANCE_API_KEY, BINANCE_API_SECRET"
        );
    }

    #[test]
    fn binance_config_carries_overrides() {
        let config = AppConfig::resolve_with(
            &cli(&["--base-url", "http://localhost:8080", "--live"]),
            env(&[("BINANCE_API_KEY", "k"), ("BINANCE_API_SECRET", "s")]),
        )
        .unwrap();

        let binance = config.binance_config().unwrap();
        assert_eq!(binance.base_url(), "http://localhost:8080");
        assert_eq!(binance.environment, BinanceEnvironment::Live);
        assert_eq!(binance.api_key, "k");
    }

    #[test]
    fn logging_flags_flow_through() {
        let config = logging_config(&cli(&[
            "--log-dir",
            "/tmp/bot",
            "--log-file",
            "orders.log",
            "--log-level",
            "debug",
        ]));
        assert_eq!(config.log_path(), std::path::PathBuf::from("/tmp/bot/orders.log"));
        assert_eq!(config.level, "debug");
    }

    #[test]
    fn credentials_debug_is_redacted() {
        let creds = Credentials {
            api_key: Some("abc".to_string()),
            api_secret: None,
        };
        let text = format!("{creds:?}");
        assert!(!text.contains("abc"));
        assert!(text.contains("<set>"));
    }

    #[test]
    fn missing_env_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_dotenv_from(&dir.path().join(".env")).unwrap(), None);
    }

    #[test]
    fn malformed_env_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(&path, "NOT VALID\n").unwrap();

        let err = load_dotenv_from(&path).unwrap_err();
        assert!(!err.not_found());
    }
}
