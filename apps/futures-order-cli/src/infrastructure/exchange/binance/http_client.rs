//! HTTP client for the Binance futures REST API.

use chrono::Utc;
use reqwest::header::{CONTENT_TYPE, RETRY_AFTER};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::api_types::BinanceErrorResponse;
use super::config::BinanceConfig;
use super::error::BinanceError;
use super::signer::{BinanceSigner, build_query_string};

const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Retry delay assumed when a rate-limit response carries no `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// HTTP client for the Binance futures API. No retries.
#[derive(Debug, Clone)]
pub struct BinanceHttpClient {
    client: Client,
    api_key: String,
    signer: BinanceSigner,
    base_url: String,
    recv_window_ms: u64,
}

impl BinanceHttpClient {
    /// Create a new HTTP client from config.
    pub fn new(config: &BinanceConfig) -> Result<Self, BinanceError> {
        if config.api_key.trim().is_empty() || config.api_secret.trim().is_empty() {
            return Err(BinanceError::Configuration(
                "API key and secret are required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| BinanceError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            signer: BinanceSigner::new(config.api_secret.clone()),
            base_url: config.base_url().to_string(),
            recv_window_ms: config.recv_window_ms,
        })
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Unsigned GET.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BinanceError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    /// Signed, form-encoded POST.
    ///
    /// `recvWindow` and `timestamp` are appended to `params`, and the
    /// signature covers the whole body in that order.
    pub async fn post_signed<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, BinanceError> {
        let body = self.signed_body(params, Utc::now().timestamp_millis())?;

        tracing::debug!(path, "Sending signed request");

        let response = self
            .client
            .post(format!("{}{path}", self.base_url))
            .header(API_KEY_HEADER, &self.api_key)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;

        Self::handle_response(response).await
    }

    fn signed_body(
        &self,
        params: &[(&str, String)],
        timestamp_ms: i64,
    ) -> Result<String, BinanceError> {
        let mut all: Vec<(&str, String)> = params.to_vec();
        all.push(("recvWindow", self.recv_window_ms.to_string()));
        all.push(("timestamp", timestamp_ms.to_string()));

        let query = build_query_string(&all)?;
        let signature = self.signer.sign(&query)?;
        Ok(format!("{query}&signature={signature}"))
    }

    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, BinanceError> {
        let status = response.status();
        let retry_after = response
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let text = response
            .text()
            .await
            .map_err(|e| BinanceError::Network(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&text).map_err(|e| BinanceError::JsonParse(e.to_string()));
        }

        Err(classify_error(status, &text, retry_after))
    }
}

/// Map a non-success response to a [`BinanceError`].
///
/// Rate limits and credential failures are recognized by HTTP status or by
/// Binance error code. Other parseable bodies become [`BinanceError::Api`].
pub fn classify_error(status: StatusCode, body: &str, retry_after: Option<u64>) -> BinanceError {
    let parsed = serde_json::from_str::<BinanceErrorResponse>(body).ok();
    let code = parsed.as_ref().map(|e| e.code);

    let rate_limited = matches!(status.as_u16(), 418 | 429) || matches!(code, Some(-1003 | -1015));
    if rate_limited {
        return BinanceError::RateLimited {
            retry_after_secs: retry_after.unwrap_or(DEFAULT_RETRY_AFTER_SECS),
        };
    }

    let unauthorized = matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        || matches!(code, Some(-2014 | -2015));
    if unauthorized {
        let message = parsed.map_or_else(|| body.to_string(), |e| e.msg);
        return BinanceError::AuthenticationFailed { message };
    }

    match parsed {
        Some(err) => BinanceError::Api {
            code: err.code,
            message: err.msg,
        },
        None => BinanceError::Http {
            status: status.as_u16(),
            body: body.to_string(),
        },
    }
}
