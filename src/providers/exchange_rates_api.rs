use super::util::with_retry;
use crate::core::config::ProviderConfig;
use crate::core::history::{FetchError, HistoryProvider, TrailingWindow};
use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::{debug, instrument, warn};

const USER_AGENT: &str = concat!("fxadvisor/", env!("CARGO_PKG_VERSION"));

/// Client for the `/history` endpoint of exchangeratesapi.io and compatible services.
pub struct ExchangeRatesApiProvider {
    base_url: String,
    base_currency: Option<String>,
    retries: usize,
    retry_delay_ms: u64,
    client: reqwest::Client,
}

impl ExchangeRatesApiProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            base_currency: config.base_currency.clone(),
            retries: config.retries,
            retry_delay_ms: config.retry_delay_ms,
            client,
        })
    }

    fn history_url(&self, currency: &str, window: &TrailingWindow) -> Result<Url, FetchError> {
        let start_at = window.start_at.to_string();
        let end_at = window.end_at.to_string();
        let mut params = vec![
            ("start_at", start_at.as_str()),
            ("end_at", end_at.as_str()),
            ("symbols", currency),
        ];
        if let Some(base) = &self.base_currency {
            params.push(("base", base.as_str()));
        }

        Url::parse_with_params(&format!("{}/history", self.base_url), &params)
            .map_err(|e| FetchError::Unavailable(format!("Invalid provider URL: {e}")))
    }
}

#[async_trait]
impl HistoryProvider for ExchangeRatesApiProvider {
    #[instrument(
        name = "HistoryFetch",
        skip(self, currency, window),
        fields(currency = %currency, window = %window)
    )]
    async fn fetch_history(
        &self,
        currency: &str,
        window: &TrailingWindow,
    ) -> Result<Value, FetchError> {
        let url = self.history_url(currency, window)?;
        debug!("Requesting rate history from {}", url);

        let response = with_retry(
            || self.client.get(url.clone()).send(),
            self.retries,
            self.retry_delay_ms,
        )
        .await
        .map_err(|e| FetchError::Unavailable(format!("Request error: {e} for URL: {url}")))?;

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchError::Unavailable(format!(
                "HTTP error: {status} for currency: {currency}"
            )));
        }

        let text = response.text().await.map_err(|e| {
            FetchError::UnreadableBody(format!("Failed to read response for {currency}: {e}"))
        })?;

        if !status.is_success() {
            warn!(%status, body = %text, "Rate provider rejected the request");
        }

        serde_json::from_str(&text).map_err(|e| {
            FetchError::UnreadableBody(format!(
                "Failed to parse JSON response for {currency}: {e}"
            ))
        })
    }
}
