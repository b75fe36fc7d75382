use crate::config::CurrencyConfig;
use crate::models::{
    error::{FetchError, FetchFailure},
    rates::RateMap,
};
use serde::Deserialize;

// API RESPONSE TYPES
/// Only `rates` is read; `base`, `date` and friends are ignored.
#[derive(Deserialize, Debug)]
struct ApiResponse {
    #[serde(default)]
    rates: Option<RateMap>,
}

/// Decodes a response body into a [`RateMap`].
pub fn parse_rates(body: &str) -> Result<RateMap, FetchFailure> {
    let response: ApiResponse =
        serde_json::from_str(body).map_err(|e| FetchFailure::Parse(e.to_string()))?;

    response.rates.ok_or(FetchFailure::MissingRates)
}

// RATE SOURCE
/// Anything that can produce the current rate table for a configuration.
#[allow(async_fn_in_trait)]
pub trait RateSource {
    async fn fetch_rates(&self, config: &CurrencyConfig) -> Result<RateMap, FetchError>;
}

// EXCHANGE RATE CLIENT
/// HTTP client for the exchange-rate API.
pub struct ExchangeRateClient {
    http: reqwest::Client,
}

impl ExchangeRateClient {
    pub fn new() -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            FetchFailure::Transport(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self { http })
    }

    /// Executes the single GET and validates the body.
    async fn fetch(&self, url: &str) -> Result<RateMap, FetchFailure> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchFailure::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchFailure::Parse(format!("Failed to read body: {e}")))?;

        parse_rates(&body)
    }

    fn classify_error(&self, error: reqwest::Error) -> FetchFailure {
        if error.is_timeout() {
            FetchFailure::Transport(format!("Request timeout: {error}"))
        } else if error.is_request() {
            FetchFailure::Transport(format!("Request error: {error}"))
        } else {
            FetchFailure::Transport(format!("Network error: {error}"))
        }
    }
}

impl RateSource for ExchangeRateClient {
    async fn fetch_rates(&self, config: &CurrencyConfig) -> Result<RateMap, FetchError> {
        self.fetch(&config.request_url()).await.map_err(|failure| {
            gloo::console::error!(&format!("Error fetching data: {failure}"));
            FetchError::from(failure)
        })
    }
}
