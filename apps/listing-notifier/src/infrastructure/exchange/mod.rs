//! Exchange Status Client
//!
//! HTTP adapter for the exchange's listing-status endpoint. One GET per
//! poll with the symbol as a query parameter; the response is a JSON
//! object whose string field `success` equals `"1"` when the symbol is
//! listed. Any other value, or an absent field, means "not listed".

use serde::Deserialize;

use crate::application::ports::{PollError, StatusSource};
use crate::domain::Symbol;
use crate::infrastructure::config::EndpointSettings;

/// `getcurrency` response body. Only the success indicator matters.
#[derive(Debug, Deserialize)]
struct GetCurrencyResponse {
    /// `"1"` when the symbol is listed.
    #[serde(default)]
    success: Option<String>,
}

/// Sentinel value signalling "listed".
const LISTED_SENTINEL: &str = "1";

/// HTTP client for the listing-status endpoint.
#[derive(Debug, Clone)]
pub struct StatusClient {
    client: reqwest::Client,
    status_url: String,
}

impl StatusClient {
    /// Build a client with the configured request timeout.
    pub fn new(endpoints: &EndpointSettings) -> Result<Self, PollError> {
        let client = reqwest::Client::builder()
            .timeout(endpoints.request_timeout())
            .build()
            .map_err(|e| PollError::Network(e.to_string()))?;

        Ok(Self {
            client,
            status_url: endpoints.status_url.clone(),
        })
    }
}

#[async_trait::async_trait]
impl StatusSource for StatusClient {
    async fn is_listed(&self, symbol: &Symbol) -> Result<bool, PollError> {
        let response = self
            .client
            .get(&self.status_url)
            .query(&[("ticker_code", symbol.as_str())])
            .send()
            .await
            .map_err(|e| PollError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PollError::Status(status.as_u16()));
        }

        let body: GetCurrencyResponse = response
            .json()
            .await
            .map_err(|e| PollError::Parse(e.to_string()))?;

        Ok(body.success.as_deref() == Some(LISTED_SENTINEL))
    }
}
