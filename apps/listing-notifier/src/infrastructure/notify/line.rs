//! LINE Notify push channel.
//!
//! POSTs the message form-encoded with a bearer token. Success is HTTP
//! 200, anything else is a delivery failure.

use async_trait::async_trait;

use crate::application::ports::{DeliveryError, Notifier};

/// Token-based push API notifier.
#[derive(Debug, Clone)]
pub struct LinePush {
    client: reqwest::Client,
    api_url: String,
    token: String,
}

impl LinePush {
    /// Create a push notifier for the given API endpoint and token.
    pub const fn new(client: reqwest::Client, api_url: String, token: String) -> Self {
        Self {
            client,
            api_url,
            token,
        }
    }
}

#[async_trait]
impl Notifier for LinePush {
    fn channel(&self) -> &'static str {
        "line"
    }

    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .form(&[("message", message)])
            .send()
            .await
            .map_err(|e| DeliveryError::Network(e.to_string()))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(DeliveryError::Status(status.as_u16()));
        }
        Ok(())
    }
}
