//! Slack webhook channel.
//!
//! POSTs a form-encoded body whose single `payload` field carries a JSON
//! document built with `serde_json`, so the message can never produce a
//! malformed payload regardless of its content.

use async_trait::async_trait;

use crate::application::ports::{DeliveryError, Notifier};

/// Slack incoming-webhook notifier.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    client: reqwest::Client,
    webhook_url: String,
}

impl SlackWebhook {
    /// Create a webhook notifier for the given URL.
    pub const fn new(client: reqwest::Client, webhook_url: String) -> Self {
        Self {
            client,
            webhook_url,
        }
    }
}

#[async_trait]
impl Notifier for SlackWebhook {
    fn channel(&self) -> &'static str {
        "slack"
    }

    async fn send(&self, message: &str) -> Result<(), DeliveryError> {
        let payload = serde_json::json!({
            "text": format!("<!channel> {message}"),
        });

        let response = self
            .client
            .post(&self.webhook_url)
            .form(&[("payload", payload.to_string())])
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

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn posts_structured_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/services/T000/B000"))
            .and(header(
                "content-type",
                "application/x-www-form-urlencoded",
            ))
            .and(body_string_contains("payload="))
            .and(body_string_contains("%3C%21channel%3E"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let notifier = SlackWebhook::new(
            reqwest::Client::new(),
            format!("{}/services/T000/B000", server.uri()),
        );
        notifier.send("https://example.com/market/DOGE/BTC").await.unwrap();
    }

    #[test]
    fn payload_is_valid_json() {
        // The original hand-concatenated payload was unbalanced JSON; the
        // structured encoder must always produce a parseable document.
        let payload = serde_json::json!({
            "text": format!("<!channel> {}", "msg with \"quotes\" and {braces}"),
        });
        let reparsed: serde_json::Value = serde_json::from_str(&payload.to_string()).unwrap();
        assert_eq!(
            reparsed["text"],
            "<!channel> msg with \"quotes\" and {braces}"
        );
    }

    #[tokio::test]
    async fn non_200_is_a_delivery_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let notifier = SlackWebhook::new(reqwest::Client::new(), server.uri());
        let err = notifier.send("listed").await.unwrap_err();
        assert!(matches!(err, DeliveryError::Status(404)));
    }
}
