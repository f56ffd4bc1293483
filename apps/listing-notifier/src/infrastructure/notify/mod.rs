//! Notification channel adapters.
//!
//! Remote channels (Slack webhook, LINE push) implement the [`Notifier`]
//! port; the desktop sink implements [`LocalAlert`]. A channel whose
//! credential is unset or empty is never constructed, so no network call
//! can be attempted for it.

pub mod desktop;
pub mod line;
pub mod slack;

use std::sync::Arc;

use crate::application::ports::{DeliveryError, Notifier};
use crate::infrastructure::config::Settings;

pub use desktop::DesktopAlert;
pub use line::LinePush;
pub use slack::SlackWebhook;

/// Build the remote notification channels configured in settings.
///
/// Channels with missing credentials are skipped with a debug log line.
pub fn build_remote_notifiers(settings: &Settings) -> Result<Vec<Arc<dyn Notifier>>, DeliveryError> {
    let client = reqwest::Client::builder()
        .timeout(settings.endpoints.request_timeout())
        .build()
        .map_err(|e| DeliveryError::Network(e.to_string()))?;

    let mut notifiers: Vec<Arc<dyn Notifier>> = Vec::new();

    match &settings.slack_webhook_url {
        Some(url) => {
            notifiers.push(Arc::new(SlackWebhook::new(client.clone(), url.clone())));
        }
        None => tracing::debug!("slack webhook URL not configured, channel skipped"),
    }

    match &settings.line_token {
        Some(token) => {
            notifiers.push(Arc::new(LinePush::new(
                client,
                settings.endpoints.push_api_url.clone(),
                token.clone(),
            )));
        }
        None => tracing::debug!("line token not configured, channel skipped"),
    }

    Ok(notifiers)
}
