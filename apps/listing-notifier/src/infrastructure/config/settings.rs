//! Notifier Configuration Settings
//!
//! Loaded once at startup from a TOML file (plus `LISTING_`-prefixed
//! environment-variable overrides) and held immutable for the process
//! lifetime. A missing or malformed config is fatal: the binary aborts
//! with a clear message instead of running with zeroed values.
//!
//! # File format
//!
//! ```toml
//! [general]
//! symbol = "DOGE"
//! slack_webhook_url = "https://hooks.slack.com/services/..."   # optional
//! line_token = "..."                                           # optional
//! access_wait_time_seconds = 60
//! notify_wait_time_seconds = 30
//!
//! [endpoints]          # optional, defaults to the production service
//! status_url = "https://www.coinexchange.io/api/v1/getcurrency"
//! market_url_base = "https://www.coinexchange.io/market"
//! push_api_url = "https://notify-api.line.me/api/notify"
//! request_timeout_seconds = 10
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::{InvalidSymbol, Symbol};

/// Configuration errors. All fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or parse the configuration file.
    #[error("failed to load config: {0}")]
    Load(#[from] config::ConfigError),

    /// The configured symbol is empty or whitespace.
    #[error(transparent)]
    InvalidSymbol(#[from] InvalidSymbol),
}

/// External endpoint settings.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    /// Listing-status endpoint, queried with `?ticker_code=SYMBOL`.
    #[serde(default = "default_status_url")]
    pub status_url: String,
    /// Base URL of the market page embedded in the announcement message.
    #[serde(default = "default_market_url_base")]
    pub market_url_base: String,
    /// Token-based push notification API endpoint.
    #[serde(default = "default_push_api_url")]
    pub push_api_url: String,
    /// Timeout applied to every outbound HTTP request.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            status_url: default_status_url(),
            market_url_base: default_market_url_base(),
            push_api_url: default_push_api_url(),
            request_timeout_seconds: default_request_timeout_seconds(),
        }
    }
}

impl EndpointSettings {
    /// Timeout for outbound HTTP requests.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

/// Raw `[general]` table as written in the config file.
#[derive(Debug, Deserialize)]
struct GeneralSettings {
    symbol: String,
    #[serde(default)]
    slack_webhook_url: Option<String>,
    #[serde(default)]
    line_token: Option<String>,
    #[serde(default = "default_access_wait_seconds")]
    access_wait_time_seconds: u64,
    #[serde(default = "default_notify_wait_seconds")]
    notify_wait_time_seconds: u64,
}

/// Raw file shape.
#[derive(Debug, Deserialize)]
struct RawSettings {
    general: GeneralSettings,
    #[serde(default)]
    endpoints: EndpointSettings,
}

/// Validated process configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Ticker symbol to watch, upper-cased.
    pub symbol: Symbol,
    /// Chat webhook URL. `None` disables the channel.
    pub slack_webhook_url: Option<String>,
    /// Push API bearer token. `None` disables the channel.
    pub line_token: Option<String>,
    /// Wait between poll attempts.
    pub poll_interval: Duration,
    /// Wait between local desktop notifications.
    pub notify_interval: Duration,
    /// External endpoint settings.
    pub endpoints: EndpointSettings,
}

impl Settings {
    /// Load and validate settings from a TOML file.
    ///
    /// Environment variables prefixed with `LISTING_` override file values
    /// (e.g. `LISTING_GENERAL__SYMBOL`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw: RawSettings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .add_source(config::Environment::with_prefix("LISTING").separator("__"))
            .build()?
            .try_deserialize()?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawSettings) -> Result<Self, ConfigError> {
        let symbol = Symbol::new(&raw.general.symbol)?;
        Ok(Self {
            symbol,
            slack_webhook_url: non_empty(raw.general.slack_webhook_url),
            line_token: non_empty(raw.general.line_token),
            poll_interval: Duration::from_secs(raw.general.access_wait_time_seconds),
            notify_interval: Duration::from_secs(raw.general.notify_wait_time_seconds),
            endpoints: raw.endpoints,
        })
    }
}

/// Default config path: `config.toml` next to the executable, falling back
/// to the working directory when the executable path is unavailable.
#[must_use]
pub fn default_config_path() -> PathBuf {
    executable_dir().join("config.toml")
}

pub(crate) fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Collapse an absent or empty credential to `None`.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn default_status_url() -> String {
    "https://www.coinexchange.io/api/v1/getcurrency".to_string()
}

fn default_market_url_base() -> String {
    "https://www.coinexchange.io/market".to_string()
}

fn default_push_api_url() -> String {
    "https://notify-api.line.me/api/notify".to_string()
}

const fn default_request_timeout_seconds() -> u64 {
    10
}

const fn default_access_wait_seconds() -> u64 {
    60
}

const fn default_notify_wait_seconds() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn full_config_loads() {
        let file = write_config(
            r#"
            [general]
            symbol = "doge"
            slack_webhook_url = "https://hooks.example.com/T000/B000"
            line_token = "token123"
            access_wait_time_seconds = 5
            notify_wait_time_seconds = 7

            [endpoints]
            status_url = "http://localhost:9000/getcurrency"
            request_timeout_seconds = 3
            "#,
        );

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.symbol.as_str(), "DOGE");
        assert_eq!(
            settings.slack_webhook_url.as_deref(),
            Some("https://hooks.example.com/T000/B000")
        );
        assert_eq!(settings.line_token.as_deref(), Some("token123"));
        assert_eq!(settings.poll_interval, Duration::from_secs(5));
        assert_eq!(settings.notify_interval, Duration::from_secs(7));
        assert_eq!(
            settings.endpoints.status_url,
            "http://localhost:9000/getcurrency"
        );
        assert_eq!(settings.endpoints.request_timeout(), Duration::from_secs(3));
        // Unspecified endpoint fields keep their defaults.
        assert_eq!(
            settings.endpoints.push_api_url,
            "https://notify-api.line.me/api/notify"
        );
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let file = write_config(
            r#"
            [general]
            symbol = "XRP"
            "#,
        );

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.symbol.as_str(), "XRP");
        assert!(settings.slack_webhook_url.is_none());
        assert!(settings.line_token.is_none());
        assert_eq!(settings.poll_interval, Duration::from_secs(60));
        assert_eq!(settings.notify_interval, Duration::from_secs(30));
        assert_eq!(
            settings.endpoints.status_url,
            "https://www.coinexchange.io/api/v1/getcurrency"
        );
    }

    #[test]
    fn empty_credentials_collapse_to_none() {
        let file = write_config(
            r#"
            [general]
            symbol = "XRP"
            slack_webhook_url = ""
            line_token = "   "
            "#,
        );

        let settings = Settings::load(file.path()).unwrap();
        assert!(settings.slack_webhook_url.is_none());
        assert!(settings.line_token.is_none());
    }

    #[test]
    fn empty_symbol_is_fatal() {
        let file = write_config(
            r#"
            [general]
            symbol = ""
            "#,
        );

        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSymbol(_)));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = Settings::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn malformed_toml_is_fatal() {
        let file = write_config("this is not toml [");
        let err = Settings::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }
}
