//! Configuration loading and validation.

pub mod settings;

pub use settings::{ConfigError, EndpointSettings, Settings, default_config_path};
