//! Infrastructure layer - Adapters and external integrations.

pub mod config;
pub mod exchange;
pub mod notify;
pub mod telemetry;
