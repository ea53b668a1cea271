//! Engine configuration.
//!
//! Endpoints for the two remote collaborators: the document store and the
//! notification service (which also serves the participant directory).

use url::Url;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL of the document-store API (collections live under it).
    pub store_url: String,
    /// Notification-service endpoint; POST dispatches, GET reads the
    /// participant directory.
    pub notify_url: String,
}

impl EngineConfig {
    pub fn new(store_url: impl Into<String>, notify_url: impl Into<String>) -> Self {
        Self {
            store_url: store_url.into(),
            notify_url: notify_url.into(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_endpoint("store", &self.store_url)?;
        validate_endpoint("notification", &self.notify_url)?;
        Ok(())
    }
}

fn validate_endpoint(name: &str, raw: &str) -> AppResult<()> {
    if raw.trim().is_empty() {
        return Err(AppError::config(format!("{} URL cannot be empty", name)));
    }

    let parsed = Url::parse(raw)
        .map_err(|e| AppError::config(format!("Invalid {} URL: {}", name, e)))?;

    if parsed.scheme() != "https" {
        return Err(AppError::config(format!(
            "{} URL must use HTTPS, got '{}://'",
            name,
            parsed.scheme()
        )));
    }

    let host = parsed
        .host_str()
        .ok_or_else(|| AppError::config(format!("{} URL has no host", name)))?;

    // Both endpoints are public services; a local address is a
    // misconfiguration, not a deployment mode.
    if host == "localhost"
        || host.starts_with("127.")
        || host.starts_with("192.168.")
        || host.starts_with("10.")
        || host.starts_with("172.16.")
    {
        return Err(AppError::config(format!(
            "{} URL cannot point to a local address",
            name
        )));
    }

    Ok(())
}
