//! HTTP client configuration module
//!
//! Centralized construction of reqwest clients with per-collaborator
//! timeout profiles. Neither client retries on its own; a failed call is
//! reported to the caller, which decides whether to resubmit.

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

use crate::error::{AppError, AppResult};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Connection timeout
    pub connect_timeout: Duration,
    /// Total request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(45),
        }
    }
}

impl HttpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile for document-store calls. Writes sit on the user's submit
    /// path, so timeouts are tighter than the default.
    pub fn store_api() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            timeout: Duration::from_secs(30),
        }
    }

    /// Profile for the notification service. Dispatch runs detached from the
    /// submit path, so a slower endpoint is tolerable.
    pub fn notifier() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(60),
        }
    }

    /// Build a reqwest client with this configuration
    pub fn build_client(&self) -> AppResult<Client> {
        ClientBuilder::new()
            .user_agent("OpenAgenda/1.0")
            .connect_timeout(self.connect_timeout)
            .timeout(self.timeout)
            .tcp_keepalive(Duration::from_secs(30))
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(2)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_profile_is_tighter_than_notifier() {
        assert!(HttpConfig::store_api().timeout < HttpConfig::notifier().timeout);
    }

    #[test]
    fn test_build_client() {
        assert!(HttpConfig::default().build_client().is_ok());
        assert!(HttpConfig::store_api().build_client().is_ok());
        assert!(HttpConfig::notifier().build_client().is_ok());
    }
}
