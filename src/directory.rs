//! Participant directory.
//!
//! Selection candidates come from the user directory served by the
//! notification-service endpoint (same URL and credential as dispatch, read
//! with GET). A failed fetch degrades to an empty candidate list; it never
//! blocks event operations.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::Participant;

#[derive(Debug, Deserialize)]
struct DirectoryResponse {
    users: Vec<Participant>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParticipantDirectory: Send + Sync {
    async fn list_participants(&self, token: &str) -> AppResult<Vec<Participant>>;
}

pub struct HttpDirectory {
    client: Client,
    url: String,
}

impl HttpDirectory {
    pub fn new(url: impl Into<String>) -> AppResult<Self> {
        let client = HttpConfig::notifier().build_client()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ParticipantDirectory for HttpDirectory {
    async fn list_participants(&self, token: &str) -> AppResult<Vec<Participant>> {
        let response = self
            .client
            .get(&self.url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| AppError::directory(format!("directory fetch: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());
            return Err(AppError::directory(format!(
                "directory fetch returned HTTP {}: {}",
                status, body
            )));
        }

        let directory: DirectoryResponse = response
            .json()
            .await
            .map_err(|e| AppError::directory(format!("decode directory: {}", e)))?;

        log::debug!("Directory returned {} participants", directory.users.len());
        Ok(directory.users)
    }
}
