//! Notification dispatcher.
//!
//! Fires a one-shot alert to the notification service when an event is
//! created, never on update or delete. Dispatch is detached from the create
//! transaction: its failure is logged and absorbed, and the created event is
//! reported as committed regardless.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::Event;
use crate::utils::logging;

/// Wire payload accepted by the notification service.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EventNotice {
    pub event_name: String,
    pub event_description: String,
    /// `DD/MM/YYYY`
    pub event_date: String,
    /// `HH:mm`
    pub event_time: String,
    pub participant_emails: Vec<String>,
}

impl EventNotice {
    pub fn for_event(event: &Event) -> Self {
        Self {
            event_name: event.name.clone(),
            event_description: event.description.clone(),
            event_date: event.date_label(),
            event_time: event.time_label(),
            participant_emails: event.participant_emails(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn dispatch(&self, token: &str, notice: &EventNotice) -> AppResult<()>;
}

pub struct HttpNotifier {
    client: Client,
    url: String,
}

impl HttpNotifier {
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
impl Notifier for HttpNotifier {
    async fn dispatch(&self, token: &str, notice: &EventNotice) -> AppResult<()> {
        let response = self
            .client
            .post(&self.url)
            .bearer_auth(token)
            .json(notice)
            .send()
            .await
            .map_err(|e| AppError::notification(format!("dispatch request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error response".to_string());
            return Err(AppError::notification(format!(
                "dispatch returned HTTP {}: {}",
                status, body
            )));
        }

        Ok(())
    }
}

/// Detaches a dispatch onto the runtime and absorbs its outcome.
///
/// The returned handle is for tests that need to await completion; the
/// engine drops it, so the create operation finishes without waiting on the
/// notification service.
pub fn spawn_dispatch(
    notifier: Arc<dyn Notifier>,
    token: String,
    notice: EventNotice,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let recipients = notice.participant_emails.len();
        match notifier.dispatch(&token, &notice).await {
            Ok(()) => {
                logging::log_dispatch_result(&notice.event_name, recipients, "delivered");
            }
            Err(e) => {
                // Swallowed: the event is already committed and a failed
                // alert must not unwind it or reach the user flow.
                log::error!(
                    "Notification dispatch for '{}' failed: {}",
                    notice.event_name,
                    e
                );
            }
        }
    })
}
