// Document-store REST client.
// Collections are addressed as {base}/{collection} and records as
// {base}/{collection}/{id}, with opaque string ids assigned by the store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::{AppError, AppResult};
use crate::http_config::HttpConfig;
use crate::models::{Event, Participant, Priority};
use crate::store::EventStore;
use crate::utils::logging;

const EVENTS_COLLECTION: &str = "events";

/// Wire form of a stored event document.
///
/// The store keeps the start instant as an RFC 3339 string under `date`,
/// matching the documents already in the collection; the domain type carries
/// a parsed `DateTime<Utc>` instead.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    name: String,
    date: String,
    description: String,
    priority: Priority,
    participants: Vec<Participant>,
    creator_id: String,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

impl EventDocument {
    fn from_event(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone(),
            date: event.start_at.to_rfc3339(),
            description: event.description.clone(),
            priority: event.priority,
            participants: event.participants.clone(),
            creator_id: event.creator_id.clone(),
        }
    }

    fn into_event(self) -> AppResult<Event> {
        let start_at = DateTime::parse_from_rfc3339(&self.date)
            .map_err(|e| {
                AppError::store_unavailable(format!(
                    "Malformed date '{}' in stored event: {}",
                    self.date, e
                ))
            })?
            .with_timezone(&Utc);

        Ok(Event {
            id: self.id,
            name: self.name,
            start_at,
            description: self.description,
            priority: self.priority,
            participants: self.participants,
            creator_id: self.creator_id,
        })
    }
}

pub struct RestStore {
    client: Client,
    base_url: String,
}

impl RestStore {
    pub fn new(base_url: impl Into<String>) -> AppResult<Self> {
        let client = HttpConfig::store_api().build_client()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// For tests that need a custom-built client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, EVENTS_COLLECTION)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, EVENTS_COLLECTION, id)
    }
}

/// Maps a non-success response to the store error taxonomy.
async fn check_status(response: reqwest::Response, what: &str) -> AppResult<reqwest::Response> {
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Err(AppError::not_found(what.to_string()));
    }
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unable to read error response".to_string());
        return Err(AppError::store_unavailable(format!(
            "HTTP {} on {}: {}",
            status, what, body
        )));
    }
    Ok(response)
}

#[async_trait]
impl EventStore for RestStore {
    async fn list_events(&self) -> AppResult<Vec<Event>> {
        let started = Instant::now();
        let response = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| AppError::store_unavailable(format!("list events: {}", e)))?;

        let documents: Vec<EventDocument> = check_status(response, "events")
            .await?
            .json()
            .await
            .map_err(|e| AppError::store_unavailable(format!("decode events: {}", e)))?;

        let events = documents
            .into_iter()
            .map(EventDocument::into_event)
            .collect::<AppResult<Vec<_>>>()?;

        logging::log_store_operation(
            "list",
            EVENTS_COLLECTION,
            started.elapsed().as_millis() as u64,
        );
        Ok(events)
    }

    async fn create_event(&self, event: &Event) -> AppResult<String> {
        let started = Instant::now();
        let document = EventDocument::from_event(event);
        let response = self
            .client
            .post(self.collection_url())
            .json(&document)
            .send()
            .await
            .map_err(|e| AppError::store_unavailable(format!("create event: {}", e)))?;

        let created: CreatedResponse = check_status(response, "events")
            .await?
            .json()
            .await
            .map_err(|e| AppError::store_unavailable(format!("decode create response: {}", e)))?;

        logging::log_store_operation(
            "create",
            EVENTS_COLLECTION,
            started.elapsed().as_millis() as u64,
        );
        Ok(created.id)
    }

    async fn update_event(&self, id: &str, event: &Event) -> AppResult<()> {
        let started = Instant::now();
        let document = EventDocument::from_event(event);
        let response = self
            .client
            .put(self.record_url(id))
            .json(&document)
            .send()
            .await
            .map_err(|e| AppError::store_unavailable(format!("update event {}: {}", id, e)))?;

        check_status(response, &format!("events/{}", id)).await?;

        logging::log_store_operation(
            "update",
            EVENTS_COLLECTION,
            started.elapsed().as_millis() as u64,
        );
        Ok(())
    }

    async fn delete_event(&self, id: &str) -> AppResult<()> {
        let started = Instant::now();
        let response = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| AppError::store_unavailable(format!("delete event {}: {}", id, e)))?;

        check_status(response, &format!("events/{}", id)).await?;

        logging::log_store_operation(
            "delete",
            EVENTS_COLLECTION,
            started.elapsed().as_millis() as u64,
        );
        Ok(())
    }
}
