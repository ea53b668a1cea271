//! Store client: stateless transport to the remote document store.
//!
//! The store keeps the persisted event collection; this module only moves
//! records back and forth. No call retries on its own; every operation is
//! independently retryable by the caller, and the engine decides what a
//! failure means.

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::Event;

pub mod rest;

pub use rest::RestStore;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Full collection fetch, no paging.
    async fn list_events(&self) -> AppResult<Vec<Event>>;

    /// Persists a new event and returns the store-assigned id. The given
    /// event carries no id; either the record exists remotely afterwards or
    /// the call failed without partial effect.
    async fn create_event(&self, event: &Event) -> AppResult<String>;

    /// Full replacement of the remote record. `NotFound` if the id no longer
    /// exists.
    async fn update_event(&self, id: &str, event: &Event) -> AppResult<()>;

    /// Removes the record. Reports `NotFound` for an already-deleted id; the
    /// caller decides whether that matters.
    async fn delete_event(&self, id: &str) -> AppResult<()>;
}
