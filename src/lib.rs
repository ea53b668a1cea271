// OpenAgenda Library
// Event scheduling and synchronization engine for a shared calendar:
// validates and persists dated events, overlays the fixed holiday table,
// and dispatches best-effort participant notifications on creation.

pub mod auth;
pub mod config;
pub mod directory;
pub mod engine;
pub mod error;
pub mod holidays;
pub mod http_config;
pub mod models;
pub mod notify;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use auth::{AuthProvider, Principal, StaticAuth};
pub use directory::{HttpDirectory, ParticipantDirectory};
pub use engine::{Draft, SchedulingEngine};
pub use error::{AppError, AppResult};
pub use models::*;
pub use notify::{EventNotice, HttpNotifier, Notifier};
pub use store::{EventStore, RestStore};

use std::sync::Arc;

use config::EngineConfig;

/// Builds a production engine wired to the configured remote endpoints.
///
/// The authentication provider is injected; this crate never owns session
/// state.
pub fn build_engine(
    config: &EngineConfig,
    auth: Arc<dyn AuthProvider>,
) -> AppResult<SchedulingEngine> {
    config.validate()?;
    let store = RestStore::new(config.store_url.as_str())?;
    let directory = HttpDirectory::new(config.notify_url.as_str())?;
    let notifier = HttpNotifier::new(config.notify_url.as_str())?;
    Ok(SchedulingEngine::new(
        Arc::new(store),
        Arc::new(directory),
        Arc::new(notifier),
        auth,
    ))
}
