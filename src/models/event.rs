use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// Event priority.
///
/// The wire labels are the Portuguese strings the store's existing documents
/// carry, so decoding old records keeps working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Baixa")]
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "Alta",
            Priority::Medium => "Média",
            Priority::Low => "Baixa",
        }
    }
}

/// A user-created calendar event.
///
/// `id` is assigned by the store on create and absent before then.
/// `creator_id` is set once from the acting principal and never mutated;
/// updates are full-record replacements keyed by `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: Option<String>,
    pub name: String,
    pub start_at: DateTime<Utc>,
    pub description: String,
    pub priority: Priority,
    pub participants: Vec<Participant>,
    pub creator_id: String,
}

impl Event {
    /// Calendar-date portion as `DD/MM/YYYY`, the format the notification
    /// service expects.
    pub fn date_label(&self) -> String {
        self.start_at.format("%d/%m/%Y").to_string()
    }

    /// Time-of-day portion as `HH:mm`.
    pub fn time_label(&self) -> String {
        self.start_at.format("%H:%M").to_string()
    }

    pub fn participant_emails(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.email.clone()).collect()
    }
}
