use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An immutable calendar annotation merged into the reconciled view.
///
/// Holidays are never persisted and never reach the store; their ids are
/// derived from the date so every session regenerates identical values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub description: String,
}

impl Holiday {
    pub fn new(title: &str, date: NaiveDate, description: &str) -> Self {
        Self {
            id: Self::id_for(date),
            title: title.to_string(),
            date,
            description: description.to_string(),
        }
    }

    /// Synthetic id for the holiday on `date`, e.g. `holiday-2025-12-25`.
    pub fn id_for(date: NaiveDate) -> String {
        format!("holiday-{}", date.format("%Y-%m-%d"))
    }

    /// Whether `id` names a holiday entry rather than a stored event.
    pub fn is_holiday_id(id: &str) -> bool {
        id.starts_with("holiday-")
    }
}
