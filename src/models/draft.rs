use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::event::{Event, Priority};
use super::participant::Participant;

/// A submitted event candidate, as it arrives from the form.
///
/// Carries no id; whether a submission creates or replaces a record is the
/// engine's edit-session concern, not the draft's.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventDraft {
    pub name: String,
    /// Time of day as `HH:mm`.
    pub time: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub priority: Option<Priority>,
    pub participants: Vec<Participant>,
}

impl EventDraft {
    /// Checks required fields and reports the first missing one.
    ///
    /// The check order is fixed: name, time, description, date, priority,
    /// participants. One actionable message at a time; errors are never
    /// aggregated.
    pub fn validate(&self) -> AppResult<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Please fill in the event name."));
        }
        if self.time.trim().is_empty() {
            return Err(AppError::validation("Please fill in the event time."));
        }
        if self.description.trim().is_empty() {
            return Err(AppError::validation("Please fill in the event description."));
        }
        if self.date.is_none() {
            return Err(AppError::validation("Please select the event date."));
        }
        if self.priority.is_none() {
            return Err(AppError::validation("Please select the event priority."));
        }
        if self.participants.is_empty() {
            return Err(AppError::validation("Please select at least one participant."));
        }
        Ok(())
    }

    /// Builds a complete event from a validated draft.
    ///
    /// Callers run `validate` first; a draft that slipped through with
    /// missing fields still fails here rather than producing a partial
    /// record.
    pub fn into_event(self, creator_id: &str) -> AppResult<Event> {
        self.validate()?;
        let date = self.date.expect("validated draft has a date");
        let priority = self.priority.expect("validated draft has a priority");
        let start_at = compose_start(date, &self.time)?;

        Ok(Event {
            id: None,
            name: self.name,
            start_at,
            description: self.description,
            priority,
            participants: self.participants,
            creator_id: creator_id.to_string(),
        })
    }
}

/// Combines a calendar date and an `HH:mm` time-of-day into one instant.
///
/// The date portion is taken as given, never shifted through the caller's
/// local zone; the time string only sets hour and minute, with seconds
/// zeroed.
pub fn compose_start(date: NaiveDate, time: &str) -> AppResult<DateTime<Utc>> {
    // "%H:%M" carries no seconds, so the composed instant is already
    // second-aligned.
    let time_of_day = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid event time: {}", time)))?;
    Ok(date.and_time(time_of_day).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn participant() -> Participant {
        Participant {
            id: "u1".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Souza".to_string(),
            email: "ana@example.com".to_string(),
        }
    }

    fn complete_draft() -> EventDraft {
        EventDraft {
            name: "Reunião".to_string(),
            time: "14:00".to_string(),
            description: "Pauta X".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 6, 10),
            priority: Some(Priority::High),
            participants: vec![participant()],
        }
    }

    #[test]
    fn test_complete_draft_is_accepted() {
        assert!(complete_draft().validate().is_ok());
    }

    #[test]
    fn test_missing_name_reported_first() {
        let draft = EventDraft {
            name: "  ".to_string(),
            time: String::new(),
            ..complete_draft()
        };
        // Both name and time are missing; only name is reported.
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_field_order_is_fixed() {
        let mut draft = complete_draft();
        draft.time = String::new();
        draft.description = String::new();
        assert!(draft.validate().unwrap_err().to_string().contains("time"));

        let mut draft = complete_draft();
        draft.description = String::new();
        draft.date = None;
        assert!(draft
            .validate()
            .unwrap_err()
            .to_string()
            .contains("description"));

        let mut draft = complete_draft();
        draft.date = None;
        draft.priority = None;
        assert!(draft.validate().unwrap_err().to_string().contains("date"));

        let mut draft = complete_draft();
        draft.priority = None;
        draft.participants.clear();
        assert!(draft
            .validate()
            .unwrap_err()
            .to_string()
            .contains("priority"));
    }

    #[test]
    fn test_empty_participants_rejected_last() {
        let mut draft = complete_draft();
        draft.participants.clear();
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("participant"));
    }

    #[test]
    fn test_compose_start_sets_hour_and_minute() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let start = compose_start(date, "14:30").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 6, 10, 14, 30, 0).unwrap());
    }

    #[test]
    fn test_compose_start_zeroes_seconds() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let start = compose_start(date, "09:05").unwrap();
        assert_eq!(start.second(), 0);
    }

    #[test]
    fn test_compose_start_rejects_malformed_time() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert!(matches!(
            compose_start(date, "2pm"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_into_event_builds_complete_record() {
        let event = complete_draft().into_event("uid-1").unwrap();
        assert!(event.id.is_none());
        assert_eq!(event.creator_id, "uid-1");
        assert_eq!(
            event.start_at,
            Utc.with_ymd_and_hms(2025, 6, 10, 14, 0, 0).unwrap()
        );
        assert_eq!(event.priority, Priority::High);
        assert_eq!(event.participants.len(), 1);
    }

    #[test]
    fn test_into_event_rejects_incomplete_draft() {
        let mut draft = complete_draft();
        draft.priority = None;
        assert!(draft.into_event("uid-1").is_err());
    }
}
