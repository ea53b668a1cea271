use chrono::{DateTime, Utc};
use serde::Serialize;

use super::event::Event;
use super::holiday::Holiday;

/// One element of the reconciled view: a stored event or a holiday overlay
/// entry.
///
/// The discriminator survives serialization so presentation code can refuse
/// edit/delete affordances for holidays structurally instead of sniffing id
/// prefixes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CalendarEntry {
    Event(Event),
    Holiday(Holiday),
}

impl CalendarEntry {
    pub fn id(&self) -> Option<&str> {
        match self {
            CalendarEntry::Event(e) => e.id.as_deref(),
            CalendarEntry::Holiday(h) => Some(h.id.as_str()),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            CalendarEntry::Event(e) => &e.name,
            CalendarEntry::Holiday(h) => &h.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            CalendarEntry::Event(e) => &e.description,
            CalendarEntry::Holiday(h) => &h.description,
        }
    }

    /// Instant used for ordering the view. Holidays sort at midnight of
    /// their date.
    pub fn starts_at(&self) -> DateTime<Utc> {
        match self {
            CalendarEntry::Event(e) => e.start_at,
            CalendarEntry::Holiday(h) => h
                .date
                .and_hms_opt(0, 0, 0)
                .expect("midnight is a valid time")
                .and_utc(),
        }
    }

    pub fn is_holiday(&self) -> bool {
        matches!(self, CalendarEntry::Holiday(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;
    use chrono::{NaiveDate, TimeZone};

    fn event_entry() -> CalendarEntry {
        CalendarEntry::Event(Event {
            id: Some("ev-1".to_string()),
            name: "Planejamento".to_string(),
            start_at: Utc.with_ymd_and_hms(2025, 5, 1, 9, 30, 0).unwrap(),
            description: "Sprint".to_string(),
            priority: Priority::Medium,
            participants: vec![],
            creator_id: "uid-1".to_string(),
        })
    }

    fn holiday_entry() -> CalendarEntry {
        CalendarEntry::Holiday(Holiday::new(
            "Dia do Trabalho",
            NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
            "Feriado Nacional",
        ))
    }

    #[test]
    fn test_discriminator_survives_serialization() {
        let json = serde_json::to_string(&holiday_entry()).unwrap();
        assert!(json.contains("\"kind\":\"holiday\""));
        let json = serde_json::to_string(&event_entry()).unwrap();
        assert!(json.contains("\"kind\":\"event\""));
    }

    #[test]
    fn test_holiday_sorts_at_midnight() {
        let holiday = holiday_entry();
        let event = event_entry();
        assert!(holiday.starts_at() < event.starts_at());
        assert_eq!(
            holiday.starts_at(),
            Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_entry_accessors() {
        let entry = holiday_entry();
        assert!(entry.is_holiday());
        assert_eq!(entry.id(), Some("holiday-2025-05-01"));
        assert_eq!(entry.title(), "Dia do Trabalho");
        assert!(!event_entry().is_holiday());
    }
}
