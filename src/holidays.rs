//! Static holiday overlay.
//!
//! A fixed reference table merged into the reconciled view. Holidays are
//! never persisted and never editable; the engine drops any mutation aimed
//! at a holiday id.

use chrono::NaiveDate;

use crate::models::Holiday;

// Brazilian holidays, 2025 reference list.
const HOLIDAYS_2025: &[(&str, (i32, u32, u32), &str)] = &[
    ("Carnaval", (2025, 2, 12), "Feriado Nacional"),
    ("Sexta-feira Santa", (2025, 3, 28), "Feriado Nacional"),
    ("Municipal", (2025, 4, 4), "Aniversário de Inocência"),
    ("Tiradentes", (2025, 4, 21), "Feriado Nacional"),
    ("Dia do Trabalho", (2025, 5, 1), "Feriado Nacional"),
    ("Independência do Brasil", (2025, 9, 7), "Feriado Nacional"),
    ("Nossa Senhora Aparecida", (2025, 10, 12), "Feriado Nacional"),
    ("Finados", (2025, 11, 2), "Feriado Nacional"),
    ("Proclamação da República", (2025, 11, 15), "Feriado Nacional"),
    ("Natal", (2025, 12, 25), "Feriado Nacional"),
    ("Confraternização Universal", (2025, 12, 31), "Ano Novo"),
];

/// Returns the holiday overlay, identical on every call.
pub fn list_holidays() -> Vec<Holiday> {
    HOLIDAYS_2025
        .iter()
        .map(|(title, (y, m, d), description)| {
            let date = NaiveDate::from_ymd_opt(*y, *m, *d)
                .expect("holiday table contains valid dates");
            Holiday::new(title, date, description)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_has_all_reference_holidays() {
        assert_eq!(list_holidays().len(), 11);
    }

    #[test]
    fn test_overlay_is_deterministic() {
        assert_eq!(list_holidays(), list_holidays());
    }

    #[test]
    fn test_ids_are_date_derived() {
        let holidays = list_holidays();
        let natal = holidays.iter().find(|h| h.title == "Natal").unwrap();
        assert_eq!(natal.id, "holiday-2025-12-25");
    }

    #[test]
    fn test_every_id_is_recognized_as_holiday() {
        for holiday in list_holidays() {
            assert!(Holiday::is_holiday_id(&holiday.id));
        }
    }
}
