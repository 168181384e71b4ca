/// Utilities for date formatting
///
/// Provides consistent date formatting across the application
use chrono::NaiveDate;

/// Format date to DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Срок до следующего обслуживания относительно `today`
pub fn service_due_label(next_service_on: NaiveDate, today: NaiveDate) -> String {
    let days = (next_service_on - today).num_days();
    match days {
        0 => "сегодня".to_string(),
        d if d > 0 => format!("через {} дн.", d),
        d => format!("просрочено на {} дн.", -d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2024, 3, 15)), "15.03.2024");
    }

    #[test]
    fn test_service_due_label() {
        let today = date(2024, 3, 15);
        assert_eq!(service_due_label(date(2024, 3, 15), today), "сегодня");
        assert_eq!(service_due_label(date(2024, 3, 20), today), "через 5 дн.");
        assert_eq!(service_due_label(date(2024, 3, 12), today), "просрочено на 3 дн.");
    }
}
