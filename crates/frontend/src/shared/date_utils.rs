//! Consistent date/time formatting across the application.

use chrono::NaiveDateTime;

/// Format a backend timestamp for display.
/// Example: 2024-03-15T14:02:26 -> "2024-03-15 14:02"
pub fn format_timestamp(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_format_timestamp() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(14, 2, 26)
            .unwrap();
        assert_eq!(format_timestamp(dt), "2024-03-15 14:02");
    }
}
