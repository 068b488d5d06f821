//! Money formatting for order views.

/// Format a monetary amount with exactly two decimal places.
pub fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a monetary amount as a dollar string, e.g. `$19.98`.
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(19.98), "19.98");
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(5.0), "5.00");
        assert_eq!(format_amount(2.999), "3.00");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(19.98), "$19.98");
        assert_eq!(format_usd(15.0), "$15.00");
    }
}
