use chrono::{DateTime, NaiveDate};

pub const DEFAULT_CURRENCY: &str = "EUR";

/// Fixed display locale: German day.month.year. Unparsable input is shown
/// as-is rather than hidden.
pub fn format_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "–".to_string();
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return datetime.format("%d.%m.%Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%d.%m.%Y").to_string();
    }
    raw.to_string()
}

pub fn format_amount(amount: Option<f64>, currency: Option<&str>) -> String {
    let currency = currency
        .filter(|c| !c.trim().is_empty())
        .unwrap_or(DEFAULT_CURRENCY);
    format!("{:.2} {}", amount.unwrap_or(0.0), currency)
}

/// Fixed three-entry translation table for the workflow statuses. Anything
/// else passes through unchanged.
pub fn status_label(status: &str) -> String {
    match status {
        "Approved" => "Genehmigt".to_string(),
        "Rejected" => "Abgelehnt".to_string(),
        "Manual Review" => "Manuelle Prüfung".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_in_fixed_locale() {
        assert_eq!(format_date("2026-08-30T09:15:00Z"), "30.08.2026");
        assert_eq!(format_date("2026-08-30"), "30.08.2026");
    }

    #[test]
    fn unparsable_date_passes_through() {
        assert_eq!(format_date("letzte Woche"), "letzte Woche");
        assert_eq!(format_date(""), "–");
    }

    #[test]
    fn formats_amounts_with_two_decimals_and_currency() {
        assert_eq!(format_amount(Some(12.5), Some("CHF")), "12.50 CHF");
        assert_eq!(format_amount(Some(7.0), None), "7.00 EUR");
        assert_eq!(format_amount(None, Some("")), "0.00 EUR");
    }

    #[test]
    fn translates_known_statuses_and_passes_unknown_through() {
        assert_eq!(status_label("Approved"), "Genehmigt");
        assert_eq!(status_label("Rejected"), "Abgelehnt");
        assert_eq!(status_label("Manual Review"), "Manuelle Prüfung");
        assert_eq!(status_label("Archived"), "Archived");
    }
}
