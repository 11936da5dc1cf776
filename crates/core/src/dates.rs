use chrono::{DateTime, NaiveDate, Utc};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Parses a backend date string into a calendar date.
///
/// Plain dates carry no zone and are taken as-is. RFC 3339 timestamps are
/// converted to UTC before the date is taken, so the result never depends on
/// the host's local offset.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Utc).date_naive())
        })
}

/// Day picker label, e.g. `"Fri, Jan 10"`.
pub fn short_label(value: &str) -> String {
    label(value, "%a, %b %-d")
}

/// Full date label, e.g. `"Jan 10, 2025"`.
pub fn full_label(value: &str) -> String {
    label(value, "%b %-d, %Y")
}

// Unparsable input is echoed back unchanged.
fn label(value: &str, format: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format(format).to_string(),
        None => value.to_string(),
    }
}
