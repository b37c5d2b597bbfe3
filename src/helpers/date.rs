//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse a content date.
///
/// The authoring tool writes `YYYY-MM-DD`; hand-edited entries sometimes
/// carry a time or use slashes, so those are accepted too.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }

    for fmt in [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive())
}

/// Format a date in full format (like "January 15, 2024")
pub fn full_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Format a raw content date, empty when missing or unparseable
pub fn display_date(raw: Option<&str>) -> String {
    raw.and_then(parse_date)
        .map(|d| full_date(&d))
        .unwrap_or_default()
}
