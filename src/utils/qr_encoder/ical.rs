use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use log::debug;

use crate::models::content::EventContent;

pub const PRODID: &str = "-//QRG//QR Code Generator//EN";

const ICAL_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

// `%#z` takes `Z`, `+hh`, `+hhmm` and `+hh:mm`
const ZONED_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y%m%dT%H%M%S%.f%#z",
    "%Y%m%dT%H%M%#z",
];

const NAIVE_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
];

/// Read an ISO-8601 timestamp, extended or basic format, seconds optional.
/// Values without an offset are taken as UTC.
pub fn parse_iso8601(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }
    ["%Y-%m-%d", "%Y%m%d"]
        .into_iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// `2024-12-12T20:00:00+02:00` -> `20241212T180000Z`
///
/// Unparseable input is compacted as-is (separators and fraction dropped)
/// so the event still carries whatever the user typed.
pub fn format_utc(value: &str) -> String {
    match parse_iso8601(value) {
        Some(dt) => dt.format(ICAL_UTC_FORMAT).to_string(),
        None => {
            debug!("Unparseable event date {:?}, passing it through", value);
            let compact: String = value
                .trim()
                .split('.')
                .next()
                .unwrap_or_default()
                .chars()
                .filter(|c| *c != '-' && *c != ':')
                .collect();
            if compact.is_empty() || compact.ends_with('Z') {
                compact
            } else {
                format!("{}Z", compact)
            }
        }
    }
}

fn escape_newlines(value: &str) -> String {
    value.replace("\r\n", "\n").replace('\n', "\\n")
}

pub fn encode(event: &EventContent) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODID),
        "BEGIN:VEVENT".to_string(),
        format!("DTSTART:{}", format_utc(&event.start_date)),
    ];

    if let Some(end_date) = event.end_date.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("DTEND:{}", format_utc(end_date)));
    }

    lines.push(format!("SUMMARY:{}", event.title));

    if let Some(description) = event.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("DESCRIPTION:{}", escape_newlines(description)));
    }

    if let Some(location) = event.location.as_ref().filter(|l| !l.name.is_empty()) {
        let mut parts = vec![location.name.as_str()];
        if let Some(address) = location.address.as_deref().filter(|a| !a.is_empty()) {
            parts.push(address);
        }
        lines.push(format!("LOCATION:{}", parts.join(", ")));
    }

    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());
    lines.join("\n")
}
