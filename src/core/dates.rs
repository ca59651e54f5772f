// src/core/dates.rs
//
// Sheet dates show up as ISO strings, US-style strings, full timestamps or
// raw spreadsheet serial day numbers. Everything is normalised to a
// `NaiveDate` / "YYYY-MM-DD".

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime};

const YMD: &str = "%Y-%m-%d";

/// Spreadsheet day 0.
fn serial_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or_default()
}

/// Monday that starts the last full week before `today`.
/// Monday itself counts as "this week", so it steps back 7 days.
pub fn last_full_week_monday(today: NaiveDate) -> NaiveDate {
    let offset = today.weekday().num_days_from_monday() as i64 + 7;
    today - Duration::days(offset)
}

/// Spreadsheet serial (days since 1899-12-30, fractional = time of day).
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    // Roughly ±27,000 years; keeps the millisecond count well inside i64.
    if !serial.is_finite() || !(-1e7..=1e7).contains(&serial) {
        return None;
    }
    let ms = (serial * 86_400_000.0).round() as i64;
    serial_epoch().checked_add_signed(Duration::milliseconds(ms))
}

/// Parse any of the date shapes the sheets produce.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(t, YMD) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.naive_utc().date());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(dt.date());
        }
    }
    for fmt in ["%m/%d/%Y", "%Y/%m/%d", "%d %b %Y", "%b %d, %Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(t, fmt) {
            return Some(d);
        }
    }
    None
}

/// "YYYY-MM-DD" or empty when the value can't be read as a date.
pub fn to_ymd(s: &str) -> String {
    parse_date(s)
        .map(|d| d.format(YMD).to_string())
        .unwrap_or_default()
}

pub fn serial_to_ymd(serial: f64) -> String {
    serial_to_date(serial)
        .map(|d| d.format(YMD).to_string())
        .unwrap_or_default()
}
