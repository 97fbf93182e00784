//! Time related utils.
//!
//! Signing always works on a [`DateTime`] captured once per request, so every
//! formatted representation below is derived from the same instant.

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create datetime of now.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format time into date: `20220301`
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format time into ISO8601: `20220313T072004Z`
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Format time into ISO8601 with separators: `2022-03-13T07:20:04Z`
///
/// This is the layout expected by the `Timestamp` query parameter.
pub fn format_iso8601_extended(t: DateTime) -> String {
    t.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}
