// src/clock.rs
// UTC clock for the time-request branch.

use chrono::{DateTime, SecondsFormat, Utc};

/// Renders an instant as extended ISO-8601 with a literal `Z` designator and
/// whole-second precision, e.g. `2024-01-01T12:00:00Z`.
pub fn format_utc(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Current UTC time, truncated to whole seconds.
pub fn now_utc() -> String {
    format_utc(Utc::now())
}
