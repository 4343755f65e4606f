//! Time formatting and the three-line text block the overlay renders.

use chrono::{DateTime, Local, NaiveDateTime};

/// Zones monitored next to the local clock. The list is fixed.
pub const ZONE_LISBON: &str = "Europe/Lisbon";
pub const ZONE_NEW_YORK: &str = "America/New_York";

/// Shown in a zone's slot when its startup fetch failed.
pub const ERROR_SENTINEL: &str = "Error";

/// Remote wall-clock values captured once at startup. They are re-formatted
/// on every tick but never advanced or re-fetched, so they drift from the
/// true remote time over the process lifetime. `None` marks a failed fetch.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RemoteTimes {
    pub lisbon: Option<NaiveDateTime>,
    pub new_york: Option<NaiveDateTime>,
}

/// Parses the `formatted` field of a time-lookup response. The service
/// reports a local timestamp, sometimes with a UTC offset attached; the
/// offset is dropped because the wall-clock fields are already zone-local.
pub fn parse_formatted(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.naive_local())
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"))
}

pub fn local_time_string(now: DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

fn slot(time: Option<NaiveDateTime>) -> String {
    match time {
        Some(t) => t.format("%H:%M:%S").to_string(),
        None => ERROR_SENTINEL.to_string(),
    }
}

/// The full label text: local time first, then the two frozen remote slots.
pub fn display_block(local: &str, remote: &RemoteTimes) -> String {
    format!(
        "Local: {local}\nLisboa: {}\nManhattan: {}",
        slot(remote.lisbon),
        slot(remote.new_york),
    )
}
