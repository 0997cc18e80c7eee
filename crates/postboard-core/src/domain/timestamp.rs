//! Human-readable post timestamps, e.g. `Oct 17, 2026, 03:04 PM`.

use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

pub const EDITED_SUFFIX: &str = " (edited)";

/// Format an instant in the en-US medium style with a two-digit 12-hour clock.
pub fn format<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// The current local time, formatted.
pub fn now() -> String {
    format(&Local::now())
}

pub fn edited(timestamp: String) -> String {
    if is_edited(&timestamp) {
        return timestamp;
    }
    timestamp + EDITED_SUFFIX
}

pub fn is_edited(timestamp: &str) -> bool {
    timestamp.ends_with(EDITED_SUFFIX)
}
