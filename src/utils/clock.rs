use chrono::{Local, NaiveDateTime};

/// Format a wall-clock time for the page header
///
/// Produces e.g. `"Sunday, Jan 5, 2025, 3:07 PM"`: 12-hour clock, unpadded
/// hour, zero-padded minutes.
pub fn format_clock(time: NaiveDateTime) -> String {
    time.format("%A, %b %-d, %Y, %-I:%M %p").to_string()
}

/// Current local time formatted for the page header
pub fn current_clock() -> String {
    format_clock(Local::now().naive_local())
}
