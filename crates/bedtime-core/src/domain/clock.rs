//! Time-of-day parsing and formatting.
//!
//! Wake times and bedtimes are plain `time::Time` values; only the hour and
//! minute components are semantically relevant. The `HH:MM` 24-hour text form
//! is used everywhere a time crosses a program boundary (flags, config,
//! output).

use anyhow::{Context, Result};
use time::macros::format_description;
use time::Time;

/// The default wake time when neither flags nor config provide one.
#[must_use]
pub fn default_wake_time() -> Time {
    // 07:00, mirroring the original form's initial state.
    Time::from_hms(7, 0, 0).unwrap_or(Time::MIDNIGHT)
}

/// Parse a `HH:MM` 24-hour time of day.
///
/// # Errors
///
/// Returns an error if the string is not a valid `HH:MM` time.
pub fn parse_clock(s: &str) -> Result<Time> {
    let format = format_description!("[hour]:[minute]");
    Time::parse(s, &format).with_context(|| format!("'{s}' is not a valid HH:MM time"))
}

/// Format a time of day as `HH:MM`, dropping seconds.
#[must_use]
pub fn format_clock(t: Time) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}
