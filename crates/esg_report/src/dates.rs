//! crates/esg_report/src/dates.rs
//! Date and clock strings shown on the pages.

use chrono::{DateTime, Utc};

/// Refresh period of the live clock.
pub const CLOCK_INTERVAL: std::time::Duration = std::time::Duration::from_secs(1);

/// Report date, day-month-year with the full English month name:
/// `15 October 2026`.
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%-d %B %Y").to_string()
}

/// Live clock line: `2026-10-15 09:04:05 UTC`.
pub fn utc_clock(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Successive clock lines one second apart, starting at `start`.
#[derive(Debug, Clone)]
pub struct ClockTicks {
    next: DateTime<Utc>,
}

impl ClockTicks {
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { next: start }
    }
}

impl Iterator for ClockTicks {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = utc_clock(&self.next);
        self.next += chrono::Duration::seconds(1);
        Some(line)
    }
}
