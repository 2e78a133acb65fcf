/// Time-of-day parsing and session duration.
///
/// Process Monitor exports wall-clock time without a date, in the locale's
/// 12- or 24-hour form with a 7-digit fraction (`3:04:05.1234567 PM`).
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;
use std::time::Duration;

const FORMATS: [&str; 2] = ["%I:%M:%S%.f %p", "%H:%M:%S%.f"];

/// Parse a `Time of Day` cell.
pub fn parse_time_of_day(text: &str) -> Option<NaiveTime> {
    let text = text.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(text, fmt).ok())
}

/// First and last timestamps of the events that were processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSpan {
    pub first: NaiveTime,
    pub last: NaiveTime,
}

impl SessionSpan {
    pub fn starting_at(time: NaiveTime) -> Self {
        Self {
            first: time,
            last: time,
        }
    }

    /// Wall-clock length of the session. Traces carry no date, so a last
    /// timestamp earlier than the first means midnight was crossed once.
    pub fn duration(&self) -> Duration {
        let mut delta = self.last - self.first;
        if delta < TimeDelta::zero() {
            delta += TimeDelta::days(1);
        }
        delta.to_std().unwrap_or_default()
    }
}
