/// Sustained I/O rate over a session.
use crate::model::{size::gib, FileTotals};
use serde::Serialize;
use std::time::Duration;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IoRate {
    pub read_bytes_per_sec: f64,
    pub write_bytes_per_sec: f64,
    /// GiB per day at the observed rate.
    pub read_gib_per_day: f64,
    pub write_gib_per_day: f64,
}

impl IoRate {
    /// `None` for a zero-length session.
    pub fn from_totals(total: FileTotals, duration: Duration) -> Option<Self> {
        let secs = duration.as_secs_f64();
        if secs <= 0.0 {
            return None;
        }
        let read = total.read as f64 / secs;
        let write = total.written as f64 / secs;
        Some(Self {
            read_bytes_per_sec: read,
            write_bytes_per_sec: write,
            read_gib_per_day: gib(read * SECONDS_PER_DAY),
            write_gib_per_day: gib(write * SECONDS_PER_DAY),
        })
    }
}
