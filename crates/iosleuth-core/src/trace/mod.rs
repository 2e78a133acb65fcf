/// Trace input: Process Monitor CSV exports.
///
/// Two exports are understood:
///
/// - the main event log ([`TraceReader`]), one row per filesystem operation;
/// - the File Summary ([`SummaryReader`]), one row per path with cumulative
///   read/write byte counts.
///
/// Both are read as streams; only the current row is held in memory.
pub mod detail;
pub mod reader;
pub mod summary;
pub mod time;

pub use detail::{parse_grouped_u64, Detail};
pub use reader::TraceReader;
pub use summary::{SummaryReader, SummaryRow};
pub use time::{parse_time_of_day, SessionSpan};

use crate::error::TraceError;
use chrono::NaiveTime;

/// The `Result` value Process Monitor writes for a successful operation.
pub const SUCCESS: &str = "SUCCESS";

/// Kind of filesystem operation, as far as byte accounting cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Read,
    Write,
    Rename,
    Other,
}

impl Operation {
    /// Map a Process Monitor `Operation` cell.
    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "ReadFile" => Self::Read,
            "WriteFile" => Self::Write,
            "SetRenameInformationFile" => Self::Rename,
            _ => Self::Other,
        }
    }

    /// Only reads and writes carry a byte length.
    #[inline]
    pub fn transfers_bytes(self) -> bool {
        matches!(self, Self::Read | Self::Write)
    }
}

/// One row of the event log. Consumed once by the ingestion pass.
#[derive(Debug, Clone)]
pub struct Event {
    /// 1-based row number in the CSV file (header is row 1).
    pub record: u64,
    pub time: NaiveTime,
    pub operation: Operation,
    pub path: String,
    pub succeeded: bool,
    pub detail: Detail,
}

impl Event {
    /// Bytes moved by a read or write, from the detail's `Length` field.
    pub fn byte_length(&self) -> Result<u64, TraceError> {
        let raw = self
            .detail
            .get("Length")
            .ok_or_else(|| TraceError::MissingField {
                record: self.record,
                field: "Length".into(),
            })?;
        parse_grouped_u64(raw).ok_or_else(|| TraceError::InvalidLength {
            record: self.record,
            value: raw.to_owned(),
        })
    }

    /// Destination path of a rename. A rename without one means the trace
    /// cannot be trusted.
    pub fn rename_target(&self) -> Result<&str, TraceError> {
        match self.detail.get("FileName") {
            Some(target) if !target.is_empty() => Ok(target),
            _ => Err(TraceError::MalformedRename {
                record: self.record,
                path: self.path.clone(),
            }),
        }
    }

    /// Bytes read and written by this event: `(read, written)`.
    ///
    /// Failed operations, non-transfer operations, and (when
    /// `count_paging_io` is off) paging I/O contribute nothing; the length
    /// field is only parsed when it would be counted.
    pub fn transferred(&self, count_paging_io: bool) -> Result<(u64, u64), TraceError> {
        if !self.succeeded || !self.operation.transfers_bytes() {
            return Ok((0, 0));
        }
        if !count_paging_io && self.detail.is_paging_io() {
            return Ok((0, 0));
        }
        let len = self.byte_length()?;
        Ok(match self.operation {
            Operation::Read => (len, 0),
            _ => (0, len),
        })
    }
}
