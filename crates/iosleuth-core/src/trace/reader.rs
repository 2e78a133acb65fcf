/// Streaming reader for the Process Monitor event log.
///
/// Columns are located by header name on the first row, so exports with
/// extra or reordered columns work unchanged. A single `StringRecord` buffer
/// is reused for every row.
use super::detail::Detail;
use super::time::parse_time_of_day;
use super::{Event, Operation, SUCCESS};
use crate::config::ColumnNames;
use crate::error::TraceError;
use csv::StringRecord;
use std::io::Read;
use tracing::debug;

/// Find `name` in the header row. A UTF-8 BOM on the first header is
/// tolerated.
pub(crate) fn column_index(headers: &StringRecord, name: &str) -> Result<usize, TraceError> {
    headers
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}').trim() == name)
        .ok_or_else(|| TraceError::MissingColumn {
            name: name.to_owned(),
        })
}

/// Open a CSV stream and return its header row, failing on empty input.
pub(crate) fn open_csv<R: Read>(
    reader: R,
) -> Result<(csv::Reader<R>, StringRecord), TraceError> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers = csv.headers()?.clone();
    if headers.is_empty() {
        return Err(TraceError::EmptyTrace);
    }
    Ok((csv, headers))
}

/// Fetch a cell, reporting a short row as a missing field.
pub(crate) fn cell<'r>(
    record: &'r StringRecord,
    index: usize,
    row: u64,
    name: &str,
) -> Result<&'r str, TraceError> {
    record.get(index).ok_or_else(|| TraceError::MissingField {
        record: row,
        field: name.to_owned(),
    })
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    time: usize,
    operation: usize,
    path: usize,
    result: usize,
    detail: usize,
}

/// Reads [`Event`]s one row at a time.
pub struct TraceReader<R: Read> {
    csv: csv::Reader<R>,
    layout: Layout,
    names: ColumnNames,
    buffer: StringRecord,
    /// Row number of the last row read; the header is row 1.
    row: u64,
}

impl<R: Read> TraceReader<R> {
    pub fn new(reader: R, names: &ColumnNames) -> Result<Self, TraceError> {
        let (csv, headers) = open_csv(reader)?;
        let layout = Layout {
            time: column_index(&headers, &names.time)?,
            operation: column_index(&headers, &names.operation)?,
            path: column_index(&headers, &names.path)?,
            result: column_index(&headers, &names.result)?,
            detail: column_index(&headers, &names.detail)?,
        };
        debug!("Trace columns: {:?}", layout);

        Ok(Self {
            csv,
            layout,
            names: names.clone(),
            buffer: StringRecord::new(),
            row: 1,
        })
    }

    /// Number of data rows read so far.
    pub fn rows_read(&self) -> u64 {
        self.row - 1
    }

    /// Read the next event, or `None` at end of input.
    pub fn next_event(&mut self) -> Result<Option<Event>, TraceError> {
        if !self.csv.read_record(&mut self.buffer)? {
            return Ok(None);
        }
        self.row += 1;
        let row = self.row;
        let rec = &self.buffer;
        let names = &self.names;

        let time_text = cell(rec, self.layout.time, row, &names.time)?;
        let time = parse_time_of_day(time_text).ok_or_else(|| TraceError::InvalidTimestamp {
            record: row,
            value: time_text.to_owned(),
        })?;

        Ok(Some(Event {
            record: row,
            time,
            operation: Operation::from_name(cell(rec, self.layout.operation, row, &names.operation)?),
            path: cell(rec, self.layout.path, row, &names.path)?.to_owned(),
            succeeded: cell(rec, self.layout.result, row, &names.result)?.trim() == SUCCESS,
            detail: Detail::parse(cell(rec, self.layout.detail, row, &names.detail)?),
        }))
    }
}

impl<R: Read> Iterator for TraceReader<R> {
    type Item = Result<Event, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}
