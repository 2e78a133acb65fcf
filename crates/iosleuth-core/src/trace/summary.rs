/// Reader for Process Monitor's File Summary export
/// (Tools → File Summary → Save).
///
/// One row per path with cumulative `Read Bytes` and `Write Bytes`. The
/// first data row is an aggregate over all files and is skipped.
use super::detail::parse_grouped_u64;
use super::reader::{cell, column_index, open_csv};
use crate::config::ColumnNames;
use crate::error::TraceError;
use csv::StringRecord;
use std::io::Read;

/// One path's cumulative byte counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub record: u64,
    pub path: String,
    pub read: u64,
    pub written: u64,
}

pub struct SummaryReader<R: Read> {
    csv: csv::Reader<R>,
    path: usize,
    read_bytes: usize,
    write_bytes: usize,
    names: ColumnNames,
    buffer: StringRecord,
    row: u64,
}

impl<R: Read> SummaryReader<R> {
    pub fn new(reader: R, names: &ColumnNames) -> Result<Self, TraceError> {
        let (csv, headers) = open_csv(reader)?;
        Ok(Self {
            path: column_index(&headers, &names.path)?,
            read_bytes: column_index(&headers, &names.read_bytes)?,
            write_bytes: column_index(&headers, &names.write_bytes)?,
            csv,
            names: names.clone(),
            buffer: StringRecord::new(),
            row: 1,
        })
    }

    pub fn next_row(&mut self) -> Result<Option<SummaryRow>, TraceError> {
        loop {
            if !self.csv.read_record(&mut self.buffer)? {
                return Ok(None);
            }
            self.row += 1;
            // Row 2 totals every file in the export.
            if self.row == 2 {
                continue;
            }
            return self.parse_current().map(Some);
        }
    }

    fn parse_current(&self) -> Result<SummaryRow, TraceError> {
        let row = self.row;
        let rec = &self.buffer;
        let number = |index: usize, name: &str| -> Result<u64, TraceError> {
            let raw = cell(rec, index, row, name)?;
            parse_grouped_u64(raw).ok_or_else(|| TraceError::InvalidLength {
                record: row,
                value: raw.to_owned(),
            })
        };

        Ok(SummaryRow {
            record: row,
            path: cell(rec, self.path, row, &self.names.path)?.to_owned(),
            read: number(self.read_bytes, &self.names.read_bytes)?,
            written: number(self.write_bytes, &self.names.write_bytes)?,
        })
    }
}

impl<R: Read> Iterator for SummaryReader<R> {
    type Item = Result<SummaryRow, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_row().transpose()
    }
}
