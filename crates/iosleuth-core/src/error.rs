//! Error types. Every record-level failure is fatal: a trace that cannot be
//! fully attributed produces no report at all.
use thiserror::Error;

/// A fatal problem with the trace input.
///
/// `record` is the 1-based row number in the CSV file, counting the header
/// as row 1, so it can be looked up directly in a spreadsheet.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("trace has no header row")]
    EmptyTrace,

    #[error("trace header has no \"{name}\" column")]
    MissingColumn { name: String },

    #[error("record {record}: no \"{field}\" value")]
    MissingField { record: u64, field: String },

    #[error("record {record}: byte count \"{value}\" is not a number")]
    InvalidLength { record: u64, value: String },

    #[error("record {record}: rename of {path} has no destination file name")]
    MalformedRename { record: u64, path: String },

    #[error("record {record}: unrecognised time of day \"{value}\"")]
    InvalidTimestamp { record: u64, value: String },

    #[error("record {record}: IndexedDB path has no profile/origin components: {path}")]
    OriginShape { record: u64, path: String },
}

/// A problem loading an [`AnalysisConfig`](crate::AnalysisConfig) file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
