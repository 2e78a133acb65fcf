/// IoSleuth Core — trace ingestion, path classification, and aggregation.
///
/// This crate contains all business logic with zero terminal or argument
/// parsing dependencies. Frontends feed it a Process Monitor CSV export and
/// render the resulting [`report::Report`].
///
/// # Modules
///
/// - [`model`] — Per-file byte totals and category buckets.
/// - [`classify`] — Ordered path rules that map a file to a category.
/// - [`trace`] — Streaming reader for the event log and its detail strings.
/// - [`analysis`] — The single ingestion pass, rename migration, and origins.
/// - [`report`] — Serializable summary consumed by renderers.
/// - [`config`] — Tunables loaded from TOML.
/// - [`error`] — Fatal trace errors.
pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod trace;

pub use analysis::{analyse_summary, analyse_trace, Analysis, ClassificationContext};
pub use config::AnalysisConfig;
pub use error::{ConfigError, TraceError};
