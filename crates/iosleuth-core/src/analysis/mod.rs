/// Analysis driver. Turns a trace into categorised totals.
///
/// [`analyse_trace`] charges per-event byte lengths from the event log.
/// [`analyse_summary`] takes bytes from a File Summary export and replays
/// the event log only for renames and the session span.
pub mod context;
pub mod ingest;
pub mod origins;
pub mod rate;
pub mod rename;
pub mod summary;

pub use context::ClassificationContext;
pub use ingest::{Flow, IngestMode, IngestStats, TraceIngester};
pub use origins::{origin_key, OriginAggregator};
pub use rate::IoRate;
pub use rename::{Migration, RenameTracker};
pub use summary::ingest_summary;

use crate::config::AnalysisConfig;
use crate::error::TraceError;
use crate::trace::{SessionSpan, SummaryReader, TraceReader};
use std::io::Read;
use std::time::Duration;

/// Result of a complete run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub context: ClassificationContext,
    /// `None` if no event was processed.
    pub span: Option<SessionSpan>,
    pub stats: IngestStats,
}

impl Analysis {
    pub fn duration(&self) -> Duration {
        self.span.map(|s| s.duration()).unwrap_or_default()
    }

    /// Rate over the session, if it has nonzero length.
    pub fn rate(&self) -> Option<IoRate> {
        IoRate::from_totals(self.context.total(), self.duration())
    }
}

/// Analyse a Process Monitor event log.
pub fn analyse_trace<R: Read>(trace: R, config: &AnalysisConfig) -> Result<Analysis, TraceError> {
    replay(ClassificationContext::default(), trace, config, IngestMode::Events)
}

/// Analyse a File Summary export, using `trace` for renames and timing.
pub fn analyse_summary<S: Read, R: Read>(
    summary: S,
    trace: R,
    config: &AnalysisConfig,
) -> Result<Analysis, TraceError> {
    let mut context = ClassificationContext::default();
    let rows = SummaryReader::new(summary, &config.columns)?;
    ingest_summary(&mut context, rows, &config.ignore_list())?;
    replay(context, trace, config, IngestMode::RenamesOnly)
}

fn replay<R: Read>(
    mut context: ClassificationContext,
    trace: R,
    config: &AnalysisConfig,
    mode: IngestMode,
) -> Result<Analysis, TraceError> {
    let reader = TraceReader::new(trace, &config.columns)?;
    let mut ingester = TraceIngester::new(config, mode);
    ingester.run(&mut context, reader)?;
    let (span, stats) = ingester.finish();
    Ok(Analysis {
        context,
        span,
        stats,
    })
}
