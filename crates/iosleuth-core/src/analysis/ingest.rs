/// Event-log ingestion pass.
///
/// Events are consumed strictly in file order, one at a time:
///
/// 1. ignored paths are dropped outright (they do not even extend the
///    session span);
/// 2. the timestamp extends the session span;
/// 3. the end-of-session sentinel stops the pass;
/// 4. renames are handed to the [`RenameTracker`];
/// 5. successful reads and writes are attributed by the
///    [`ClassificationContext`].
///
/// Any error aborts the pass. Nothing after the failing record is read.
use super::context::ClassificationContext;
use super::rename::RenameTracker;
use crate::classify::IgnoreList;
use crate::config::AnalysisConfig;
use crate::error::TraceError;
use crate::trace::{Event, Operation, SessionSpan, TraceReader};
use serde::Serialize;
use std::io::Read;
use tracing::{debug, info};

/// What the pass does with read/write events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestMode {
    /// Attribute per-event byte lengths.
    Events,
    /// Bytes came from a File Summary export; only renames and timestamps
    /// are taken from the log.
    RenamesOnly,
}

/// Counters describing one ingestion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Rows handed to the ingester, including ignored ones.
    pub events_read: u64,
    pub events_ignored: u64,
    /// Events that added a nonzero byte count.
    pub events_attributed: u64,
    pub renames_seen: u64,
    pub renames_applied: u64,
    /// `true` if the pass ended at the session-end sentinel rather than at
    /// end of input.
    pub stopped_at_sentinel: bool,
}

/// Single-threaded consumer of a trace's events.
pub struct TraceIngester<'a> {
    config: &'a AnalysisConfig,
    mode: IngestMode,
    ignore: IgnoreList,
    renames: RenameTracker,
    span: Option<SessionSpan>,
    stats: IngestStats,
}

/// Whether the pass should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

impl<'a> TraceIngester<'a> {
    pub fn new(config: &'a AnalysisConfig, mode: IngestMode) -> Self {
        Self {
            config,
            mode,
            ignore: config.ignore_list(),
            renames: RenameTracker::default(),
            span: None,
            stats: IngestStats::default(),
        }
    }

    /// Process one event against `ctx`.
    pub fn ingest(
        &mut self,
        ctx: &mut ClassificationContext,
        event: &Event,
    ) -> Result<Flow, TraceError> {
        self.stats.events_read += 1;
        if self.ignore.is_ignored(&event.path) {
            self.stats.events_ignored += 1;
            return Ok(Flow::Continue);
        }

        match self.span.as_mut() {
            Some(span) => span.last = event.time,
            None => self.span = Some(SessionSpan::starting_at(event.time)),
        }

        if self.config.is_session_end(&event.path) {
            info!(
                "Session end marker at record {}: {}",
                event.record, event.path
            );
            self.stats.stopped_at_sentinel = true;
            return Ok(Flow::Stop);
        }

        if event.operation == Operation::Rename {
            // Parse even on failure so a malformed record is still caught.
            let target = event.rename_target()?;
            if event.succeeded {
                self.renames.apply(ctx, &event.path, target, event.record)?;
            } else {
                debug!("Record {}: failed rename of {} skipped", event.record, event.path);
            }
            return Ok(Flow::Continue);
        }

        if self.mode == IngestMode::Events {
            let (read, written) = event.transferred(self.config.count_paging_io)?;
            if read != 0 || written != 0 {
                ctx.record(&event.path, read, written, event.record)?;
                self.stats.events_attributed += 1;
            }
        }
        Ok(Flow::Continue)
    }

    /// Drain `reader` into `ctx`, stopping at the sentinel or end of input.
    pub fn run<R: Read>(
        &mut self,
        ctx: &mut ClassificationContext,
        reader: TraceReader<R>,
    ) -> Result<(), TraceError> {
        for event in reader {
            if self.ingest(ctx, &event?)? == Flow::Stop {
                break;
            }
        }
        info!(
            "Ingested {} events ({} ignored, {} attributed, {}/{} renames applied)",
            self.stats.events_read,
            self.stats.events_ignored,
            self.stats.events_attributed,
            self.renames.applied,
            self.renames.seen
        );
        Ok(())
    }

    /// Timestamps of the first and last processed events, if any.
    pub fn span(&self) -> Option<SessionSpan> {
        self.span
    }

    /// Consume the ingester, returning the span and final counters.
    pub fn finish(mut self) -> (Option<SessionSpan>, IngestStats) {
        self.stats.renames_seen = self.renames.seen;
        self.stats.renames_applied = self.renames.applied;
        (self.span, self.stats)
    }
}
