/// File Summary ingestion: cumulative per-path counts instead of per-event
/// lengths.
use super::context::ClassificationContext;
use crate::classify::IgnoreList;
use crate::error::TraceError;
use crate::trace::SummaryReader;
use std::io::Read;
use tracing::info;

/// Attribute every summary row to `ctx`. Returns the number of rows
/// attributed.
///
/// Ignored rows and rows with no bytes either way are skipped.
pub fn ingest_summary<R: Read>(
    ctx: &mut ClassificationContext,
    reader: SummaryReader<R>,
    ignore: &IgnoreList,
) -> Result<u64, TraceError> {
    let mut attributed = 0u64;
    let mut skipped = 0u64;
    for row in reader {
        let row = row?;
        if ignore.is_ignored(&row.path) || (row.read == 0 && row.written == 0) {
            skipped += 1;
            continue;
        }
        ctx.record(&row.path, row.read, row.written, row.record)?;
        attributed += 1;
    }
    info!("File summary: {} rows attributed, {} skipped", attributed, skipped);
    Ok(attributed)
}
