/// Rename migration.
///
/// Chrome writes most state atomically: it fills `Foo.tmp` (or a random temp
/// name) and then renames it over `Foo`. Without migration every such write
/// would be charged to Temp. When a rename is seen, the totals accumulated
/// under the old path move to the category of the new path, merging with
/// anything already recorded there.
///
/// Events are processed in time order, so only bytes charged to the old path
/// *before* the rename are moved. Later I/O on the new path is classified
/// directly.
use super::context::{required_origin, ClassificationContext};
use crate::error::TraceError;
use crate::model::{CategoryKind, FileTotals};
use tracing::debug;

/// Totals moved by one rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Migration {
    pub from: CategoryKind,
    pub to: CategoryKind,
    pub totals: FileTotals,
}

/// Applies renames to a [`ClassificationContext`] and counts them.
#[derive(Debug, Default, Clone)]
pub struct RenameTracker {
    /// Renames observed, including those with nothing to move.
    pub seen: u64,
    /// Renames that moved accumulated totals.
    pub applied: u64,
}

impl RenameTracker {
    /// Move `from`'s totals to `to`.
    ///
    /// Returns `None` if `from` has no recorded I/O. Total is unchanged; the
    /// origin breakdown follows the file when it enters or leaves IndexedDB.
    pub fn apply(
        &mut self,
        ctx: &mut ClassificationContext,
        from: &str,
        to: &str,
        record: u64,
    ) -> Result<Option<Migration>, TraceError> {
        self.seen += 1;
        if from == to {
            return Ok(None);
        }
        let Some(from_kind) = ctx.locate(from) else {
            return Ok(None);
        };

        // Resolve both origin keys before mutating so a shape error leaves
        // the context as it was.
        let to_kind = ctx.classify(to);
        let to_origin = if to_kind.has_origins() {
            Some(required_origin(to, record)?)
        } else {
            None
        };
        let from_origin = if from_kind.has_origins() {
            Some(required_origin(from, record)?)
        } else {
            None
        };

        let Some(totals) = ctx.category_mut(from_kind).take(from) else {
            return Ok(None);
        };
        if let Some(origin) = from_origin {
            ctx.origins_mut().retract(&origin, totals);
        }
        ctx.category_mut(to_kind).merge(to, totals);
        if let Some(origin) = to_origin {
            ctx.origins_mut().record(origin, totals);
        }

        self.applied += 1;
        debug!(
            "Rename {} -> {}: moved {}r/{}w bytes from {} to {}",
            from,
            to,
            totals.read,
            totals.written,
            from_kind.label(),
            to_kind.label()
        );
        Ok(Some(Migration {
            from: from_kind,
            to: to_kind,
            totals,
        }))
    }
}
