/// Data model for per-file I/O accounting.
///
/// Re-exports the byte accumulator and the category bucket types.
pub mod category;
pub mod size;
pub mod totals;

pub use category::{Category, CategoryKind};
pub use totals::FileTotals;
