/// The classification context: every category bucket, the Total, and the
/// per-origin breakdown, owned by one value per run.
use super::origins::{origin_key, OriginAggregator};
use crate::classify::PathClassifier;
use crate::error::TraceError;
use crate::model::{Category, CategoryKind, FileTotals};

/// All mutable accounting state for one analysis run.
///
/// Invariant: the sum of every category's totals equals [`total`](Self::total),
/// and a path's totals are held by at most one category.
#[derive(Debug, Clone)]
pub struct ClassificationContext {
    classifier: PathClassifier,
    /// Indexed by [`CategoryKind::index`].
    categories: Vec<Category>,
    total: FileTotals,
    origins: OriginAggregator,
}

impl Default for ClassificationContext {
    fn default() -> Self {
        Self::new(PathClassifier::default())
    }
}

impl ClassificationContext {
    pub fn new(classifier: PathClassifier) -> Self {
        Self {
            classifier,
            categories: CategoryKind::ALL.iter().map(|&k| Category::new(k)).collect(),
            total: FileTotals::default(),
            origins: OriginAggregator::default(),
        }
    }

    #[inline]
    pub fn classify(&self, path: &str) -> CategoryKind {
        self.classifier.classify(path)
    }

    /// Attribute bytes for `path` to Total, to its category, and, for the
    /// nested storage engine, to its origin bucket.
    ///
    /// `record` only labels errors. Fails without touching any counter when
    /// an IndexedDB path lacks the profile/origin shape.
    pub fn record(
        &mut self,
        path: &str,
        read: u64,
        written: u64,
        record: u64,
    ) -> Result<CategoryKind, TraceError> {
        let kind = self.classify(path);
        let origin = if kind.has_origins() {
            Some(required_origin(path, record)?)
        } else {
            None
        };

        self.total.add(read, written);
        self.categories[kind.index()].record(path, read, written);
        if let Some(origin) = origin {
            self.origins.record(origin, FileTotals::new(read, written));
        }
        Ok(kind)
    }

    /// Which category currently holds `path`, if any.
    ///
    /// The classified bucket is checked first; the remaining buckets are
    /// searched so that totals are found wherever they were placed.
    pub fn locate(&self, path: &str) -> Option<CategoryKind> {
        let guess = self.classify(path);
        if self.categories[guess.index()].contains(path) {
            return Some(guess);
        }
        self.categories
            .iter()
            .find(|c| c.contains(path))
            .map(|c| c.kind)
    }

    pub(crate) fn category_mut(&mut self, kind: CategoryKind) -> &mut Category {
        &mut self.categories[kind.index()]
    }

    pub(crate) fn origins_mut(&mut self) -> &mut OriginAggregator {
        &mut self.origins
    }

    pub fn category(&self, kind: CategoryKind) -> &Category {
        &self.categories[kind.index()]
    }

    /// Every category, in [`CategoryKind::ALL`] order, empty ones included.
    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    #[inline]
    pub fn total(&self) -> FileTotals {
        self.total
    }

    pub fn origins(&self) -> &OriginAggregator {
        &self.origins
    }

    /// Sum over all categories; equals [`total`](Self::total) unless the
    /// accounting invariant is broken.
    pub fn category_sum(&self) -> FileTotals {
        let mut sum = FileTotals::default();
        for category in &self.categories {
            sum += category.totals();
        }
        sum
    }
}

/// Origin key for an IndexedDB path, or the fatal shape error.
pub(crate) fn required_origin(
    path: &str,
    record: u64,
) -> Result<compact_str::CompactString, TraceError> {
    origin_key(path).ok_or_else(|| TraceError::OriginShape {
        record,
        path: path.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "C:\\Users\\dev\\AppData\\Local\\Google\\Chrome\\User Data\\Default";

    #[test]
    fn record_feeds_total_and_category() {
        let mut ctx = ClassificationContext::default();
        let kind = ctx
            .record(&format!("{DEFAULT}\\Cache\\f_000001"), 10, 100, 2)
            .unwrap();
        assert_eq!(kind, CategoryKind::Cache);
        assert_eq!(ctx.total(), FileTotals::new(10, 100));
        assert_eq!(ctx.category(CategoryKind::Cache).totals(), FileTotals::new(10, 100));
        assert_eq!(ctx.category_sum(), ctx.total());
    }

    #[test]
    fn indexed_db_writes_reach_origin_bucket() {
        let mut ctx = ClassificationContext::default();
        let path = format!("{DEFAULT}\\IndexedDB\\https_mail.example_0.indexeddb.leveldb\\000003.log");
        ctx.record(&path, 0, 4096, 2).unwrap();
        ctx.record(&path, 512, 4096, 3).unwrap();

        let bucket = ctx
            .origins()
            .get("Default-https_mail.example_0.indexeddb.leveldb")
            .unwrap();
        assert_eq!(bucket, FileTotals::new(512, 8192));
        assert_eq!(ctx.category(CategoryKind::IndexedDb).written(), 8192);
    }

    /// A malformed IndexedDB path aborts before any counter moves.
    #[test]
    fn bad_origin_shape_leaves_state_untouched() {
        let mut ctx = ClassificationContext::default();
        let err = ctx.record("IndexedDB", 0, 10, 9).unwrap_err();
        assert!(matches!(err, TraceError::OriginShape { record: 9, .. }));
        assert!(ctx.total().is_zero());
        assert!(ctx.category(CategoryKind::IndexedDb).is_empty());
        assert!(ctx.origins().is_empty());
    }

    #[test]
    fn locate_finds_path_in_any_bucket() {
        let mut ctx = ClassificationContext::default();
        // Place a path in a bucket other than its classification.
        ctx.category_mut(CategoryKind::Cache).record("C:\\odd", 0, 1);
        assert_eq!(ctx.locate("C:\\odd"), Some(CategoryKind::Cache));
        assert_eq!(ctx.locate("C:\\missing"), None);
    }

    #[test]
    fn all_categories_present_in_order() {
        let ctx = ClassificationContext::default();
        let kinds: Vec<CategoryKind> = ctx.categories().map(|c| c.kind).collect();
        assert_eq!(kinds, CategoryKind::ALL.to_vec());
    }
}
