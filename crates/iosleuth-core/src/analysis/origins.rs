/// Per-origin breakdown of IndexedDB I/O.
///
/// IndexedDB keeps one LevelDB directory per origin:
/// `...\<profile>\IndexedDB\<origin>\<file>`. The origin key combines the
/// profile directory and the origin directory, e.g.
/// `Default-https_www.example.com_0.indexeddb.leveldb`.
use crate::classify::segments;
use crate::model::FileTotals;
use compact_str::{format_compact, CompactString};
use std::collections::BTreeMap;
use tracing::debug;

/// Directory name of the nested storage engine.
pub const ENGINE_SEGMENT: &str = "IndexedDB";

/// Extract `<profile>-<origin>` from the last `IndexedDB` segment of `path`.
///
/// `None` when the engine directory has no parent or no child component.
pub fn origin_key(path: &str) -> Option<CompactString> {
    let segs: Vec<&str> = segments(path).collect();
    let at = segs.iter().rposition(|s| *s == ENGINE_SEGMENT)?;
    let profile = segs.get(at.checked_sub(1)?)?;
    let origin = segs.get(at + 1)?;
    Some(format_compact!("{profile}-{origin}"))
}

/// Lazily-created sub-totals keyed by origin.
///
/// Buckets are never removed during a run, even if a rename drains one to
/// zero.
#[derive(Debug, Clone, Default)]
pub struct OriginAggregator {
    origins: BTreeMap<CompactString, FileTotals>,
}

impl OriginAggregator {
    /// Add bytes to `origin`, creating the bucket on first sight.
    /// Returns `true` if the bucket was created.
    pub fn record(&mut self, origin: CompactString, totals: FileTotals) -> bool {
        match self.origins.get_mut(&origin) {
            Some(bucket) => {
                *bucket += totals;
                false
            }
            None => {
                debug!("New IndexedDB origin: {}", origin);
                self.origins.insert(origin, totals);
                true
            }
        }
    }

    /// Take bytes back out of `origin` when a file leaves it by rename.
    pub fn retract(&mut self, origin: &str, totals: FileTotals) {
        if let Some(bucket) = self.origins.get_mut(origin) {
            bucket.subtract(totals);
        }
    }

    pub fn get(&self, origin: &str) -> Option<FileTotals> {
        self.origins.get(origin).copied()
    }

    /// Buckets in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, FileTotals)> {
        self.origins.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Buckets sorted by bytes written, largest first.
    pub fn by_written(&self) -> Vec<(&str, FileTotals)> {
        let mut rows: Vec<(&str, FileTotals)> = self.iter().collect();
        rows.sort_by(|a, b| b.1.written.cmp(&a.1.written));
        rows
    }

    pub fn sum(&self) -> FileTotals {
        let mut sum = FileTotals::default();
        for totals in self.origins.values() {
            sum += *totals;
        }
        sum
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_joins_profile_and_origin() {
        let path = "C:\\Users\\dev\\AppData\\Local\\Google\\Chrome\\User Data\\Profile 1\\IndexedDB\\https_docs.example_0.indexeddb.leveldb\\MANIFEST-000001";
        assert_eq!(
            origin_key(path).as_deref(),
            Some("Profile 1-https_docs.example_0.indexeddb.leveldb")
        );
    }

    /// Blob directories sit next to the LevelDB directory and count as their
    /// own origin bucket.
    #[test]
    fn key_for_blob_directory() {
        let path = "C:\\UD\\Default\\IndexedDB\\https_a.example_0.indexeddb.blob\\1\\00\\3";
        assert_eq!(
            origin_key(path).as_deref(),
            Some("Default-https_a.example_0.indexeddb.blob")
        );
    }

    #[test]
    fn key_uses_last_engine_segment() {
        let path = "C:\\IndexedDB\\outer\\inner\\IndexedDB\\origin\\f";
        assert_eq!(origin_key(path).as_deref(), Some("inner-origin"));
    }

    #[test]
    fn key_with_forward_slashes() {
        assert_eq!(
            origin_key("/home/u/Default/IndexedDB/o/f").as_deref(),
            Some("Default-o")
        );
    }

    #[test]
    fn malformed_shapes_have_no_key() {
        assert_eq!(origin_key("C:\\UD\\Default\\IndexedDB"), None);
        assert_eq!(origin_key("C:\\UD\\Default\\IndexedDB\\"), None);
        assert_eq!(origin_key("IndexedDB\\origin"), None);
        assert_eq!(origin_key("C:\\UD\\Default\\Cache\\x"), None);
    }

    #[test]
    fn buckets_created_lazily_and_accumulate() {
        let mut agg = OriginAggregator::default();
        assert!(agg.record("Default-a".into(), FileTotals::new(0, 100)));
        assert!(!agg.record("Default-a".into(), FileTotals::new(5, 50)));
        assert!(agg.record("Default-b".into(), FileTotals::new(0, 1)));

        assert_eq!(agg.len(), 2);
        assert_eq!(agg.get("Default-a"), Some(FileTotals::new(5, 150)));
        assert_eq!(agg.sum(), FileTotals::new(5, 151));
    }

    /// Draining a bucket leaves it in place at zero.
    #[test]
    fn retract_keeps_bucket() {
        let mut agg = OriginAggregator::default();
        agg.record("Default-a".into(), FileTotals::new(1, 10));
        agg.retract("Default-a", FileTotals::new(1, 10));
        assert_eq!(agg.get("Default-a"), Some(FileTotals::default()));
        assert_eq!(agg.len(), 1);
        // Unknown origins are ignored.
        agg.retract("Default-z", FileTotals::new(1, 1));
        assert_eq!(agg.len(), 1);
    }

    #[test]
    fn by_written_sorts_descending() {
        let mut agg = OriginAggregator::default();
        agg.record("Default-small".into(), FileTotals::new(0, 1));
        agg.record("Default-big".into(), FileTotals::new(0, 99));
        let keys: Vec<&str> = agg.by_written().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["Default-big", "Default-small"]);
    }
}
