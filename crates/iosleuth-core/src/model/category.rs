/// Category buckets: the functional areas a profile file can belong to.
///
/// Each [`Category`] owns the per-path [`FileTotals`] of every file that was
/// classified into it. A path's totals live in exactly one category at a
/// time; renames move them between buckets.
use super::totals::FileTotals;
use compact_str::CompactString;
use serde::Serialize;
use std::collections::HashMap;

/// Identity of a category.
///
/// The classifier returns one of these for every path; the ingestion pass
/// matches on it (rather than comparing bucket references) to decide
/// whether a file also feeds the per-origin breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CategoryKind {
    Bookmarks,
    Cache,
    Cookies,
    CrxInstall,
    Extensions,
    Favicons,
    FileSystem,
    FontCache,
    GcmStore,
    GpuCache,
    IndexedDb,
    IndexJournal,
    JumpListIcons,
    LocalState,
    LocalStorage,
    MediaCache,
    Pnacl,
    Preferences,
    SafeBrowsing,
    SessionStorage,
    Shortcuts,
    SqliteTemp,
    SyncData,
    SyncExtensionSettings,
    Temp,
    Other,
}

impl CategoryKind {
    /// Every category, in declaration order with `Other` last.
    pub const ALL: [CategoryKind; 26] = [
        Self::Bookmarks,
        Self::Cache,
        Self::Cookies,
        Self::CrxInstall,
        Self::Extensions,
        Self::Favicons,
        Self::FileSystem,
        Self::FontCache,
        Self::GcmStore,
        Self::GpuCache,
        Self::IndexedDb,
        Self::IndexJournal,
        Self::JumpListIcons,
        Self::LocalState,
        Self::LocalStorage,
        Self::MediaCache,
        Self::Pnacl,
        Self::Preferences,
        Self::SafeBrowsing,
        Self::SessionStorage,
        Self::Shortcuts,
        Self::SqliteTemp,
        Self::SyncData,
        Self::SyncExtensionSettings,
        Self::Temp,
        Self::Other,
    ];

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bookmarks => "Bookmarks",
            Self::Cache => "Cache",
            Self::Cookies => "Cookies",
            Self::CrxInstall => "CRX Install",
            Self::Extensions => "Extensions",
            Self::Favicons => "Favicons",
            Self::FileSystem => "Filesystem",
            Self::FontCache => "Font Cache",
            Self::GcmStore => "GCM Store",
            Self::GpuCache => "GPU Cache",
            Self::IndexedDb => "IndexedDB",
            Self::IndexJournal => "Index Journal",
            Self::JumpListIcons => "JumpList Icons",
            Self::LocalState => "Local State",
            Self::LocalStorage => "Local storage",
            Self::MediaCache => "Media Cache",
            Self::Pnacl => "PNACL",
            Self::Preferences => "Preferences",
            Self::SafeBrowsing => "Safe Browsing",
            Self::SessionStorage => "Session storage",
            Self::Shortcuts => "Shortcuts",
            Self::SqliteTemp => "Sqlite temp",
            Self::SyncData => "Sync Data",
            Self::SyncExtensionSettings => "Sync Extension Settings",
            Self::Temp => "Temp",
            Self::Other => "Other",
        }
    }

    /// Look a category up by its label, ignoring ASCII case.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Position in [`Self::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether files in this category are further bucketed by origin.
    #[inline]
    pub fn has_origins(self) -> bool {
        matches!(self, Self::IndexedDb)
    }
}

/// A named bucket owning the totals of every file classified into it.
#[derive(Debug, Clone)]
pub struct Category {
    pub kind: CategoryKind,
    files: HashMap<CompactString, FileTotals>,
    /// Running sum over `files`, kept in step with every mutation.
    sum: FileTotals,
}

impl Category {
    pub fn new(kind: CategoryKind) -> Self {
        Self {
            kind,
            files: HashMap::new(),
            sum: FileTotals::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind.label()
    }

    /// Attribute one I/O on `path` to this category.
    pub fn record(&mut self, path: &str, read: u64, written: u64) {
        match self.files.get_mut(path) {
            Some(totals) => totals.add(read, written),
            None => {
                self.files
                    .insert(CompactString::new(path), FileTotals::new(read, written));
            }
        }
        self.sum.add(read, written);
    }

    /// Remove `path` and hand back its accumulated totals.
    pub fn take(&mut self, path: &str) -> Option<FileTotals> {
        let totals = self.files.remove(path)?;
        self.sum.subtract(totals);
        Some(totals)
    }

    /// Insert totals under `path`, summing field-wise with anything already
    /// recorded for that path.
    pub fn merge(&mut self, path: &str, totals: FileTotals) {
        self.record(path, totals.read, totals.written);
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn file(&self, path: &str) -> Option<FileTotals> {
        self.files.get(path).copied()
    }

    /// Cumulative totals across every file in the bucket.
    #[inline]
    pub fn totals(&self) -> FileTotals {
        self.sum
    }

    #[inline]
    pub fn read(&self) -> u64 {
        self.sum.read
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.sum.written
    }

    /// `true` if no file in the bucket has nonzero read or write bytes.
    /// Empty categories are suppressed from reports.
    pub fn is_empty(&self) -> bool {
        self.files.values().all(FileTotals::is_zero)
    }

    /// Number of distinct paths held.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Files sorted by bytes written, largest first. Ties break on path so
    /// output is stable across runs.
    pub fn files_by_written(&self) -> Vec<(&str, FileTotals)> {
        let mut files: Vec<(&str, FileTotals)> = self
            .files
            .iter()
            .map(|(path, totals)| (path.as_str(), *totals))
            .collect();
        files.sort_unstable_by(|a, b| b.1.written.cmp(&a.1.written).then(a.0.cmp(b.0)));
        files
    }

    /// Percentage of `total`'s written bytes that landed in this bucket.
    pub fn percent_of_written(&self, total: &FileTotals) -> f64 {
        if total.written == 0 {
            0.0
        } else {
            self.written() as f64 / total.written as f64 * 100.0
        }
    }
}
