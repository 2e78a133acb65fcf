/// Report model: the finished numbers of an [`Analysis`], in display order.
///
/// Renderers (text, CSV, JSON) consume this and do no accounting of their
/// own.
use crate::analysis::{Analysis, IngestStats, IoRate};
use crate::model::{CategoryKind, FileTotals};
use crate::trace::SessionSpan;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: CategoryKind,
    pub name: &'static str,
    pub read: u64,
    pub written: u64,
    /// Share of Total's written bytes.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OriginRow {
    pub origin: String,
    pub read: u64,
    pub written: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRow {
    pub path: String,
    pub read: u64,
    pub written: u64,
}

/// Every file held by one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileListing {
    pub category: CategoryKind,
    pub name: &'static str,
    pub files: Vec<FileRow>,
    pub total: FileTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Non-empty categories, most bytes written first.
    pub categories: Vec<CategoryRow>,
    pub total: FileTotals,
    pub session: Option<SessionSpan>,
    pub duration_secs: f64,
    pub rate: Option<IoRate>,
    /// IndexedDB buckets, most bytes written first.
    pub origins: Vec<OriginRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<FileListing>,
    pub stats: IngestStats,
}

impl Report {
    /// Build the report, optionally listing the files of one category.
    pub fn build(analysis: &Analysis, list_files: Option<CategoryKind>) -> Self {
        let ctx = &analysis.context;
        let total = ctx.total();

        let mut categories: Vec<CategoryRow> = ctx
            .categories()
            .filter(|c| !c.is_empty())
            .map(|c| CategoryRow {
                category: c.kind,
                name: c.name(),
                read: c.read(),
                written: c.written(),
                percent: c.percent_of_written(&total),
            })
            .collect();
        categories.sort_by(|a, b| b.written.cmp(&a.written).then(a.name.cmp(b.name)));

        let origins = ctx
            .origins()
            .by_written()
            .into_iter()
            .map(|(origin, totals)| OriginRow {
                origin: origin.to_owned(),
                read: totals.read,
                written: totals.written,
            })
            .collect();

        let files = list_files.map(|kind| {
            let category = ctx.category(kind);
            FileListing {
                category: kind,
                name: kind.label(),
                files: category
                    .files_by_written()
                    .into_iter()
                    .map(|(path, totals)| FileRow {
                        path: path.to_owned(),
                        read: totals.read,
                        written: totals.written,
                    })
                    .collect(),
                total: category.totals(),
            }
        });

        Self {
            categories,
            total,
            session: analysis.span,
            duration_secs: analysis.duration().as_secs_f64(),
            rate: analysis.rate(),
            origins,
            files,
            stats: analysis.stats.clone(),
        }
    }

    /// Widest category name, for column alignment.
    pub fn name_width(&self) -> usize {
        self.categories
            .iter()
            .map(|row| row.name.len())
            .chain(std::iter::once("Total".len()))
            .max()
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyse_trace;
    use crate::config::AnalysisConfig;

    const HEADER: &str = "\"Time of Day\",\"Process Name\",\"PID\",\"Operation\",\"Path\",\"Result\",\"Detail\"\n";

    fn write_row(time: &str, path: &str, len: u64) -> String {
        format!(
            "\"{time}\",\"chrome.exe\",\"1\",\"WriteFile\",\"{path}\",\"SUCCESS\",\"Offset: 0, Length: {len}\"\n"
        )
    }

    fn analysis() -> Analysis {
        let mut text = String::from(HEADER);
        text += &write_row("10:00:00 AM", "C:\\UD\\Default\\Cache\\f_1", 300);
        text += &write_row("10:00:01 AM", "C:\\UD\\Default\\Cookies", 100);
        text += &write_row("10:00:02 AM", "C:\\UD\\Default\\Bookmarks", 100);
        text += &write_row(
            "10:00:10 AM",
            "C:\\UD\\Default\\IndexedDB\\https_a_0.indexeddb.leveldb\\000003.log",
            500,
        );
        analyse_trace(text.as_bytes(), &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn categories_sorted_and_empty_ones_suppressed() {
        let report = Report::build(&analysis(), None);
        let names: Vec<&str> = report.categories.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["IndexedDB", "Cache", "Bookmarks", "Cookies"]);
        assert_eq!(report.total, FileTotals::new(0, 1_000));
        assert_eq!(report.categories[0].percent, 50.0);
    }

    #[test]
    fn session_rate_and_origins() {
        let report = Report::build(&analysis(), None);
        assert_eq!(report.duration_secs, 10.0);
        assert_eq!(report.rate.unwrap().write_bytes_per_sec, 100.0);
        assert_eq!(report.origins.len(), 1);
        assert_eq!(report.origins[0].origin, "Default-https_a_0.indexeddb.leveldb");
        assert!(report.files.is_none());
    }

    #[test]
    fn lists_requested_category() {
        let report = Report::build(&analysis(), Some(CategoryKind::Cache));
        let files = report.files.unwrap();
        assert_eq!(files.name, "Cache");
        assert_eq!(files.files.len(), 1);
        assert_eq!(files.total.written, 300);
    }

    #[test]
    fn name_width_covers_total() {
        let report = Report::build(&analysis(), None);
        assert_eq!(report.name_width(), "Bookmarks".len());
    }

    #[test]
    fn serializes_to_json() {
        let json = serde_json::to_value(Report::build(&analysis(), None)).unwrap();
        assert_eq!(json["total"]["written"], 1_000);
        assert_eq!(json["categories"][0]["category"], "IndexedDb");
        assert!(json.get("files").is_none());
    }
}
