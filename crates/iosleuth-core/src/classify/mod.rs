/// Path classification. Maps a traced file path to a [`CategoryKind`].
///
/// Classification is an ordered chain of rules; the first rule with any
/// matching pattern decides the category. Order matters: narrow rules sit
/// above broad ones so that, for example, SQLite's `etilqs_*.tmp` files are
/// counted as SQLite temp files rather than generic temp files, and files
/// under `...\IndexedDB\...` never fall through to a generic directory rule.
///
/// Paths are Windows paths as recorded by Process Monitor. Both `\` and `/`
/// are accepted as separators.
pub mod ignore;
pub mod rules;

pub use ignore::IgnoreList;
pub use rules::{Pattern, Rule, RULES};

use crate::model::CategoryKind;

/// An ordered rule chain with a catch-all fallback.
#[derive(Debug, Clone, Copy)]
pub struct PathClassifier {
    rules: &'static [Rule],
}

impl Default for PathClassifier {
    fn default() -> Self {
        Self::new(RULES)
    }
}

impl PathClassifier {
    pub fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Classify `path`. Total and deterministic: every input maps to exactly
    /// one category, `Other` when nothing matches.
    pub fn classify(&self, path: &str) -> CategoryKind {
        let name = file_name(path);
        self.rules
            .iter()
            .find(|rule| rule.matches(path, name))
            .map(|rule| rule.category)
            .unwrap_or(CategoryKind::Other)
    }
}

/// Classify with the built-in rule table.
pub fn classify(path: &str) -> CategoryKind {
    PathClassifier::default().classify(path)
}

#[inline]
fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Last component of `path`.
pub fn file_name(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Extension of a file name without the dot. Leading dots belong to the
/// stem, so `.tmp` has no extension.
pub fn extension(name: &str) -> Option<&str> {
    let stem_start = name.len() - name.trim_start_matches('.').len();
    let rest = &name[stem_start..];
    rest.rfind('.').map(|pos| &rest[pos + 1..])
}

/// Path components, skipping empty ones produced by doubled separators.
pub fn segments(path: &str) -> impl DoubleEndedIterator<Item = &str> {
    path.split(is_separator).filter(|s| !s.is_empty())
}
