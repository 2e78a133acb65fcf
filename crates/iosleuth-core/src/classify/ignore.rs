/// Denylist of noisy files excluded from every total, Total included.
///
/// Applied before classification: an ignored event is dropped as if it
/// were never traced.
#[derive(Debug, Clone, Default)]
pub struct IgnoreList {
    substrings: Vec<String>,
}

impl IgnoreList {
    pub fn new<I, S>(substrings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            substrings: substrings
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// `true` if any denylisted text occurs in `path`.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.substrings.iter().any(|s| path.contains(s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.substrings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substrings.is_empty()
    }
}
