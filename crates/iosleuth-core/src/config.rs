/// Analysis tunables.
///
/// Everything here has a default matching a stock Process Monitor export of
/// a Chrome session, so a config file is only needed for unusual traces.
/// Missing keys in a TOML file fall back to those defaults.
use crate::classify::IgnoreList;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Header names in the exported CSV files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ColumnNames {
    pub time: String,
    pub operation: String,
    pub path: String,
    pub result: String,
    pub detail: String,
    /// File Summary export only.
    pub read_bytes: String,
    /// File Summary export only.
    pub write_bytes: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            time: "Time of Day".into(),
            operation: "Operation".into(),
            path: "Path".into(),
            result: "Result".into(),
            detail: "Detail".into(),
            read_bytes: "Read Bytes".into(),
            write_bytes: "Write Bytes".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Paths containing any of these are dropped before classification.
    pub ignore_substrings: Vec<String>,
    /// An event on a path containing this marks the end of the session;
    /// later events are not read. An empty string disables the check.
    pub session_end_marker: Option<String>,
    /// Count bytes of events flagged as paging I/O.
    pub count_paging_io: bool,
    pub columns: ColumnNames,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            ignore_substrings: vec!["chrome.dll".into(), "chrome_debug.log".into()],
            session_end_marker: Some("chrome_shutdown_ms.txt".into()),
            count_paging_io: true,
            columns: ColumnNames::default(),
        }
    }
}

impl AnalysisConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn ignore_list(&self) -> IgnoreList {
        IgnoreList::new(self.ignore_substrings.iter().cloned())
    }

    /// `true` if `path` is the end-of-session sentinel.
    pub fn is_session_end(&self, path: &str) -> bool {
        self.session_end_marker
            .as_deref()
            .is_some_and(|marker| !marker.is_empty() && path.contains(marker))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_match_procmon_export() {
        let cfg = AnalysisConfig::default();
        assert_eq!(cfg.columns.time, "Time of Day");
        assert_eq!(cfg.columns.read_bytes, "Read Bytes");
        assert!(cfg.count_paging_io);
        assert!(cfg.ignore_list().is_ignored("C:\\x\\chrome.dll"));
    }

    /// Keys left out of the file keep their defaults, including nested ones.
    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = AnalysisConfig::from_toml_str(
            r#"
            count_paging_io = false

            [columns]
            detail = "Details"
            "#,
        )
        .unwrap();
        assert!(!cfg.count_paging_io);
        assert_eq!(cfg.columns.detail, "Details");
        assert_eq!(cfg.columns.path, "Path");
        assert_eq!(cfg.ignore_substrings, AnalysisConfig::default().ignore_substrings);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = AnalysisConfig::from_toml_str("count_paging_io = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "ignore_substrings = [\"noise.log\"]").unwrap();
        let cfg = AnalysisConfig::load(file.path()).unwrap();
        assert_eq!(cfg.ignore_substrings, vec!["noise.log".to_string()]);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AnalysisConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn session_end_marker() {
        let mut cfg = AnalysisConfig::default();
        assert!(cfg.is_session_end("C:\\User Data\\chrome_shutdown_ms.txt"));
        assert!(!cfg.is_session_end("C:\\User Data\\Cookies"));
        cfg.session_end_marker = None;
        assert!(!cfg.is_session_end("C:\\User Data\\chrome_shutdown_ms.txt"));
        cfg.session_end_marker = Some(String::new());
        assert!(!cfg.is_session_end("anything"));
    }
}
