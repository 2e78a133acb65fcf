/// The built-in rule table.
///
/// Keep the table ordered narrowest-first. Moving a rule changes which
/// category a file lands in whenever two rules both match, and nothing else
/// will flag the regression.
use super::{extension, segments};
use crate::model::CategoryKind;

/// One test against a path or its last component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// The full path contains the text.
    PathContains(&'static str),
    /// Some path component equals the text exactly.
    Segment(&'static str),
    /// The file name contains the text.
    NameContains(&'static str),
    /// The file name equals the text exactly.
    NameEquals(&'static str),
    /// The file name starts with the text.
    NamePrefix(&'static str),
    /// The file extension (no dot) equals the text, ignoring ASCII case.
    Extension(&'static str),
}

impl Pattern {
    #[inline]
    pub fn matches(&self, path: &str, name: &str) -> bool {
        match *self {
            Self::PathContains(text) => path.contains(text),
            Self::Segment(text) => segments(path).any(|s| s == text),
            Self::NameContains(text) => name.contains(text),
            Self::NameEquals(text) => name == text,
            Self::NamePrefix(text) => name.starts_with(text),
            Self::Extension(text) => {
                extension(name).is_some_and(|ext| ext.eq_ignore_ascii_case(text))
            }
        }
    }
}

/// A category and the patterns that select it; any one pattern suffices.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub category: CategoryKind,
    pub any_of: &'static [Pattern],
}

impl Rule {
    #[inline]
    pub fn matches(&self, path: &str, name: &str) -> bool {
        self.any_of.iter().any(|p| p.matches(path, name))
    }
}

use CategoryKind as C;
use Pattern::*;

/// First match wins.
pub static RULES: &[Rule] = &[
    // SQLite names its temp files `etilqs_*`, often with a `.tmp` suffix.
    Rule { category: C::SqliteTemp, any_of: &[PathContains("etilqs")] },
    Rule { category: C::Pnacl, any_of: &[NamePrefix("pnacl")] },
    Rule { category: C::IndexJournal, any_of: &[NameEquals("Index-journal")] },
    Rule { category: C::SafeBrowsing, any_of: &[NameContains("Safe Browsing")] },
    Rule {
        category: C::JumpListIcons,
        any_of: &[PathContains("\\JumpListIcons\\"), NameEquals("JumpListIconsOld")],
    },
    // Must precede every directory rule below: origin directories can
    // contain any of their substrings.
    Rule { category: C::IndexedDb, any_of: &[Segment("IndexedDB")] },
    Rule { category: C::Favicons, any_of: &[PathContains("Favicons")] },
    Rule { category: C::Bookmarks, any_of: &[PathContains("Bookmarks")] },
    Rule {
        category: C::Preferences,
        any_of: &[NameEquals("Preferences"), NameEquals("Secure Preferences")],
    },
    Rule { category: C::LocalState, any_of: &[NameEquals("Local State")] },
    Rule { category: C::Shortcuts, any_of: &[NameContains("Shortcuts")] },
    Rule {
        category: C::Extensions,
        any_of: &[
            PathContains("\\Extensions\\"),
            PathContains("\\Extension Rules\\"),
            PathContains("\\Extension State\\"),
            PathContains("\\Local Extension Settings\\"),
        ],
    },
    Rule { category: C::GcmStore, any_of: &[PathContains("\\GCM Store\\")] },
    Rule { category: C::CrxInstall, any_of: &[PathContains("\\CRX_INSTALL")] },
    Rule { category: C::Cache, any_of: &[PathContains("\\Cache\\")] },
    Rule { category: C::FileSystem, any_of: &[PathContains("\\File System\\")] },
    Rule {
        category: C::MediaCache,
        any_of: &[PathContains("\\Media Cache\\"), PathContains("\\MEDIA CACHE\\")],
    },
    Rule { category: C::FontCache, any_of: &[PathContains("ChromeDWriteFontCache")] },
    Rule { category: C::GpuCache, any_of: &[PathContains("\\GPUCache\\")] },
    Rule { category: C::SyncData, any_of: &[PathContains("\\Sync Data\\")] },
    Rule {
        category: C::SyncExtensionSettings,
        any_of: &[PathContains("\\Sync Extension Settings\\")],
    },
    Rule { category: C::SessionStorage, any_of: &[PathContains("\\Session Storage\\")] },
    Rule { category: C::LocalStorage, any_of: &[PathContains("\\Local Storage\\")] },
    Rule { category: C::Cookies, any_of: &[NameContains("Cookies")] },
    Rule {
        category: C::Temp,
        any_of: &[Extension("tmp"), Extension("temp"), PathContains("\\Temp\\")],
    },
];
