//! `themeConfig.sidebar`: per-section document lists keyed by path prefix.
//!
//! # Example
//!
//! ```toml
//! [themeConfig.sidebar]
//! "/foo/" = ["", "one", "two"]   # /foo/, /foo/one.html, /foo/two.html
//! "/" = ["", "about"]            # fallback
//! ```
//!
//! A page picks the section with the longest key that prefixes its path.
//! Pages no key matches fall back to [`FALLBACK_KEY`].

use crate::config::types::{ConfigDiagnostics, FieldPath, NotFoundError};
use crate::config::value::{Fields, kind};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// Section used when no other prefix matches.
pub const FALLBACK_KEY: &str = "/";

/// Ordered sidebar sections, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sidebar {
    sections: Vec<SidebarSection>,
}

/// Documents listed for pages under one path prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarSection {
    pub prefix: String,
    pub entries: Vec<SidebarEntry>,
}

/// Document identifier relative to its section prefix (`""` is the index).
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct SidebarEntry(String);

impl Sidebar {
    pub fn new(sections: Vec<SidebarSection>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[SidebarSection] {
        &self.sections
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn get(&self, prefix: &str) -> Option<&SidebarSection> {
        self.sections.iter().find(|s| s.prefix == prefix)
    }

    /// Section that applies to `page_path`.
    ///
    /// Longest matching prefix wins; on equal length the earlier section
    /// wins. Falls back to the `/` section when nothing matches.
    pub fn resolve_section(&self, page_path: &str) -> Result<&SidebarSection, NotFoundError> {
        let mut best: Option<&SidebarSection> = None;
        for section in &self.sections {
            if !page_path.starts_with(section.prefix.as_str()) {
                continue;
            }
            if best.is_none_or(|b| section.prefix.len() > b.prefix.len()) {
                best = Some(section);
            }
        }

        best.or_else(|| self.get(FALLBACK_KEY))
            .ok_or_else(|| NotFoundError {
                page_path: page_path.to_string(),
            })
    }

    /// Entries of the section that applies to `page_path`.
    pub fn resolve(&self, page_path: &str) -> Result<&[SidebarEntry], NotFoundError> {
        self.resolve_section(page_path).map(|s| s.entries.as_slice())
    }
}

impl SidebarSection {
    /// Entries resolved to site links against this section's prefix.
    pub fn links(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(|e| e.link(&self.prefix))
    }
}

impl SidebarEntry {
    pub fn new(entry: impl Into<String>) -> Self {
        Self(entry.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this entry is the section's index document.
    #[inline]
    pub fn is_index(&self) -> bool {
        self.0.is_empty()
    }

    /// Site link for this entry under `prefix`.
    ///
    /// ```text
    /// ("/foo/", "")          -> /foo/
    /// ("/foo/", "one")       -> /foo/one.html
    /// ("/foo/", "guide/")    -> /foo/guide/
    /// ("/foo/", "/about")    -> /about.html
    /// ```
    pub fn link(&self, prefix: &str) -> String {
        let entry = self.0.as_str();
        let base = if entry.starts_with('/') {
            entry.to_string()
        } else {
            let mut base = prefix.to_string();
            if !base.ends_with('/') {
                base.push('/');
            }
            base.push_str(entry);
            base
        };

        if entry.is_empty() || base.ends_with('/') || base.ends_with(".html") {
            base
        } else {
            format!("{base}.html")
        }
    }
}

impl AsRef<str> for SidebarEntry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for Sidebar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.sections.len()))?;
        for section in &self.sections {
            map.serialize_entry(&section.prefix, &section.entries)?;
        }
        map.end()
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the `sidebar` mapping. Returns `None` on any error.
pub(crate) fn parse_sidebar(
    value: &Value,
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<Sidebar> {
    let fields = Fields::new(value, path.clone(), diag)?;

    let mut sections = Vec::new();
    let mut valid = true;
    for (prefix, raw_entries) in fields.entries() {
        let section_path = fields.child_path(prefix);
        check_prefix(prefix, &section_path, diag);
        match parse_entries(raw_entries, &section_path, diag) {
            Some(entries) => sections.push(SidebarSection {
                prefix: prefix.clone(),
                entries,
            }),
            None => valid = false,
        }
    }

    valid.then(|| Sidebar::new(sections))
}

fn check_prefix(prefix: &str, path: &FieldPath, diag: &mut ConfigDiagnostics) {
    if !prefix.starts_with('/') {
        diag.warn(path.clone(), "path prefix should start with `/`, pages never match it");
    } else if !prefix.ends_with('/') {
        diag.warn(path.clone(), "path prefix should end with `/`");
    }
}

fn parse_entries(
    value: &Value,
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<Vec<SidebarEntry>> {
    let Value::Array(raw_entries) = value else {
        diag.error(
            path.clone(),
            format!("expected an array of document names, found {}", kind(value)),
        );
        return None;
    };

    let mut entries = Vec::with_capacity(raw_entries.len());
    let mut valid = true;
    for (i, raw) in raw_entries.iter().enumerate() {
        match raw {
            Value::String(s) => entries.push(SidebarEntry::new(s.clone())),
            other => {
                diag.error(
                    path.index(i),
                    format!("expected a document name string, found {}", kind(other)),
                );
                valid = false;
            }
        }
    }
    valid.then_some(entries)
}

// ============================================================================
// Tests
// ============================================================================
