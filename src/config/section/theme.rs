//! `themeConfig` object.
//!
//! Aggregates navigation, sidebar, repository links, and the smaller
//! display options.
//!
//! # Example
//!
//! ```toml
//! [themeConfig]
//! lastUpdated = "Last Updated"   # or true / false
//! sidebarDepth = 2
//! displayAllHeaders = false
//! ```

use super::nav::{NavItem, parse_nav};
use super::repo::{REPO_FIELDS, RepoConfig};
use super::sidebar::{Sidebar, parse_sidebar};
use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::value::{Fields, UNKNOWN_FIELD, kind};
use serde::Serialize;
use serde_json::Value;

/// Label shown when `lastUpdated = true`.
pub const DEFAULT_LAST_UPDATED: &str = "Last Updated";

/// Header depth extracted into the sidebar when `sidebarDepth` is absent.
pub const DEFAULT_SIDEBAR_DEPTH: u8 = 1;

/// Theme settings consumed by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar sections keyed by path prefix.
    pub sidebar: Sidebar,

    /// Label for the "last updated" timestamp; `None` hides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sidebar_depth: Option<u8>,

    pub display_all_headers: bool,

    #[serde(flatten)]
    pub repo: RepoConfig,
}

impl ThemeConfig {
    /// Read `themeConfig`, visiting keys in document order.
    pub(crate) fn parse(fields: &Fields<'_>, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let mut theme = Self::default();
        let mut valid = true;

        for (key, value) in fields.entries() {
            let path = fields.child_path(key);
            match key.as_str() {
                _ if value.is_null() => {}
                "nav" => match parse_nav(value, &path, diag) {
                    Some(nav) => theme.nav = nav,
                    None => valid = false,
                },
                "sidebar" => match parse_sidebar(value, &path, diag) {
                    Some(sidebar) => theme.sidebar = sidebar,
                    None => valid = false,
                },
                "lastUpdated" => theme.last_updated = parse_last_updated(value, path, diag),
                "sidebarDepth" => theme.sidebar_depth = parse_sidebar_depth(value, path, diag),
                "displayAllHeaders" => {
                    theme.display_all_headers = fields.boolean(key, diag).unwrap_or(false);
                }
                other if REPO_FIELDS.contains(&other) => theme.repo.parse_field(other, fields, diag),
                _ => diag.warn(path, UNKNOWN_FIELD),
            }
        }
        theme.repo.check(fields, diag);

        valid.then_some(theme)
    }

    /// Header depth the sidebar should display.
    #[inline]
    pub fn sidebar_depth(&self) -> u8 {
        self.sidebar_depth.unwrap_or(DEFAULT_SIDEBAR_DEPTH)
    }
}

fn parse_last_updated(
    value: &Value,
    path: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<String> {
    match value {
        Value::String(label) => Some(label.clone()),
        Value::Bool(true) => Some(DEFAULT_LAST_UPDATED.to_string()),
        Value::Bool(false) => None,
        other => {
            diag.error(
                path,
                format!("expected a string or boolean, found {}", kind(other)),
            );
            None
        }
    }
}

fn parse_sidebar_depth(
    value: &Value,
    path: FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<u8> {
    match value.as_u64().and_then(|n| u8::try_from(n).ok()) {
        Some(depth) => Some(depth),
        None => {
            diag.error(
                path,
                format!("expected a small non-negative integer, found {value}"),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(raw: Value) -> (Option<ThemeConfig>, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let path = FieldPath::root().key("themeConfig");
        let fields = Fields::new(&raw, path, &mut diag).unwrap();
        let theme = ThemeConfig::parse(&fields, &mut diag);
        (theme, diag)
    }

    #[test]
    fn test_empty_theme() {
        let (theme, diag) = parse(json!({}));
        assert!(diag.is_empty());
        let theme = theme.unwrap();
        assert!(theme.nav.is_empty());
        assert!(theme.sidebar.is_empty());
        assert_eq!(theme.sidebar_depth(), DEFAULT_SIDEBAR_DEPTH);
        assert!(!theme.display_all_headers);
    }

    #[test]
    fn test_last_updated_forms() {
        let (theme, _) = parse(json!({ "lastUpdated": "最后一次更新于" }));
        assert_eq!(theme.unwrap().last_updated.as_deref(), Some("最后一次更新于"));

        let (theme, _) = parse(json!({ "lastUpdated": true }));
        assert_eq!(theme.unwrap().last_updated.as_deref(), Some(DEFAULT_LAST_UPDATED));

        let (theme, _) = parse(json!({ "lastUpdated": false }));
        assert_eq!(theme.unwrap().last_updated, None);

        let (_, diag) = parse(json!({ "lastUpdated": 3 }));
        assert_eq!(diag.first_error().unwrap().path.as_str(), "themeConfig.lastUpdated");
    }

    #[test]
    fn test_sidebar_depth() {
        let (theme, _) = parse(json!({ "sidebarDepth": 2 }));
        assert_eq!(theme.unwrap().sidebar_depth(), 2);

        let (_, diag) = parse(json!({ "sidebarDepth": -1 }));
        assert!(diag.has_errors());
        let (_, diag) = parse(json!({ "sidebarDepth": 1000 }));
        assert!(diag.has_errors());
    }

    #[test]
    fn test_errors_in_both_nav_and_sidebar_are_collected() {
        let (theme, diag) = parse(json!({
            "nav": [{ "text": "bad" }],
            "sidebar": { "/": [1] }
        }));
        assert!(theme.is_none());
        assert_eq!(diag.errors().len(), 2);
    }

    #[test]
    fn test_unknown_theme_field_warns() {
        let (theme, diag) = parse(json!({ "sidebarDepht": 2, "repo": "vuejs/vuepress" }));
        assert!(theme.is_some());
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].path.as_str(), "themeConfig.sidebarDepht");
    }

    #[test]
    fn test_first_error_follows_document_order() {
        let (_, diag) = parse(json!({
            "editLinks": "yes",
            "nav": [{ "text": "x" }],
            "sidebarDepth": "deep"
        }));
        let paths: Vec<_> = diag.errors().iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            [
                "themeConfig.editLinks",
                "themeConfig.nav[0]",
                "themeConfig.sidebarDepth",
            ]
        );
    }

    #[test]
    fn test_null_fields_are_defaults() {
        let (theme, diag) = parse(json!({ "nav": null, "sidebar": null, "editLinks": null }));
        assert!(!diag.has_errors());
        assert_eq!(theme.unwrap(), ThemeConfig::default());
    }
}
