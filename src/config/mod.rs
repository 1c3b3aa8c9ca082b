//! Site navigation configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # themeConfig parts
//! │   ├── nav        # nav: NavItem tree
//! │   ├── sidebar    # sidebar: prefix → entries, resolution
//! │   ├── repo       # repo / docs* / editLink*
//! │   └── theme      # themeConfig itself
//! ├── types/         # Utility types
//! │   ├── error      # SchemaError, NotFoundError, ConfigError, diagnostics
//! │   └── field      # FieldPath
//! ├── source.rs      # Reading .toml / .json files
//! ├── value.rs       # Typed reads from raw values
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Shape
//!
//! | Key                     | Purpose                                      |
//! |-------------------------|----------------------------------------------|
//! | `title`, `description`  | Site metadata                                |
//! | `themeConfig.nav`       | Top navigation: links and groups             |
//! | `themeConfig.sidebar`   | Sidebar documents per path prefix            |
//! | `themeConfig.repo`, ... | Repository link and "edit this page" links   |

pub mod section;
pub mod source;
pub mod types;
mod util;
mod value;

pub use section::{
    FALLBACK_KEY, MAX_NAV_DEPTH, NavItem, NavLink, RepoConfig, Sidebar, SidebarEntry,
    SidebarSection, ThemeConfig,
};
pub use source::{ConfigFormat, read_raw};
pub use types::{
    ConfigDiagnostics, ConfigError, ConfigWarning, FieldPath, NotFoundError, SchemaError,
};
pub use util::find_config_file;

use crate::debug;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use value::{Fields, UNKNOWN_FIELD};

// ============================================================================
// root configuration
// ============================================================================

/// Validated site configuration.
///
/// Built once by [`SiteConfig::parse`] and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub theme_config: ThemeConfig,
}

impl SiteConfig {
    /// Validate a raw value, failing on the first schema error.
    ///
    /// Warnings are discarded; use [`Self::parse_with_diagnostics`] to see them.
    pub fn parse(raw: &Value) -> Result<Self, SchemaError> {
        match Self::parse_with_diagnostics(raw) {
            Ok((config, _)) => Ok(config),
            Err(diag) => Err(diag
                .first_error()
                .cloned()
                .unwrap_or_else(|| SchemaError::new(FieldPath::root(), "invalid config"))),
        }
    }

    /// Validate a raw value, collecting every error and warning in one pass.
    ///
    /// All-or-nothing: returns the config only if no errors were found.
    pub fn parse_with_diagnostics(
        raw: &Value,
    ) -> Result<(Self, ConfigDiagnostics), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        let config = Self::walk(raw, &mut diag);
        match (config, diag.has_errors()) {
            (Some(config), false) => Ok((config, diag)),
            _ => Err(diag),
        }
    }

    fn walk(raw: &Value, diag: &mut ConfigDiagnostics) -> Option<Self> {
        let fields = Fields::new(raw, FieldPath::root(), diag)?;
        let mut config = Self::default();
        let mut valid = true;

        for (key, value) in fields.entries() {
            match key.as_str() {
                _ if value.is_null() => {}
                "title" => config.title = fields.string(key, diag).unwrap_or_default(),
                "description" => config.description = fields.string(key, diag).unwrap_or_default(),
                "themeConfig" => match fields.object(key, diag) {
                    Some(theme) => match ThemeConfig::parse(&theme, diag) {
                        Some(theme) => config.theme_config = theme,
                        None => valid = false,
                    },
                    None => valid = false,
                },
                _ => diag.warn(fields.child_path(key), UNKNOWN_FIELD),
            }
        }

        valid.then_some(config)
    }

    /// Load and validate a `.toml` or `.json` config file.
    ///
    /// Returns the config with its warnings. Schema errors come back as
    /// [`ConfigError::Diagnostics`] carrying every problem found.
    pub fn load(path: &Path) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let raw = read_raw(path)?;
        let (config, diag) = Self::parse_with_diagnostics(&raw).map_err(ConfigError::Diagnostics)?;
        debug!(
            "config";
            "loaded {}: {} nav items, {} sidebar sections, {} warnings",
            path.display(),
            config.theme_config.nav.len(),
            config.theme_config.sidebar.len(),
            diag.warnings().len()
        );
        Ok((config, diag))
    }

    /// Project back to the raw shape accepted by [`Self::parse`].
    pub fn to_raw(&self) -> Value {
        serde_json::to_value(self)
            .expect("config holds only strings, bools, small integers and string-keyed maps")
    }

    #[inline]
    pub fn nav(&self) -> &[NavItem] {
        &self.theme_config.nav
    }

    #[inline]
    pub fn sidebar(&self) -> &Sidebar {
        &self.theme_config.sidebar
    }

    /// Sidebar entries for a page path (see [`Sidebar::resolve`]).
    pub fn resolve_sidebar(&self, page_path: &str) -> Result<&[SidebarEntry], NotFoundError> {
        self.theme_config.sidebar.resolve(page_path)
    }
}

// ============================================================================
// Test Helpers
// ============================================================================

/// The sample navigation of a small documentation site, as JSON.
#[cfg(test)]
pub fn test_sample_raw() -> Value {
    serde_json::json!({
        "title": "页头",
        "description": "Just playing around",
        "themeConfig": {
            "lastUpdated": "最后一次更新于",
            "nav": [
                { "text": "首页", "link": "/" },
                { "text": "页面", "link": "/foo/" },
                { "text": "列表", "items": [
                    { "text": "列表项", "link": "/foo/" },
                    { "text": "列表项", "link": "/bar/" }
                ] },
                { "text": "分组列表", "items": [
                    { "text": "组", "items": [{ "text": "子目录", "link": "/language/chinese" }] },
                    { "text": "组", "items": [{ "text": "子目录", "link": "/language/chinese" }] }
                ] },
                { "text": "外链", "link": "https://google.com" }
            ],
            "sidebar": {
                "/foo/": ["", "one", "two"],
                "/bar/": ["", "three", "four"],
                "/": ["", "standard", "meeting", "about"]
            },
            "repo": "vuejs/vuepress",
            "repoLabel": "查看源码",
            "docsRepo": "vuejs/vuepress",
            "docsDir": "docs",
            "docsBranch": "master",
            "editLinks": true,
            "editLinkText": "帮助我们改善此页面！"
        }
    })
}

// ============================================================================
// tests
// ============================================================================
