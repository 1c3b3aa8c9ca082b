//! sitenav - navigation and sidebar configuration for static site themes.
//!
//! Validates a raw `title` / `description` / `themeConfig` value into an
//! immutable [`SiteConfig`] and resolves which sidebar section applies to a
//! page.
//!
//! ```ignore
//! let raw = sitenav::config::read_raw(Path::new("sitenav.toml"))?;
//! let config = sitenav::parse(&raw)?;
//! let entries = sitenav::resolve_sidebar(&config, "/foo/one.html")?;
//! ```

pub mod config;
pub mod logger;

pub use config::{
    ConfigDiagnostics, ConfigError, FALLBACK_KEY, FieldPath, NavItem, NavLink, NotFoundError,
    SchemaError, Sidebar, SidebarEntry, SidebarSection, SiteConfig, ThemeConfig,
};

use serde_json::Value;

/// Validate a raw configuration value.
///
/// Fails with the first [`SchemaError`] in document order; nothing partial
/// is returned.
pub fn parse(raw: &Value) -> Result<SiteConfig, SchemaError> {
    SiteConfig::parse(raw)
}

/// Sidebar entries for `page_path`: longest matching prefix, else `/`.
pub fn resolve_sidebar<'a>(
    config: &'a SiteConfig,
    page_path: &str,
) -> Result<&'a [SidebarEntry], NotFoundError> {
    config.resolve_sidebar(page_path)
}
