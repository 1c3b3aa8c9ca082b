//! `themeConfig.nav`: top navigation bar entries.
//!
//! # Example
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Home"
//! link = "/"
//!
//! [[themeConfig.nav]]
//! text = "Languages"
//! items = [
//!   { text = "Group", items = [{ text = "Chinese", link = "/language/chinese" }] },
//! ]
//! ```

use crate::config::types::{ConfigDiagnostics, FieldPath};
use crate::config::value::{Fields, kind};
use serde::Serialize;
use serde_json::Value;

/// Deepest level at which a group may still appear (group → subgroup → leaf).
pub const MAX_NAV_DEPTH: usize = 2;

const NAV_ITEM_FIELDS: &[&str] = &["text", "link", "items"];

/// A navigation entry: either a direct link or a labeled group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavItem {
    Link { text: String, link: NavLink },
    Group { text: String, items: Vec<NavItem> },
}

impl NavItem {
    /// Display label.
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    /// Target of a leaf entry.
    pub fn link(&self) -> Option<&NavLink> {
        match self {
            Self::Link { link, .. } => Some(link),
            Self::Group { .. } => None,
        }
    }

    /// Children of a group entry.
    pub fn items(&self) -> Option<&[NavItem]> {
        match self {
            Self::Link { .. } => None,
            Self::Group { items, .. } => Some(items),
        }
    }

    #[inline]
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Iterate over every leaf link below (and including) this item, depth-first.
    pub fn links(&self) -> Box<dyn Iterator<Item = &NavLink> + '_> {
        match self {
            Self::Link { link, .. } => Box::new(std::iter::once(link)),
            Self::Group { items, .. } => Box::new(items.iter().flat_map(|item| item.links())),
        }
    }
}

/// A nav link target: a site path (`/foo/`) or an absolute URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NavLink(String);

impl NavLink {
    pub fn new(link: impl Into<String>) -> Self {
        Self(link.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the link leaves the site (`https://...`, `mailto:...`).
    pub fn is_external(&self) -> bool {
        crate::config::util::is_absolute_url(&self.0)
    }
}

impl AsRef<str> for NavLink {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate the `nav` array. Returns `None` when the value is not an array.
pub(crate) fn parse_nav(
    value: &Value,
    path: &FieldPath,
    diag: &mut ConfigDiagnostics,
) -> Option<Vec<NavItem>> {
    let Value::Array(raw_items) = value else {
        diag.error(
            path.clone(),
            format!("expected an array, found {}", kind(value)),
        );
        return None;
    };
    parse_items(raw_items, path, 0, diag)
}

fn parse_items(
    raw_items: &[Value],
    path: &FieldPath,
    depth: usize,
    diag: &mut ConfigDiagnostics,
) -> Option<Vec<NavItem>> {
    let mut items = Vec::with_capacity(raw_items.len());
    let mut valid = true;
    for (i, raw) in raw_items.iter().enumerate() {
        match parse_item(raw, path.index(i), depth, diag) {
            Some(item) => items.push(item),
            None => valid = false,
        }
    }
    valid.then_some(items)
}

fn parse_item(
    raw: &Value,
    path: FieldPath,
    depth: usize,
    diag: &mut ConfigDiagnostics,
) -> Option<NavItem> {
    let fields = Fields::new(raw, path, diag)?;
    let path = fields.path().clone();

    let has_link = fields.has("link");
    let has_items = fields.has("items");
    let shape_error = match (has_link, has_items) {
        (true, true) => Some("has both `link` and `items`"),
        (false, false) => Some("has neither `link` nor `items`"),
        _ => None,
    };
    if let Some(reason) = shape_error {
        diag.error(path, reason);
        parse_text(&fields, diag);
        fields.warn_unknown(NAV_ITEM_FIELDS, diag);
        return None;
    }

    // Read `text` and the target in the order they appear.
    let target_key = if has_link { "link" } else { "items" };
    let (text, target) = if fields.position("text") < fields.position(target_key) {
        let text = parse_text(&fields, diag);
        (text, parse_target(&fields, has_link, depth, diag))
    } else {
        let target = parse_target(&fields, has_link, depth, diag);
        (parse_text(&fields, diag), target)
    };
    fields.warn_unknown(NAV_ITEM_FIELDS, diag);

    let text = text?;
    Some(match target? {
        Target::Link(link) => NavItem::Link { text, link },
        Target::Items(items) => NavItem::Group { text, items },
    })
}

enum Target {
    Link(NavLink),
    Items(Vec<NavItem>),
}

fn parse_target(
    fields: &Fields<'_>,
    has_link: bool,
    depth: usize,
    diag: &mut ConfigDiagnostics,
) -> Option<Target> {
    if has_link {
        let link = fields.string("link", diag)?;
        return Some(Target::Link(parse_link(link, fields.child_path("link"), diag)));
    }

    let raw_items = fields.array("items", diag)?;
    if depth >= MAX_NAV_DEPTH {
        diag.warn(
            fields.path().clone(),
            format!("group nested deeper than {MAX_NAV_DEPTH} levels, themes may not render it"),
        );
    }
    if raw_items.is_empty() {
        diag.warn(fields.child_path("items"), "empty group");
    }
    parse_items(raw_items, &fields.child_path("items"), depth + 1, diag).map(Target::Items)
}

fn parse_text(fields: &Fields<'_>, diag: &mut ConfigDiagnostics) -> Option<String> {
    if !fields.has("text") {
        diag.error(fields.child_path("text"), "missing display text");
        return None;
    }
    let text = fields.string("text", diag)?;
    if text.is_empty() {
        diag.error(fields.child_path("text"), "display text must not be empty");
        return None;
    }
    Some(text)
}

fn parse_link(link: String, path: FieldPath, diag: &mut ConfigDiagnostics) -> NavLink {
    let link = NavLink::new(link);
    if !link.is_external() && !link.as_str().starts_with('/') {
        diag.warn(path, "site link should start with `/`");
    }
    link
}

// ============================================================================
// Tests
// ============================================================================
