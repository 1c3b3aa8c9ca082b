//! Config field paths built while walking a raw value.

use std::fmt;

/// Location of a value inside the raw configuration.
///
/// Object keys are joined with `.`, array positions use `[i]`. Keys that
/// are not plain identifiers (sidebar prefixes such as `/foo/`) are quoted:
///
/// ```text
/// themeConfig.nav[2].items[0]
/// themeConfig.sidebar["/foo/"][1]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    /// The document root (empty path).
    #[inline]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Path to a child object key.
    pub fn key(&self, key: &str) -> Self {
        if !is_identifier(key) {
            return Self(format!("{}[{:?}]", self.0, key));
        }
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    /// Path to an array element.
    #[inline]
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
