//! Typed reads from a raw configuration value.
//!
//! Every read reports type mismatches into [`ConfigDiagnostics`] at the
//! field's path and returns `None`, so one pass over the document collects
//! every problem. `null` is treated the same as an absent key.

use super::types::{ConfigDiagnostics, FieldPath};
use rustc_hash::FxHashSet;
use serde_json::{Map, Value};

/// Warning attached to keys the schema does not know.
pub const UNKNOWN_FIELD: &str = "unknown field, ignored";

/// Human-readable name of a JSON value kind, used in type mismatch reasons.
pub fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// An object in the raw config together with its path.
pub struct Fields<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Fields<'a> {
    /// View `value` as an object, reporting an error if it is not one.
    pub fn new(value: &'a Value, path: FieldPath, diag: &mut ConfigDiagnostics) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self { map, path }),
            other => {
                diag.error(path, format!("expected an object, found {}", kind(other)));
                None
            }
        }
    }

    #[inline]
    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    #[inline]
    pub fn child_path(&self, key: &str) -> FieldPath {
        self.path.key(key)
    }

    /// Value under `key`, skipping explicit nulls.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|v| !v.is_null())
    }

    #[inline]
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn string(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<String> {
        match self.get(key)? {
            Value::String(s) => Some(s.clone()),
            other => {
                diag.error(
                    self.child_path(key),
                    format!("expected a string, found {}", kind(other)),
                );
                None
            }
        }
    }

    pub fn boolean(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(b) => Some(*b),
            other => {
                diag.error(
                    self.child_path(key),
                    format!("expected a boolean, found {}", kind(other)),
                );
                None
            }
        }
    }

    pub fn array(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<&'a Vec<Value>> {
        match self.get(key)? {
            Value::Array(items) => Some(items),
            other => {
                diag.error(
                    self.child_path(key),
                    format!("expected an array, found {}", kind(other)),
                );
                None
            }
        }
    }

    /// Nested object under `key`.
    pub fn object(&self, key: &str, diag: &mut ConfigDiagnostics) -> Option<Fields<'a>> {
        let value = self.get(key)?;
        Fields::new(value, self.child_path(key), diag)
    }

    /// Index of `key` in document order, `usize::MAX` when absent.
    pub fn position(&self, key: &str) -> usize {
        self.map
            .keys()
            .position(|k| k == key)
            .unwrap_or(usize::MAX)
    }

    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.map.iter()
    }

    /// Warn about keys outside `known`.
    pub fn warn_unknown(&self, known: &[&str], diag: &mut ConfigDiagnostics) {
        let known: FxHashSet<&str> = known.iter().copied().collect();
        for key in self.map.keys() {
            if !known.contains(key.as_str()) {
                diag.warn(self.child_path(key), UNKNOWN_FIELD);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_is_absent() {
        let raw = json!({ "title": null });
        let mut diag = ConfigDiagnostics::new();
        let fields = Fields::new(&raw, FieldPath::root(), &mut diag).unwrap();
        assert!(!fields.has("title"));
        assert_eq!(fields.string("title", &mut diag), None);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_type_mismatch_reports_path() {
        let raw = json!({ "editLinks": "yes" });
        let mut diag = ConfigDiagnostics::new();
        let fields = Fields::new(&raw, FieldPath::root().key("themeConfig"), &mut diag).unwrap();
        assert_eq!(fields.boolean("editLinks", &mut diag), None);
        let err = diag.first_error().unwrap();
        assert_eq!(err.path.as_str(), "themeConfig.editLinks");
        assert_eq!(err.reason, "expected a boolean, found a string");
    }

    #[test]
    fn test_non_object_root() {
        let raw = json!([1, 2]);
        let mut diag = ConfigDiagnostics::new();
        assert!(Fields::new(&raw, FieldPath::root(), &mut diag).is_none());
        assert_eq!(diag.errors()[0].reason, "expected an object, found an array");
    }

    #[test]
    fn test_warn_unknown() {
        let raw = json!({ "title": "x", "base": "/docs/" });
        let mut diag = ConfigDiagnostics::new();
        let fields = Fields::new(&raw, FieldPath::root(), &mut diag).unwrap();
        fields.warn_unknown(&["title"], &mut diag);
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].path.as_str(), "base");
    }

    #[test]
    fn test_position_follows_document_order() {
        let raw = json!({ "link": "/", "text": "Home" });
        let mut diag = ConfigDiagnostics::new();
        let fields = Fields::new(&raw, FieldPath::root(), &mut diag).unwrap();
        assert!(fields.position("link") < fields.position("text"));
        assert_eq!(fields.position("items"), usize::MAX);
    }
}
