//! Reading raw configuration values from disk.
//!
//! Both formats land in the same insertion-ordered `serde_json::Value`, so
//! nav order and sidebar key order survive loading.

use super::types::ConfigError;
use serde_json::Value;
use std::{fs, path::Path};

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    /// Parse `content` into a raw value.
    pub fn parse(self, content: &str) -> Result<Value, ConfigError> {
        let value = match self {
            Self::Toml => toml::from_str(content)?,
            Self::Json => serde_json::from_str(content)?,
        };
        Ok(value)
    }
}

/// Read a `.toml` or `.json` config file into a raw value.
pub fn read_raw(path: &Path) -> Result<Value, ConfigError> {
    let format = ConfigFormat::from_path(path)
        .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    format.parse(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TOML_SOURCE: &str = r#"
title = "页头"

[themeConfig.sidebar]
"/foo/" = ["", "one"]
"/bar/" = ["", "three"]
"/" = [""]
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("sitenav.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("docs/site.JSON")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("config.js")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_toml_preserves_key_order() {
        let value = ConfigFormat::Toml.parse(TOML_SOURCE).unwrap();
        let keys: Vec<_> = value["themeConfig"]["sidebar"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["/foo/", "/bar/", "/"]);
        assert_eq!(value["title"], "页头");
    }

    #[test]
    fn test_json_preserves_key_order() {
        let value = ConfigFormat::Json
            .parse(r#"{"themeConfig":{"sidebar":{"/b/":[],"/a/":[],"/":[]}}}"#)
            .unwrap();
        let keys: Vec<_> = value["themeConfig"]["sidebar"]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect();
        assert_eq!(keys, ["/b/", "/a/", "/"]);
    }

    #[test]
    fn test_read_raw_errors() {
        let temp = TempDir::new().unwrap();

        let missing = temp.path().join("missing.toml");
        assert!(matches!(read_raw(&missing), Err(ConfigError::Io(..))));

        let js = temp.path().join("config.js");
        fs::write(&js, "module.exports = {}").unwrap();
        assert!(matches!(
            read_raw(&js),
            Err(ConfigError::UnsupportedFormat(_))
        ));

        let broken = temp.path().join("broken.toml");
        fs::write(&broken, "[themeConfig\nnav = 1").unwrap();
        assert!(matches!(read_raw(&broken), Err(ConfigError::Toml(_))));

        let broken = temp.path().join("broken.json");
        fs::write(&broken, "{").unwrap();
        assert!(matches!(read_raw(&broken), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_read_raw_toml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitenav.toml");
        fs::write(&path, TOML_SOURCE).unwrap();
        let value = read_raw(&path).unwrap();
        assert_eq!(value["themeConfig"]["sidebar"]["/foo/"][1], "one");
    }
}
