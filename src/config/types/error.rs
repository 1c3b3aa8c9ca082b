//! Configuration error types.

use super::FieldPath;
use owo_colors::{OwoColorize, Stream};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// SchemaError / NotFoundError
// ============================================================================

/// A structural violation in the raw configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid config at `{path}`: {reason}")]
pub struct SchemaError {
    /// Where the violation was found (e.g. `themeConfig.nav[2].items[0]`).
    pub path: FieldPath,
    pub reason: String,
}

impl SchemaError {
    pub fn new(path: FieldPath, reason: impl Into<String>) -> Self {
        Self {
            path,
            reason: reason.into(),
        }
    }
}

/// No sidebar section applies to a page and no `/` fallback exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no sidebar section matches `{page_path}` and no `/` fallback is configured")]
pub struct NotFoundError {
    pub page_path: String,
}

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected a .toml or .json file")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

/// A non-fatal finding: the config is usable but probably not what was meant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub path: FieldPath,
    pub message: String,
}

/// Errors and warnings collected during one validation pass.
#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<SchemaError>,
    warnings: Vec<ConfigWarning>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, path: FieldPath, reason: impl Into<String>) {
        self.errors.push(SchemaError::new(path, reason));
    }

    pub fn warn(&mut self, path: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigWarning {
            path,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn errors(&self) -> &[SchemaError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// First error in document order.
    pub fn first_error(&self) -> Option<&SchemaError> {
        self.errors.first()
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "config has {} suspicious field(s):", self.warnings.len());
        for warning in &self.warnings {
            eprintln!(
                "- {} {}",
                warning.path.as_str().if_supports_color(Stream::Stderr, |t| t.cyan()),
                warning.message.if_supports_color(Stream::Stderr, |t| t.dimmed())
            );
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dimmed = |text: &str| {
            text.if_supports_color(Stream::Stderr, |t| t.dimmed())
                .to_string()
        };
        writeln!(
            f,
            "{}\n",
            "config validation failed:".if_supports_color(Stream::Stderr, |t| t.red().bold().to_string())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            writeln!(
                f,
                "{}{}{}",
                dimmed("["),
                err.path.to_string().if_supports_color(Stream::Stderr, |t| t.cyan()),
                dimmed("]")
            )?;
            write!(
                f,
                "{} {}",
                "→".if_supports_color(Stream::Stderr, |t| t.red()),
                err.reason
            )?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            let count = self.errors.len().to_string();
            write!(
                f,
                "\n\n{} {} {}",
                dimmed("found"),
                count.if_supports_color(Stream::Stderr, |t| t.red().bold().to_string()),
                dimmed("errors")
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
