//! Common utilities shared across CLI commands.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use sitenav::config::{SiteConfig, find_config_file};
use sitenav::debug;

use super::Cli;

/// Locate the config file named by `--config`, searching upward from cwd.
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    match find_config_file(&cli.config) {
        Some(path) => {
            debug!("config"; "using {}", path.display());
            Ok(path)
        }
        None => bail!(
            "Config file '{}' not found. Run 'sitenav init' to create one.",
            cli.config.display()
        ),
    }
}

/// Load and validate the config, printing any warnings.
pub fn load_config(cli: &Cli) -> Result<(PathBuf, SiteConfig)> {
    let path = resolve_config_path(cli)?;
    let config = load_from(&path)?;
    Ok((path, config))
}

fn load_from(path: &Path) -> Result<SiteConfig> {
    let (config, diag) = SiteConfig::load(path)
        .with_context(|| format!("Failed to load config '{}'", display_name(path)))?;
    diag.print_warnings();
    Ok(config)
}

/// Page paths from CLI arguments, or from stdin when the only argument is `-`.
pub fn collect_pages(pages: &[String]) -> Result<Vec<String>> {
    if pages.len() == 1 && pages[0] == "-" {
        return read_lines_from_stdin(io::stdin().lock());
    }
    Ok(pages.to_vec())
}

/// Read non-empty trimmed lines.
pub fn read_lines_from_stdin(reader: impl BufRead) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    Ok(lines)
}

/// File name only, for messages about the config file.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_lines_skips_blank() {
        let input = "/foo/one.html\n\n  /bar/  \n";
        let lines = read_lines_from_stdin(input.as_bytes()).unwrap();
        assert_eq!(lines, ["/foo/one.html", "/bar/"]);
    }

    #[test]
    fn test_collect_pages_from_args() {
        let pages = vec!["/a.html".to_string(), "/b.html".to_string()];
        assert_eq!(collect_pages(&pages).unwrap(), pages);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/site/docs/sitenav.toml")), "sitenav.toml");
    }

    #[test]
    fn test_load_from_invalid_config_has_context() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitenav.json");
        fs::write(&path, r#"{"themeConfig":{"nav":[{"text":"x","link":"/","items":[]}]}}"#)
            .unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(err.to_string().contains("sitenav.json"));
        assert!(format!("{err:?}").contains("themeConfig.nav[0]"));
    }
}
