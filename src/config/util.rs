//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Whether `link` is an absolute URL with a scheme.
///
/// Site paths and relative document names are not:
///
/// ```ignore
/// is_absolute_url("https://google.com")   -> true
/// is_absolute_url("mailto:me@example.com") -> true
/// is_absolute_url("/foo/")                -> false
/// is_absolute_url("vuejs/vuepress")       -> false
/// ```
pub fn is_absolute_url(link: &str) -> bool {
    url::Url::parse(link).is_ok_and(|url| url.scheme().len() > 1)
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/docs/guide/   ← cwd
/// /home/user/site/sitenav.toml  ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_is_absolute_url() {
        assert!(is_absolute_url("https://google.com"));
        assert!(is_absolute_url("http://localhost:8080/docs"));
        assert!(is_absolute_url("mailto:someone@example.com"));
        assert!(!is_absolute_url("/"));
        assert!(!is_absolute_url("/language/chinese"));
        assert!(!is_absolute_url("vuejs/vuepress"));
        assert!(!is_absolute_url(""));
    }

    #[test]
    fn test_windows_drive_is_not_url() {
        // Single-letter schemes are drive letters, not URLs.
        assert!(!is_absolute_url("C:/docs/readme.md"));
    }

    #[test]
    fn test_find_config_walks_up() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("docs/guide");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("sitenav.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("sitenav.toml")).unwrap();
        assert_eq!(found, temp.path().join("sitenav.toml"));
    }

    #[test]
    fn test_find_config_missing() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            find_config_from(temp.path(), Path::new("definitely-missing-sitenav.json")),
            None
        );
    }

    #[test]
    fn test_find_config_absolute() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        assert_eq!(find_config_file(&path), None);
        fs::write(&path, "{}").unwrap();
        assert_eq!(find_config_file(&path), Some(path));
    }
}
