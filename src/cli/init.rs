//! `sitenav init`: starter configuration file generation.

use anyhow::{Context, Result, bail};
use sitenav::config::ConfigFormat;
use sitenav::log;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file stem; the extension follows the chosen format.
const CONFIG_STEM: &str = "sitenav";

/// Starter config body: a home link, a dropdown, a grouped dropdown, an
/// external link, and a sidebar with a `/` fallback.
const TEMPLATE_BODY: &str = r#"title = "My Docs"
description = "Just playing around"

[themeConfig]
# Label for the last-updated timestamp (or true / false)
lastUpdated = "Last Updated"

# GitHub shorthand or a full GitLab / Bitbucket URL
repo = "vuejs/vuepress"
# Inferred from `repo` when omitted: GitHub, GitLab, Bitbucket, or Source
repoLabel = "View Source"

# Where editable docs live, if different from `repo`
docsRepo = "vuejs/vuepress"
docsDir = "docs"
docsBranch = "master"
editLinks = true
editLinkText = "Help us improve this page!"

# Each item has `text` and exactly one of `link` or `items`
[[themeConfig.nav]]
text = "Home"
link = "/"

[[themeConfig.nav]]
text = "Guide"
link = "/foo/"

[[themeConfig.nav]]
text = "Lists"
items = [
    { text = "Foo", link = "/foo/" },
    { text = "Bar", link = "/bar/" },
]

[[themeConfig.nav]]
text = "Languages"
items = [
    { text = "Group", items = [{ text = "Chinese", link = "/language/chinese" }] },
]

[[themeConfig.nav]]
text = "External"
link = "https://google.com"

# Longest matching prefix wins; "/" catches everything else
[themeConfig.sidebar]
"/foo/" = ["", "one", "two"]      # /foo/, /foo/one.html, /foo/two.html
"/bar/" = ["", "three", "four"]
"/" = ["", "about"]
"#;

/// Generate starter config content in the given format.
pub fn generate_config_template(format: ConfigFormat) -> Result<String> {
    match format {
        ConfigFormat::Toml => Ok(format!(
            "# sitenav configuration file (v{})\n\n{}",
            env!("CARGO_PKG_VERSION"),
            TEMPLATE_BODY
        )),
        ConfigFormat::Json => {
            let raw = ConfigFormat::Toml.parse(TEMPLATE_BODY)?;
            let mut text = serde_json::to_string_pretty(&raw)?;
            text.push('\n');
            Ok(text)
        }
    }
}

/// Write a starter config into `dir`, refusing to overwrite an existing one.
pub fn write_config(dir: &Path, format: ConfigFormat) -> Result<PathBuf> {
    let path = dir.join(format!("{CONFIG_STEM}.{}", format.extension()));
    if path.exists() {
        bail!("'{}' already exists, not overwriting", path.display());
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory '{}'", dir.display()))?;
    let content = generate_config_template(format)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(path)
}

/// Entry point for `sitenav init`.
///
/// If `dry_run` is true, only prints the config template to stdout.
pub fn new_config(dir: Option<&Path>, dry_run: bool, format: ConfigFormat) -> Result<()> {
    if dry_run {
        print!("{}", generate_config_template(format)?);
        return Ok(());
    }

    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::current_dir().context("Failed to get current working directory")?,
    };
    let path = write_config(&dir, format)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}
