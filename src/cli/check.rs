//! `sitenav check`: validate the config and summarize it.

use anyhow::Result;
use sitenav::config::{NavItem, SiteConfig};
use sitenav::log;

use super::Cli;
use super::common::{display_name, load_config};

/// Validate the config file, reporting every error and warning.
pub fn check_config(cli: &Cli) -> Result<()> {
    let (path, config) = load_config(cli)?;
    for line in summarize(&config) {
        log!("check"; "{}", line);
    }
    log!("check"; "{} is valid", display_name(&path));
    Ok(())
}

/// Human-readable summary lines for a valid config.
fn summarize(config: &SiteConfig) -> Vec<String> {
    let theme = &config.theme_config;
    let mut lines = Vec::new();

    let links: Vec<_> = theme.nav.iter().flat_map(NavItem::links).collect();
    let external = links.iter().filter(|l| l.is_external()).count();
    lines.push(format!(
        "nav: {} top-level items, {} links ({} external)",
        theme.nav.len(),
        links.len(),
        external
    ));

    let prefixes: Vec<_> = theme
        .sidebar
        .sections()
        .iter()
        .map(|s| s.prefix.as_str())
        .collect();
    if prefixes.is_empty() {
        lines.push("sidebar: none".to_string());
    } else {
        lines.push(format!("sidebar: {}", prefixes.join(", ")));
    }
    if !theme.sidebar.is_empty() && theme.sidebar.get(sitenav::FALLBACK_KEY).is_none() {
        lines.push("sidebar: no `/` fallback, unmatched pages get no sidebar".to_string());
    }

    if let (Some(url), Some(label)) = (theme.repo.repo_url(), theme.repo.repo_label()) {
        lines.push(format!("repo: {label} → {url}"));
    }
    if let Some(example) = theme.repo.edit_link("README.md") {
        lines.push(format!(
            "edit links: \"{}\" → {}",
            theme.repo.edit_link_text(),
            example
        ));
    }
    lines
}
