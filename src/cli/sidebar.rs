//! `sitenav sidebar`: show which sidebar a page gets.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use sitenav::config::{SidebarSection, SiteConfig};
use sitenav::log;

use super::SidebarArgs;
use super::common::collect_pages;

/// Resolve and print the sidebar for each requested page.
pub fn show_sidebar(args: &SidebarArgs, config: &SiteConfig) -> Result<()> {
    let pages = collect_pages(&args.pages)?;

    if args.json {
        let output = resolve_json(&pages, config, args.links)?;
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for page in &pages {
        let section = resolve(config, page)?;
        log!("sidebar"; "{} → `{}`", page, section.prefix);
        for line in render_entries(section, args.links) {
            println!("{line}");
        }
    }
    Ok(())
}

fn resolve<'a>(config: &'a SiteConfig, page: &str) -> Result<&'a SidebarSection> {
    config
        .sidebar()
        .resolve_section(page)
        .with_context(|| format!("cannot resolve sidebar for '{page}'"))
}

/// Entry names, or site links with `links`. The index entry shows as `(index)`.
fn render_entries(section: &SidebarSection, links: bool) -> Vec<String> {
    if links {
        return section.links().collect();
    }
    section
        .entries
        .iter()
        .map(|e| {
            if e.is_index() {
                "(index)".to_string()
            } else {
                e.as_str().to_string()
            }
        })
        .collect()
}

fn resolve_json(pages: &[String], config: &SiteConfig, links: bool) -> Result<Value> {
    let mut output = Map::new();
    for page in pages {
        let section = resolve(config, page)?;
        let entries: Vec<Value> = if links {
            section.links().map(Value::String).collect()
        } else {
            section
                .entries
                .iter()
                .map(|e| Value::String(e.as_str().to_string()))
                .collect()
        };
        output.insert(page.clone(), Value::Array(entries));
    }
    Ok(Value::Object(output))
}
