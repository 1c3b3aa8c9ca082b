//! `sitenav dump`: print the normalized config.

use anyhow::Result;
use sitenav::config::SiteConfig;

/// Print the normalized config as JSON on stdout.
pub fn dump_config(config: &SiteConfig, pretty: bool) -> Result<()> {
    println!("{}", render(config, pretty)?);
    Ok(())
}

fn render(config: &SiteConfig, pretty: bool) -> Result<String> {
    let raw = config.to_raw();
    let text = if pretty {
        serde_json::to_string_pretty(&raw)?
    } else {
        serde_json::to_string(&raw)?
    };
    Ok(text)
}
