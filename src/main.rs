//! sitenav - validate and inspect site navigation config.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    sitenav::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { dir, dry, format } => cli::init::new_config(dir.as_deref(), *dry, *format),
        Commands::Check => cli::check::check_config(&cli),
        Commands::Sidebar { args } => {
            let (_, config) = cli::common::load_config(&cli)?;
            cli::sidebar::show_sidebar(args, &config)
        }
        Commands::Dump { pretty } => {
            let (_, config) = cli::common::load_config(&cli)?;
            cli::dump::dump_config(&config, *pretty)
        }
    }
}
