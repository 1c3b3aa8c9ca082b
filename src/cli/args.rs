//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use sitenav::config::ConfigFormat;
use std::path::PathBuf;

/// Validate and inspect site navigation config
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory (.toml or .json)
    #[arg(short = 'C', long, global = true, default_value = "sitenav.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to write into (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the config instead of writing it
        #[arg(long)]
        dry: bool,

        /// Config file format
        #[arg(short, long, value_enum, default_value = "toml")]
        format: ConfigFormat,
    },

    /// Validate the config and report every problem
    #[command(visible_alias = "c")]
    Check,

    /// Show the sidebar entries for page paths
    #[command(visible_alias = "s")]
    Sidebar {
        #[command(flatten)]
        args: SidebarArgs,
    },

    /// Print the normalized config as JSON
    #[command(visible_alias = "d")]
    Dump {
        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
}

/// Sidebar command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SidebarArgs {
    /// Page paths to resolve (e.g. /foo/one.html)
    #[arg(value_name = "PAGE", required = true)]
    pub pages: Vec<String>,

    /// Print entries resolved to site links instead of document names
    #[arg(short, long)]
    pub links: bool,

    /// Output a JSON object keyed by page path
    #[arg(short, long)]
    pub json: bool,
}
