//! Command-line interface module.

mod args;
pub mod check;
pub mod common;
pub mod dump;
pub mod init;
pub mod sidebar;

pub use args::{Cli, Commands, SidebarArgs};
