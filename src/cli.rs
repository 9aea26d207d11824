// ABOUTME: Command-line interface definitions using clap
// ABOUTME: Defines the export/roots subcommands and global flags

use crate::api::DEFAULT_API_BASE;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "org-todoist")]
#[command(about = "Convert a Todoist task list into an Emacs org-mode outline", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Todoist API token (overrides token file/env)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Token file (default: $XDG_CONFIG_HOME/org-todoist/token.txt)
    #[arg(long, global = true)]
    pub token_file: Option<PathBuf>,

    /// Sync API base URL
    #[arg(long, global = true, default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Increase log verbosity on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the whole task list as an org outline (default)
    Export,

    /// Print the root items of every project, for debugging
    Roots,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Export)
    }

    /// Default log filter when RUST_LOG is not set.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
