//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: Scan source files and verify internal and API routes
//! - `init`: Initialize routelint configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Where to write the JSON report (overrides config file)
    #[arg(long)]
    pub report_path: Option<PathBuf>,

    /// Skip writing the JSON report
    #[arg(long)]
    pub no_report: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan source files and verify that internal and API routes resolve
    Check(CheckCommand),
    /// Initialize a new .routelintrc.json configuration file
    Init,
}
