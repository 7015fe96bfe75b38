//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ResolveCommand, SelectCommand, ValidateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for finding the root directory of a multi-project build.
#[derive(Parser)]
#[command(name = "rootdir")]
#[command(
    version,
    about = "Find the project directory closest to the filesystem root",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the user configuration directory
    #[arg(long, value_name = "PATH", global = true, env = "ROOTDIR_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve and publish the root directory
    Resolve(ResolveCommand),

    /// Show the selected root directory without resolving links
    Select(SelectCommand),

    /// Validate configuration
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_resolve_with_empty_directory() {
        let cli = Cli::try_parse_from(["rootdir", "resolve", "", "/repo", "--format", "json"])
            .unwrap();
        match cli.command {
            Command::Resolve(cmd) => {
                assert_eq!(cmd.directories.len(), 2);
                assert!(cmd.directories[0].is_empty());
            }
            _ => panic!("expected resolve"),
        }
    }

    #[test]
    fn test_append_requires_output() {
        assert!(Cli::try_parse_from(["rootdir", "resolve", "--append"]).is_err());
    }
}
