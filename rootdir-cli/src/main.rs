//! Main entry point for the rootdir CLI.
//!
//! Finds the root directory of a multi-project build:
//! - `resolve`: Resolve and publish the root directory
//! - `select`: Show the selected root directory without resolving links
//! - `validate`: Validate configuration
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Usage errors exit with the invalid-arguments code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(4);
        }
        Err(e) => e.exit(),
    };

    // Route library logging to stderr
    let _installed = rootdir::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
    };

    let result = match cli.command {
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Select(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
