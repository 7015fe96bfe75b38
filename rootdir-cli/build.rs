//! Build script for rootdir-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("rootdir")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Find the project directory closest to the filesystem root")
        .long_about(
            "Selects, among the directories of a multi-project build, the one closest to the \
             filesystem root and publishes its canonical path",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Override the user configuration directory")
                .value_name("PATH")
                .global(true)
                .env("ROOTDIR_CONFIG_DIR"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve and publish the root directory")
                .long_about(
                    "Filter the project directories, select the one closest to the filesystem \
                     root, resolve it to a canonical path and publish it",
                ),
            Command::new("select")
                .about("Show the selected root directory without resolving links")
                .long_about("Print the selected project directory as given, for diagnosis"),
            Command::new("validate")
                .about("Validate configuration")
                .long_about("Check a rootdir configuration file, or the merged configuration, for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("rootdir.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
