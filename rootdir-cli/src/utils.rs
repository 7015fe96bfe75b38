//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading and the conversion of command-line
//! directory arguments.

use crate::error::CliError;
use rootdir::{Config, ConfigBuilder, DirectoryReference, OperationPlan};
use std::ffi::OsString;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger before dispatch
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the user configuration directory.
    pub config_dir: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line `overrides` (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);

    if let Some(ref config_dir) = global.config_dir {
        builder = builder.with_config_dir(config_dir);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Convert positional directory arguments into directory references.
///
/// An empty argument stands for an absent directory. Returns `None` when no
/// arguments were given, so the configured directories apply.
pub fn directory_references(args: Vec<OsString>) -> Option<Vec<DirectoryReference>> {
    if args.is_empty() {
        return None;
    }

    Some(
        args.into_iter()
            .map(|arg| (!arg.is_empty()).then(|| PathBuf::from(arg)))
            .collect(),
    )
}

/// Print plan warnings to stderr unless quiet.
pub fn report_warnings(global: &GlobalOptions, plan: &OperationPlan) {
    if global.quiet {
        return;
    }
    for warning in &plan.warnings {
        eprintln!("Warning: {warning}");
    }
}
