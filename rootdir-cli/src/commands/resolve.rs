//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which selects the project
//! directory closest to the filesystem root, renders it, and publishes it.

use crate::error::CliError;
use crate::utils::{directory_references, load_configuration, report_warnings, GlobalOptions};
use clap::Args;
use rootdir::output::{FileSink, ShellType, WriterSink};
use rootdir::{Config, OutputFormat, OutputSink, PlanExecutor, RootDirectoryPlan};
use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

/// Resolve and publish the root directory.
#[derive(Args)]
#[allow(clippy::struct_excessive_bools)]
pub struct ResolveCommand {
    /// Project directories (default: configured directories); an empty
    /// value stands for an absent directory
    #[arg(value_name = "DIR")]
    pub directories: Vec<OsString>,

    /// Do not traverse symbolic links when resolving the root
    #[arg(long)]
    pub no_follow_symlinks: bool,

    /// Skip resolution and publish nothing
    #[arg(long)]
    pub skip: bool,

    /// Property name the root directory is published under
    #[arg(long, value_name = "NAME")]
    pub property: Option<String>,

    /// Output format (plain, properties, json, export:<shell>, or export for the current shell)
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Shell for export output (implies --format export)
    #[arg(long, value_name = "SHELL")]
    pub shell: Option<ShellType>,

    /// Write to FILE instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of replacing it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Print the plan without resolving or publishing
    #[arg(long)]
    pub dry_run: bool,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Command-line values override every configured layer
        let overrides = self.overrides()?;
        let config = load_configuration(global, overrides)?;

        // 2. Filter and select
        let plan = RootDirectoryPlan::new(config.to_options()).build_plan()?;

        if self.dry_run {
            if !global.quiet {
                eprintln!("Dry run - would perform the following actions:");
                for (i, action) in plan.actions.iter().enumerate() {
                    eprintln!("  {}. {}", i + 1, action.description());
                }
            }
            report_warnings(global, &plan);
            return Ok(());
        }

        // 3. Render
        let result = PlanExecutor::new().execute(&plan)?;
        report_warnings(global, &plan);

        // 4. Publish
        let Some(root) = result.root else {
            return Ok(());
        };

        let format = config.output_format();
        let mut sink: Box<dyn OutputSink> = match self.output {
            Some(path) => Box::new(FileSink::new(path, format).append(self.append)),
            None => Box::new(WriterSink::new(io::stdout().lock(), format)),
        };
        sink.publish(config.output_property(), &root)?;

        Ok(())
    }

    fn overrides(&self) -> Result<Config, CliError> {
        let output_format = match (self.format, self.shell) {
            (None | Some(OutputFormat::Export(_)), Some(shell)) => {
                Some(OutputFormat::Export(shell))
            }
            (Some(format), Some(_)) => {
                return Err(CliError::InvalidArguments(format!(
                    "--shell cannot be combined with --format {format}"
                )))
            }
            (format, None) => format,
        };

        Ok(Config {
            project_directories: directory_references(self.directories.clone()),
            follow_symbolic_links: self.no_follow_symlinks.then_some(false),
            skip: self.skip.then_some(true),
            output_property: self.property.clone(),
            output_format,
        })
    }
}
