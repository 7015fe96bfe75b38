//! Command to show the selected root directory.
//!
//! Filters and selects like `resolve` but prints the selected path as it
//! was given, without resolving symbolic links or publishing anything.

use crate::error::CliError;
use crate::utils::{directory_references, load_configuration, report_warnings, GlobalOptions};
use clap::Args;
use rootdir::{Config, PlanExecutor, RootDirectoryPlan};
use std::ffi::OsString;

/// Show the selected root directory without resolving links.
#[derive(Args)]
pub struct SelectCommand {
    /// Project directories (default: configured directories); an empty
    /// value stands for an absent directory
    #[arg(value_name = "DIR")]
    pub directories: Vec<OsString>,
}

impl SelectCommand {
    /// Execute the select command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let overrides = Config {
            project_directories: directory_references(self.directories),
            ..Default::default()
        };
        let config = load_configuration(global, overrides)?;

        // The skip flag only governs publishing
        let options = config.to_options().with_skip(false);
        let plan = RootDirectoryPlan::new(options).build_plan()?;

        let result = PlanExecutor::new().dry_run().execute(&plan)?;
        report_warnings(global, &plan);

        if let Some(root) = result.root {
            println!("{root}");
        }

        Ok(())
    }
}
