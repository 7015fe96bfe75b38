//! Command to validate rootdir configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use rootdir::config::{Config, ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a rootdir configuration file.
///
/// Without a file, validates the merged configuration of every source that
/// applies to the current directory.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: Option<PathBuf>,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let Some(config_path) = self.config_path else {
            load_configuration(global, Config::default())?;
            println!("Configuration is valid");
            return Ok(());
        };

        if !config_path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                config_path.display()
            )));
        }

        let config =
            ConfigLoader::load_file(&config_path).map_err(|e| CliError::Config(e.to_string()))?;
        ConfigValidator::validate(&config).map_err(|e| CliError::Config(e.to_string()))?;

        println!("Configuration is valid");
        Ok(())
    }
}
