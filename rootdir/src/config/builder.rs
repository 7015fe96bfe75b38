//! Builder for assembling a configuration from all sources.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::env;
use std::path::PathBuf;

/// Builds a [`Config`] by layering defaults, files, environment variables
/// and programmatic overrides, then validating the result.
///
/// # Examples
///
/// ```
/// use rootdir::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_property: Some("build.root".to_string()),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_property(), "build.root");
/// assert_eq!(config.follow_symbolic_links, Some(true));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start project configuration discovery from `dir` instead of the
    /// current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Load the user configuration from `dir` instead of `~/.rootdir`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// Do not read any configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `ROOTDIR_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply `config` on top of every other source.
    ///
    /// Calling this more than once merges the overrides in call order.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        match self.overrides.as_mut() {
            Some(existing) => ConfigMerger::merge_into(existing, &config),
            None => self.overrides = Some(config),
        }
        self
    }

    /// Build and validate the final configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable holds an invalid value, or the merged
    /// configuration fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::with_defaults();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.config_dir.as_deref())?;
            log::debug!("Merging {} configuration file(s)", sources.len());
            ConfigMerger::merge_into(&mut config, &ConfigMerger::merge(sources));
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
