//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading rootdir configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::normalize::normalize_from;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the shared project configuration.
pub const PROJECT_CONFIG_FILE: &str = "rootdir.yaml";

/// File name of the private, uncommitted project configuration.
pub const LOCAL_CONFIG_FILE: &str = "rootdir.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use rootdir::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.rootdir/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use rootdir::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.rootdir/config.yaml` (precedence 1)
    /// 2. Project `rootdir.yaml` walking up from `working_dir` (precedence 2)
    /// 3. Project `rootdir.local.yaml` next to it (precedence 3)
    ///
    /// The `config_dir` parameter overrides where the user config is loaded
    /// from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, config_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(config_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);

        // Higher precedence last
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if there is one.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::default_config_dir() {
                Some(dir) => dir.join("config.yaml"),
                None => return Ok(None),
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `rootdir.yaml` or
    /// `rootdir.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let candidate = current.join(name);
                if candidate.is_file() {
                    let config = Self::load_file(&candidate)?;
                    log::debug!("Loaded configuration from {}", candidate.display());
                    configs.push(ConfigSource {
                        path: candidate,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// Relative `project_directories` entries are resolved against the
    /// directory containing the file, and `~` is expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// a project directory entry cannot be resolved.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let mut config: Config = serde_yaml::from_str(&contents)?;

        let base = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => env::current_dir()?,
        };
        Self::resolve_project_directories(&mut config, &base)?;

        Ok(config)
    }

    /// Resolve relative project directories in `config` against `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if `~` expansion fails.
    pub fn resolve_project_directories(config: &mut Config, base: &Path) -> Result<()> {
        let Some(directories) = config.project_directories.as_mut() else {
            return Ok(());
        };

        for directory in directories.iter_mut().flatten() {
            *directory = normalize_from(directory.as_path(), base)?;
        }

        Ok(())
    }

    /// Default user configuration directory, `~/.rootdir`.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".rootdir"))
    }
}
