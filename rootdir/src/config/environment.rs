//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `ROOTDIR_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Project directories, in the platform's path-list syntax.
pub const ENV_PROJECT_DIRECTORIES: &str = "ROOTDIR_PROJECT_DIRECTORIES";
/// Whether to follow symbolic links.
pub const ENV_FOLLOW_SYMBOLIC_LINKS: &str = "ROOTDIR_FOLLOW_SYMBOLIC_LINKS";
/// Skip resolution.
pub const ENV_SKIP: &str = "ROOTDIR_SKIP";
/// Output property name.
pub const ENV_OUTPUT_PROPERTY: &str = "ROOTDIR_OUTPUT_PROPERTY";
/// Output format.
pub const ENV_OUTPUT_FORMAT: &str = "ROOTDIR_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use rootdir::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown output format or an invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var_os(name))
    }

    /// Apply overrides read through `lookup` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_overrides`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::config::{Config, EnvironmentConfig};
    /// use std::ffi::OsString;
    ///
    /// let mut config = Config::default();
    /// EnvironmentConfig::apply_from(&mut config, |name| {
    ///     (name == "ROOTDIR_SKIP").then(|| OsString::from("yes"))
    /// })
    /// .unwrap();
    /// assert_eq!(config.skip, Some(true));
    /// ```
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        if let Some(list) = lookup(ENV_PROJECT_DIRECTORIES) {
            config.project_directories = Some(Self::parse_path_list(&list));
        }

        if let Some(val) = lookup(ENV_FOLLOW_SYMBOLIC_LINKS) {
            config.follow_symbolic_links = Some(Self::bool_var(ENV_FOLLOW_SYMBOLIC_LINKS, val)?);
        }

        if let Some(val) = lookup(ENV_SKIP) {
            config.skip = Some(Self::bool_var(ENV_SKIP, val)?);
        }

        if let Some(val) = lookup(ENV_OUTPUT_PROPERTY) {
            config.output_property = Some(Self::to_utf8(ENV_OUTPUT_PROPERTY, val)?);
        }

        if let Some(val) = lookup(ENV_OUTPUT_FORMAT) {
            let format: OutputFormat = Self::to_utf8(ENV_OUTPUT_FORMAT, val)?
                .parse()
                .map_err(|e: Error| Error::Validation {
                    field: ENV_OUTPUT_FORMAT.into(),
                    message: e.to_string(),
                })?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    /// Split a path list; empty entries stand for absent directories.
    fn parse_path_list(list: &OsStr) -> Vec<Option<PathBuf>> {
        if list.is_empty() {
            return Vec::new();
        }

        env::split_paths(list)
            .map(|path| (!path.as_os_str().is_empty()).then_some(path))
            .collect()
    }

    fn bool_var(field: &str, value: OsString) -> Result<bool> {
        Self::parse_bool(field, &Self::to_utf8(field, value)?)
    }

    fn to_utf8(field: &str, value: OsString) -> Result<String> {
        value.into_string().map_err(|_| Error::Validation {
            field: field.into(),
            message: "Value is not valid UTF-8".into(),
        })
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
