//! Configuration schema definitions.
//!
//! This module defines the configuration structure for rootdir: the
//! project directories to choose from, how the chosen one is rendered, and
//! how it is published.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::operations::RootDirectoryOptions;
use crate::output::OutputFormat;
use crate::path::SymlinkPolicy;

/// Property name used when none is configured.
pub const DEFAULT_OUTPUT_PROPERTY: &str = "rootdir";

/// Complete configuration structure.
///
/// Every field is optional so that configurations from several sources can
/// be layered; unset fields fall back to the built-in defaults.
///
/// # Examples
///
/// ```
/// use rootdir::config::Config;
/// use std::path::PathBuf;
///
/// let config: Config = serde_yaml::from_str(
///     "projectDirectories:\n  - /repo\n  - null\nfollowSymbolicLinks: false\n",
/// )
/// .unwrap();
///
/// assert_eq!(
///     config.project_directories,
///     Some(vec![Some(PathBuf::from("/repo")), None])
/// );
/// assert_eq!(config.follow_symbolic_links, Some(false));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directories of the cooperating projects; `null` entries are allowed.
    #[serde(alias = "projectDirectories", skip_serializing_if = "Option::is_none")]
    pub project_directories: Option<Vec<Option<PathBuf>>>,

    /// Whether symbolic links are followed when rendering.
    #[serde(alias = "followSymbolicLinks", skip_serializing_if = "Option::is_none")]
    pub follow_symbolic_links: Option<bool>,

    /// Skip resolution entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<bool>,

    /// Name under which the root directory is published.
    #[serde(alias = "outputProperty", skip_serializing_if = "Option::is_none")]
    pub output_property: Option<String>,

    /// Format of the published output.
    #[serde(alias = "outputFormat", skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults, with every scalar field set.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::config::Config;
    ///
    /// let defaults = Config::with_defaults();
    /// assert_eq!(defaults.follow_symbolic_links, Some(true));
    /// assert_eq!(defaults.output_property.as_deref(), Some("rootdir"));
    /// ```
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            project_directories: None,
            follow_symbolic_links: Some(true),
            skip: Some(false),
            output_property: Some(DEFAULT_OUTPUT_PROPERTY.to_string()),
            output_format: Some(OutputFormat::Plain),
        }
    }

    /// The symbolic link policy, following links when unset.
    #[must_use]
    pub fn symlink_policy(&self) -> SymlinkPolicy {
        SymlinkPolicy::from_follow(self.follow_symbolic_links.unwrap_or(true))
    }

    /// The output property name, or the default.
    #[must_use]
    pub fn output_property(&self) -> &str {
        self.output_property
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_PROPERTY)
    }

    /// The output format, or the default.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// The explicit pipeline options described by this configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::config::Config;
    /// use rootdir::path::SymlinkPolicy;
    /// use std::path::PathBuf;
    ///
    /// let config = Config {
    ///     project_directories: Some(vec![Some(PathBuf::from("/repo"))]),
    ///     follow_symbolic_links: Some(false),
    ///     ..Default::default()
    /// };
    ///
    /// let options = config.to_options();
    /// assert_eq!(options.symlinks, SymlinkPolicy::NoFollow);
    /// assert!(!options.skip);
    /// ```
    #[must_use]
    pub fn to_options(&self) -> RootDirectoryOptions {
        RootDirectoryOptions::new(self.project_directories.clone().unwrap_or_default())
            .with_symlinks(self.symlink_policy())
            .with_skip(self.skip.unwrap_or(false))
    }
}
