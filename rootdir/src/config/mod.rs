//! Configuration system for rootdir.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`ROOTDIR_*`)
//! 3. Private project config (`rootdir.local.yaml`)
//! 4. Project config (`rootdir.yaml`)
//! 5. User config (`~/.rootdir/config.yaml`)
//! 6. Built-in defaults
//!
//! A layer that sets `project_directories` replaces the whole list of the
//! layers below it.
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use rootdir::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//!
//! let options = config.to_options();
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use rootdir::config::{Config, ConfigBuilder};
//! use std::path::PathBuf;
//!
//! let custom = Config {
//!     project_directories: Some(vec![Some(PathBuf::from("/repo")), None]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.to_options().project_directories.len(), 2);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{Config, DEFAULT_OUTPUT_PROPERTY};
pub use validator::ConfigValidator;
