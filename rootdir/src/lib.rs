#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # rootdir
//!
//! A library for finding the root directory of a multi-project build.
//!
//! Given the directories of the cooperating sub-projects, rootdir drops the
//! ones that do not exist, selects the one closest to the filesystem root,
//! and renders it as a canonical path string.
//!
//! ## Core Types
//!
//! - [`ValidatedDirectory`] and [`CanonicalPath`]: Directory types with validation
//! - [`RootDirectoryOptions`] and [`RootDirectoryPlan`]: The resolution pipeline
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`OutputFormat`] and [`OutputSink`]: Publishing the result
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use rootdir::{RootDirectoryOptions, RootDirectoryPlan};
//! use std::fs;
//!
//! let temp = tempfile::tempdir().unwrap();
//! let module = temp.path().join("moduleA");
//! fs::create_dir(&module).unwrap();
//!
//! let options = RootDirectoryOptions::default()
//!     .with_project_directory(&module)
//!     .with_project_directory(temp.path())
//!     .with_project_directory(temp.path().join("missing"));
//! let root = RootDirectoryPlan::new(options).execute().unwrap();
//!
//! let expected = fs::canonicalize(temp.path()).unwrap();
//! assert_eq!(root, Some(expected.to_string_lossy().into_owned()));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, FailureKind, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    ExecutionResult, OperationPlan, PlanAction, PlanExecutor, RootDirectoryOptions,
    RootDirectoryPlan,
};
pub use output::{OutputFormat, OutputSink};
pub use path::{
    CanonicalPath, DirectoryReference, PathRelationship, RootSelection, SymlinkPolicy,
    ValidatedDirectory,
};
