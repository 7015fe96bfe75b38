//! Root directory resolution using the plan-execute pattern.
//!
//! Resolution is split into two phases:
//! 1. **Planning**: filters the candidates and selects the root
//! 2. **Execution**: renders the selected root through the filesystem
//!
//! Planning never consults the filesystem beyond the existence checks of
//! the filter, so a plan can be inspected (or executed as a dry run) to see
//! which directory would be chosen.
//!
//! # Examples
//!
//! ```
//! use rootdir::operations::{PlanExecutor, RootDirectoryOptions, RootDirectoryPlan};
//! use rootdir::path::SymlinkPolicy;
//!
//! let dir = tempfile::tempdir().unwrap();
//! let options = RootDirectoryOptions::new(vec![Some(dir.path().to_path_buf())])
//!     .with_symlinks(SymlinkPolicy::NoFollow);
//!
//! // Generate plan
//! let plan = RootDirectoryPlan::new(options).build_plan().unwrap();
//!
//! // Execute plan
//! let result = PlanExecutor::new().dry_run().execute(&plan).unwrap();
//! assert!(result.root.is_some());
//! ```

pub mod executor;
pub mod plan;
pub mod root_directory;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
pub use root_directory::{RootDirectoryOptions, RootDirectoryPlan};
