//! Root directory planning and execution.
//!
//! This module ties the filter, selector and renderer together behind an
//! explicit options value.

use std::path::PathBuf;

use crate::error::Result;
use crate::path::filter::filter_candidates;
use crate::path::selector::select_closest_to_root;
use crate::path::{DirectoryReference, SymlinkPolicy};

use super::executor::PlanExecutor;
use super::plan::{OperationPlan, PlanAction};

/// Options for a root directory resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootDirectoryOptions {
    /// Directories of the cooperating projects, in enumeration order.
    pub project_directories: Vec<DirectoryReference>,

    /// Whether symbolic links are followed while rendering.
    pub symlinks: SymlinkPolicy,

    /// Skip the resolution entirely.
    pub skip: bool,
}

impl RootDirectoryOptions {
    /// Creates options for the given project directories.
    ///
    /// Symbolic links are followed and nothing is skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::operations::RootDirectoryOptions;
    /// use rootdir::path::SymlinkPolicy;
    /// use std::path::PathBuf;
    ///
    /// let options = RootDirectoryOptions::new(vec![Some(PathBuf::from("/repo")), None]);
    /// assert_eq!(options.symlinks, SymlinkPolicy::Follow);
    /// assert!(!options.skip);
    /// ```
    #[must_use]
    pub fn new(project_directories: Vec<DirectoryReference>) -> Self {
        Self {
            project_directories,
            symlinks: SymlinkPolicy::Follow,
            skip: false,
        }
    }

    /// Sets the symbolic link policy.
    #[must_use]
    pub const fn with_symlinks(mut self, symlinks: SymlinkPolicy) -> Self {
        self.symlinks = symlinks;
        self
    }

    /// Sets the symbolic link policy from a `follow` flag.
    #[must_use]
    pub const fn with_follow_symbolic_links(mut self, follow: bool) -> Self {
        self.symlinks = SymlinkPolicy::from_follow(follow);
        self
    }

    /// Sets the skip flag.
    #[must_use]
    pub const fn with_skip(mut self, skip: bool) -> Self {
        self.skip = skip;
        self
    }

    /// Appends a project directory.
    #[must_use]
    pub fn with_project_directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.project_directories.push(Some(directory.into()));
        self
    }
}

/// A root directory plan generator.
///
/// Planning filters the candidates and selects the root; executing the
/// plan renders it.
pub struct RootDirectoryPlan {
    options: RootDirectoryOptions,
}

impl RootDirectoryPlan {
    /// Creates a new plan with the given options.
    #[must_use]
    pub const fn new(options: RootDirectoryOptions) -> Self {
        Self { options }
    }

    /// The options this plan was built from.
    #[must_use]
    pub const fn options(&self) -> &RootDirectoryOptions {
        &self.options
    }

    /// Builds an operation plan for this request.
    ///
    /// A skipped request yields a plan with a single [`PlanAction::Skip`]
    /// and nothing is filtered. Otherwise the candidates are filtered and
    /// the root selected; the plan renders that root.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptyCandidateSet`](crate::Error::EmptyCandidateSet) if no
    ///   candidate is an existing directory
    /// - [`Error::RootIndeterminable`](crate::Error::RootIndeterminable) if
    ///   the candidates do not share a root
    pub fn build_plan(&self) -> Result<OperationPlan> {
        let plan = OperationPlan::new("Resolve root directory");

        if self.options.skip {
            return Ok(plan.add_action(PlanAction::Skip));
        }

        let valid = filter_candidates(
            self.options
                .project_directories
                .iter()
                .map(Option::as_deref),
        );
        let selection = select_closest_to_root(&valid)?;
        let warnings = selection.warnings();

        let mut plan = plan.add_action(PlanAction::Render {
            root: selection.root().clone(),
            source: selection.source().to_path_buf(),
            policy: self.options.symlinks,
        });
        for warning in warnings {
            plan = plan.add_warning(warning);
        }
        Ok(plan)
    }

    /// Plans and executes the resolution.
    ///
    /// Returns `Ok(None)` when the request is skipped.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::build_plan`] and of rendering.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::operations::{RootDirectoryOptions, RootDirectoryPlan};
    ///
    /// let dir = tempfile::tempdir().unwrap();
    /// let module = dir.path().join("module");
    /// std::fs::create_dir(&module).unwrap();
    ///
    /// let options = RootDirectoryOptions::new(vec![None, Some(module)])
    ///     .with_project_directory(dir.path());
    /// let root = RootDirectoryPlan::new(options).execute().unwrap();
    ///
    /// let expected = std::fs::canonicalize(dir.path()).unwrap();
    /// assert_eq!(root.as_deref(), expected.to_str());
    /// ```
    pub fn execute(&self) -> Result<Option<String>> {
        let plan = self.build_plan()?;
        let result = PlanExecutor::new().execute(&plan)?;
        Ok(result.root)
    }
}
