//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! renders the selected root directory.

use crate::error::Result;
use crate::path::render;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Whether this was a dry run (the root was selected but not rendered).
    pub dry_run: bool,

    /// Whether the run was skipped by configuration.
    pub skipped: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The root directory string, if one was produced.
    ///
    /// In dry-run mode this is the selected path before any filesystem
    /// resolution.
    pub root: Option<String>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, root: Option<String>) -> Self {
        Self {
            dry_run,
            skipped: plan.actions.contains(&PlanAction::Skip),
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            root,
        }
    }
}

/// Executes operation plans.
///
/// The executor can run in normal mode (rendering through the filesystem)
/// or dry-run mode (reporting the selection only).
///
/// # Examples
///
/// ```
/// use rootdir::operations::{PlanExecutor, RootDirectoryOptions, RootDirectoryPlan};
///
/// let dir = tempfile::tempdir().unwrap();
/// let options = RootDirectoryOptions::new(vec![Some(dir.path().to_path_buf())]);
/// let plan = RootDirectoryPlan::new(options).build_plan().unwrap();
///
/// let result = PlanExecutor::new().dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(result.root.is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanExecutor {
    dry_run: bool,
}

impl PlanExecutor {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new() -> Self {
        Self { dry_run: false }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails; see [`render::render`].
    pub fn execute(&self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut root = None;
        for action in &plan.actions {
            if let Some(rendered) = self.execute_action(action)? {
                root = Some(rendered);
            }
        }
        Ok(ExecutionResult::new(plan, self.dry_run, root))
    }

    fn execute_action(&self, action: &PlanAction) -> Result<Option<String>> {
        match action {
            PlanAction::Skip => {
                log::debug!("Execution skipped");
                Ok(None)
            }
            PlanAction::Render { root, .. } if self.dry_run => {
                Ok(Some(root.to_path_buf().to_string_lossy().into_owned()))
            }
            PlanAction::Render { source, policy, .. } => render::render(source, *policy).map(Some),
        }
    }
}
