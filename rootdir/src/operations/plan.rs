//! Plan types for root directory resolution.
//!
//! This module defines the plan structures that describe what will happen
//! when a resolution runs, without touching the filesystem a second time.

use std::path::PathBuf;

use crate::path::{CanonicalPath, SymlinkPolicy};

/// A single action to be taken during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Do nothing; the run was skipped by configuration.
    Skip,

    /// Render the selected root directory.
    Render {
        /// The directory chosen by the selector, in lexical form.
        root: CanonicalPath,
        /// The chosen directory as given, made absolute; this is rendered.
        source: PathBuf,
        /// Whether symbolic links are followed while rendering.
        policy: SymlinkPolicy,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Skip => "Skip root directory resolution".to_string(),
            Self::Render { source, policy, .. } => {
                let links = if policy.follows() {
                    "following symbolic links"
                } else {
                    "without following symbolic links"
                };
                format!("Render {} {links}", source.display())
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Resolve root directory");
    /// assert_eq!(plan.description, "Resolve root directory");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::operations::{OperationPlan, PlanAction};
    ///
    /// let plan = OperationPlan::new("Test").add_action(PlanAction::Skip);
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
