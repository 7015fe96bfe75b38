//! Error types for the rootdir library.
//!
//! This module provides the error hierarchy for the root directory pipeline,
//! using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a rootdir error.
///
/// # Examples
///
/// ```
/// use rootdir::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/repo".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the rootdir library.
#[derive(Debug, Error)]
pub enum Error {
    /// No candidate survived filtering.
    ///
    /// Every input was absent, did not exist, or was not a directory.
    #[error("no valid project directory candidates")]
    EmptyCandidateSet,

    /// Two candidates do not share a root that can be ordered.
    #[error(
        "the root directory path is indeterminable: {} and {} do not share a filesystem root",
        first.display(),
        second.display()
    )]
    RootIndeterminable {
        /// The current minimum when the mismatch was found.
        first: PathBuf,
        /// The candidate whose root differs.
        second: PathBuf,
    },

    /// The selected path could not be rendered to its canonical form.
    #[error("unable to resolve {}: {source}", path.display())]
    PathResolution {
        /// The path being resolved.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Rendering without following links met a symbolic link.
    #[error(
        "refusing to traverse symbolic link {} while resolving {}",
        link.display(),
        path.display()
    )]
    SymlinkTraversalRefused {
        /// The path being resolved.
        path: PathBuf,
        /// The component that is a symbolic link.
        link: PathBuf,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

/// Coarse classification of an [`Error`].
///
/// The first three kinds are the failures of the root directory pipeline;
/// callers typically treat all of them as terminal for the invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// No valid candidates.
    EmptyCandidateSet,
    /// Candidates without a common comparable root.
    RootIndeterminable,
    /// The selected path could not be rendered.
    PathResolution,
    /// Configuration could not be loaded or is invalid.
    Configuration,
    /// Anything else (plain I/O, invalid input paths).
    Other,
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::{Error, FailureKind};
    ///
    /// assert_eq!(Error::EmptyCandidateSet.kind(), FailureKind::EmptyCandidateSet);
    /// ```
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::EmptyCandidateSet => FailureKind::EmptyCandidateSet,
            Self::RootIndeterminable { .. } => FailureKind::RootIndeterminable,
            Self::PathResolution { .. } | Self::SymlinkTraversalRefused { .. } => {
                FailureKind::PathResolution
            }
            Self::Configuration(_) | Self::Validation { .. } => FailureKind::Configuration,
            Self::InvalidPath { .. } | Self::Io(_) => FailureKind::Other,
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathResolution {
    ///     path: PathBuf::from("/nonexistent"),
    ///     source: io::Error::from(ErrorKind::NotFound),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::PathResolution { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::Error;
    /// use std::io::{self, ErrorKind};
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PathResolution {
    ///     path: PathBuf::from("/restricted"),
    ///     source: io::Error::from(ErrorKind::PermissionDenied),
    /// };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PathResolution { source, .. } | Self::Io(source) => {
                source.kind() == std::io::ErrorKind::PermissionDenied
            }
            _ => false,
        }
    }
}
