//! Path relationship checking.
//!
//! This module determines how two paths relate in the directory hierarchy.
//! The selector uses it to describe candidates the chosen root does not
//! contain.

use std::path::Path;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use rootdir::path::PathRelationship;
/// use std::path::Path;
///
/// let parent = Path::new("/repo");
/// let child = Path::new("/repo/module");
///
/// assert_eq!(
///     PathRelationship::between(parent, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path is an ancestor or descendant of the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// The comparison is component-wise, so trailing separators do not
    /// matter and `/repo` is not an ancestor of `/repository`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a/b"), Path::new("/a")),
    ///     PathRelationship::Descendant
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a/"), Path::new("/a")),
    ///     PathRelationship::Same
    /// );
    /// assert_eq!(
    ///     PathRelationship::between(Path::new("/a"), Path::new("/ab")),
    ///     PathRelationship::Unrelated
    /// );
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path2.starts_with(path1) {
            Self::Ancestor
        } else if path1.starts_with(path2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Check if a path contains another path (ancestor or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/repo");
    /// assert!(PathRelationship::contains(dir, Path::new("/repo/module")));
    /// assert!(PathRelationship::contains(dir, dir));
    /// ```
    #[must_use]
    pub fn contains(path: &Path, other: &Path) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        let (p1, p2) = (path1.display(), path2.display());
        match self {
            Self::Ancestor => format!("{p1} is an ancestor of {p2}"),
            Self::Descendant => format!("{p1} is a descendant of {p2}"),
            Self::Same => format!("{p1} and {p2} are the same path"),
            Self::Unrelated => format!("{p1} and {p2} are unrelated paths"),
        }
    }
}
