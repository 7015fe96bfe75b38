//! Core types for path handling.
//!
//! This module defines the values that flow through the root directory
//! pipeline: raw directory references, validated directories, and the
//! structural [`CanonicalPath`] the selector orders.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::order;

/// A directory location as handed over by the project enumerator.
///
/// `None` stands for a project that reported no directory at all.
pub type DirectoryReference = Option<PathBuf>;

/// A directory that existed at the moment it was validated.
///
/// Nothing guarantees the directory still exists later; the filesystem may
/// change between validation and rendering.
///
/// # Examples
///
/// ```
/// use rootdir::path::ValidatedDirectory;
///
/// let dir = tempfile::tempdir().unwrap();
/// assert!(ValidatedDirectory::validate(dir.path()).is_some());
/// assert!(ValidatedDirectory::validate(dir.path().join("missing")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedDirectory {
    path: PathBuf,
}

impl ValidatedDirectory {
    /// Validate a path, returning `Some` only for existing directories.
    ///
    /// Symbolic links to directories are accepted.
    #[must_use]
    pub fn validate(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        if path.exists() && path.is_dir() {
            Some(Self {
                path: path.to_path_buf(),
            })
        } else {
            None
        }
    }

    /// Get a reference to the path.
    #[must_use]
    pub fn as_path(&self) -> &Path {
        &self.path
    }

    /// Convert into the underlying `PathBuf`.
    #[must_use]
    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

/// The root a path hangs from: an optional platform prefix (a Windows drive
/// or UNC share) and whether the path starts at a root directory.
///
/// Two paths can only be ordered against each other when their roots match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct PathRoot {
    prefix: Option<OsString>,
    has_root_dir: bool,
}

impl PathRoot {
    /// The platform prefix, if any.
    #[must_use]
    pub fn prefix(&self) -> Option<&OsStr> {
        self.prefix.as_deref()
    }

    /// Whether the path starts at a root directory.
    #[must_use]
    pub fn has_root_dir(&self) -> bool {
        self.has_root_dir
    }

    /// Whether paths under `self` and `other` can be ordered.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::path::CanonicalPath;
    /// use std::path::Path;
    ///
    /// let absolute = CanonicalPath::from_path(Path::new("/repo")).unwrap();
    /// let relative = CanonicalPath::from_path(Path::new("repo")).unwrap();
    /// assert!(!absolute.root().is_compatible(relative.root()));
    /// ```
    #[must_use]
    pub fn is_compatible(&self, other: &Self) -> bool {
        if self.has_root_dir != other.has_root_dir {
            return false;
        }
        match (&self.prefix, &other.prefix) {
            (None, None) => true,
            (Some(a), Some(b)) => order::compare_segments(a, b) == Ordering::Equal,
            _ => false,
        }
    }
}

/// A path split into its root and its ordered segments.
///
/// Construction resolves `.` and `..` lexically; no filesystem access is
/// performed. The ordering used by the selector lives in
/// [`CanonicalPath::try_cmp`].
///
/// # Examples
///
/// ```
/// use rootdir::path::CanonicalPath;
/// use std::path::Path;
///
/// let path = CanonicalPath::from_path(Path::new("/repo/./module/../core")).unwrap();
/// assert_eq!(path.depth(), 2);
/// assert_eq!(path.to_path_buf(), Path::new("/repo/core"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalPath {
    root: PathRoot,
    segments: Vec<OsString>,
}

impl CanonicalPath {
    /// Split a path into root and segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPath`] if the path is empty.
    pub fn from_path(path: &Path) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::InvalidPath {
                path: path.to_path_buf(),
                reason: "Path is empty".to_string(),
            });
        }

        let mut root = PathRoot::default();
        let mut segments: Vec<OsString> = Vec::new();

        for component in path.components() {
            match component {
                Component::Prefix(prefix) => root.prefix = Some(prefix.as_os_str().to_owned()),
                Component::RootDir => root.has_root_dir = true,
                Component::CurDir => {}
                Component::ParentDir => {
                    let at_relative_boundary =
                        segments.is_empty() || segments.last().is_some_and(|s| s == "..");
                    if !at_relative_boundary {
                        segments.pop();
                    } else if !root.has_root_dir {
                        // Nothing to climb out of in a relative path.
                        segments.push(OsString::from(".."));
                    }
                }
                Component::Normal(segment) => segments.push(segment.to_owned()),
            }
        }

        Ok(Self { root, segments })
    }

    /// The root of this path.
    #[must_use]
    pub fn root(&self) -> &PathRoot {
        &self.root
    }

    /// The segments below the root.
    #[must_use]
    pub fn segments(&self) -> &[OsString] {
        &self.segments
    }

    /// Number of segments below the root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether this path and `other` share a root and can be ordered.
    #[must_use]
    pub fn is_comparable(&self, other: &Self) -> bool {
        self.root.is_compatible(&other.root)
    }

    /// Order two paths so that ancestors sort before descendants.
    ///
    /// Segments are compared one by one; when one sequence is a prefix of the
    /// other the shorter (the ancestor) sorts first. Returns `None` when the
    /// paths do not share a root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rootdir::path::CanonicalPath;
    /// use std::cmp::Ordering;
    /// use std::path::Path;
    ///
    /// let a = CanonicalPath::from_path(Path::new("/a")).unwrap();
    /// let ab = CanonicalPath::from_path(Path::new("/a/b")).unwrap();
    /// assert_eq!(a.try_cmp(&ab), Some(Ordering::Less));
    /// ```
    #[must_use]
    pub fn try_cmp(&self, other: &Self) -> Option<Ordering> {
        if !self.is_comparable(other) {
            return None;
        }
        Some(order::compare_segment_sequences(
            &self.segments,
            &other.segments,
        ))
    }

    /// Whether `self` is `other` or one of its ancestors.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.is_comparable(other)
            && self.segments.len() <= other.segments.len()
            && order::compare_segment_sequences(
                &self.segments,
                &other.segments[..self.segments.len()],
            ) == Ordering::Equal
    }

    /// Rebuild a native path from the root and segments.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        let mut path = PathBuf::new();
        if let Some(prefix) = &self.root.prefix {
            path.push(prefix);
        }
        if self.root.has_root_dir {
            path.push(Component::RootDir);
        }
        for segment in &self.segments {
            path.push(segment);
        }
        if path.as_os_str().is_empty() {
            path.push(Component::CurDir);
        }
        path
    }
}

/// Whether rendering follows symbolic links.
///
/// # Examples
///
/// ```
/// use rootdir::path::SymlinkPolicy;
///
/// assert_eq!(SymlinkPolicy::from_follow(true), SymlinkPolicy::Follow);
/// assert!(!SymlinkPolicy::NoFollow.follows());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymlinkPolicy {
    /// Resolve links to their real targets.
    #[default]
    Follow,
    /// Never traverse a link; fail if one is on the path.
    NoFollow,
}

impl SymlinkPolicy {
    /// Policy for a `followSymbolicLinks`-style flag.
    #[must_use]
    pub const fn from_follow(follow: bool) -> Self {
        if follow {
            Self::Follow
        } else {
            Self::NoFollow
        }
    }

    /// Whether links are followed.
    #[must_use]
    pub const fn follows(self) -> bool {
        matches!(self, Self::Follow)
    }
}
