//! Root selection.
//!
//! Picks the candidate closest to the filesystem root: the minimum under
//! the ancestor-first segment order of [`CanonicalPath::try_cmp`]. Before two
//! paths are compared their roots are checked for compatibility; paths
//! from different roots (another drive, a relative path) make the root
//! indeterminable.
//!
//! This stage only manipulates paths in memory; it never re-reads the
//! filesystem. Directory names are taken literally: a relative directory
//! called `~` is made absolute against the current directory like any
//! other.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;
use crate::path::relationship::PathRelationship;
use crate::path::types::{CanonicalPath, ValidatedDirectory};

/// The outcome of root selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSelection {
    root: CanonicalPath,
    source: PathBuf,
    candidates: Vec<CanonicalPath>,
}

impl RootSelection {
    /// The selected path, in the lexical form used for ordering.
    #[must_use]
    pub fn root(&self) -> &CanonicalPath {
        &self.root
    }

    /// The selected directory as it was given, made absolute.
    ///
    /// `.` and `..` are still in place, so this is the path to render.
    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Every candidate considered, in input order.
    #[must_use]
    pub fn candidates(&self) -> &[CanonicalPath] {
        &self.candidates
    }

    /// Whether the selected path is the same as or an ancestor of every
    /// candidate.
    ///
    /// This is `false` for sibling modules such as `/repo/a` and `/repo/b`,
    /// where the minimum is merely the first sibling.
    #[must_use]
    pub fn is_common_ancestor(&self) -> bool {
        self.candidates.iter().all(|c| self.root.contains(c))
    }

    /// Candidates the selected path does not contain.
    pub fn uncontained(&self) -> impl Iterator<Item = &CanonicalPath> {
        self.candidates.iter().filter(|c| !self.root.contains(c))
    }

    /// Describe every candidate the selected path does not contain.
    ///
    /// Empty when the selection is a common ancestor.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let root = self.root.to_path_buf();
        self.uncontained()
            .map(|outside| {
                let outside = outside.to_path_buf();
                format!(
                    "{}; the selected root does not contain every project directory",
                    PathRelationship::between(&root, &outside).description(&root, &outside)
                )
            })
            .collect()
    }
}

/// Make validated directories absolute against the current directory.
///
/// `.` and `..` are kept. No tilde expansion happens here.
///
/// # Errors
///
/// Returns an error if a relative directory cannot be made absolute.
pub fn to_absolute_paths(directories: &[ValidatedDirectory]) -> Result<Vec<PathBuf>> {
    directories
        .iter()
        .map(|dir| normalize::absolute(dir.as_path()))
        .collect()
}

/// Select the minimum of `paths` under the ancestor-first order.
///
/// A single path is returned without comparison. Among equal paths the
/// first one wins.
///
/// # Errors
///
/// - [`Error::EmptyCandidateSet`] if `paths` is empty
/// - [`Error::RootIndeterminable`] if two paths do not share a root
///
/// # Examples
///
/// ```
/// use rootdir::path::selector::select_min;
/// use rootdir::path::CanonicalPath;
/// use std::path::Path;
///
/// let paths: Vec<_> = ["/a/b/c", "/a", "/a/b"]
///     .iter()
///     .map(|p| CanonicalPath::from_path(Path::new(p)).unwrap())
///     .collect();
///
/// let min = select_min(&paths).unwrap();
/// assert_eq!(min.to_path_buf(), Path::new("/a"));
/// ```
pub fn select_min(paths: &[CanonicalPath]) -> Result<&CanonicalPath> {
    min_position(paths).map(|index| &paths[index])
}

fn min_position(paths: &[CanonicalPath]) -> Result<usize> {
    if paths.is_empty() {
        return Err(Error::EmptyCandidateSet);
    }

    (1..paths.len()).try_fold(0, |min, index| {
        match paths[min].try_cmp(&paths[index]) {
            Some(Ordering::Greater) => Ok(index),
            Some(_) => Ok(min),
            None => Err(Error::RootIndeterminable {
                first: paths[min].to_path_buf(),
                second: paths[index].to_path_buf(),
            }),
        }
    })
}

/// Select the validated directory closest to the filesystem root.
///
/// # Errors
///
/// - [`Error::EmptyCandidateSet`] if `directories` is empty
/// - [`Error::RootIndeterminable`] if the directories do not share a root
pub fn select_closest_to_root(directories: &[ValidatedDirectory]) -> Result<RootSelection> {
    if directories.is_empty() {
        return Err(Error::EmptyCandidateSet);
    }

    let mut sources = to_absolute_paths(directories)?;
    let candidates = sources
        .iter()
        .map(|path| CanonicalPath::from_path(path))
        .collect::<Result<Vec<_>>>()?;
    let index = min_position(&candidates)?;
    let root = candidates[index].clone();
    let source = sources.swap_remove(index);
    log::debug!("Selected root directory {}", source.display());

    let selection = RootSelection {
        root,
        source,
        candidates,
    };
    for warning in selection.warnings() {
        log::warn!("{warning}");
    }

    Ok(selection)
}
