//! Path canonicalization functions.
//!
//! Two flavours are provided:
//! - [`canonicalize`] follows every symbolic link to the real location
//! - [`canonicalize_no_follow`] normalizes lexically and then refuses to
//!   continue if any component of the result is a symbolic link
//!
//! Both report I/O failures as [`Error::PathResolution`] so callers can tell
//! a vanished or unreadable directory apart from bad input.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize;

/// Canonicalize a path by following symlinks.
///
/// The path must exist for canonicalization to succeed.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if the path does not exist, cannot be
/// accessed, or contains a broken or looping link.
///
/// # Examples
///
/// ```no_run
/// use rootdir::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    let real = fs::canonicalize(path).map_err(|source| Error::PathResolution {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(strip_verbatim(real))
}

/// Canonicalize a path without traversing symbolic links.
///
/// The path is first normalized lexically (made absolute, `.` and `..`
/// removed). Each component from the root downwards is then inspected with
/// `symlink_metadata`; the walk stops at the first link.
///
/// # Errors
///
/// - [`Error::SymlinkTraversalRefused`] if a component is a symbolic link
/// - [`Error::PathResolution`] if a component does not exist or cannot be
///   inspected
///
/// # Examples
///
/// ```no_run
/// use rootdir::path::canonicalize::canonicalize_no_follow;
/// use std::path::Path;
///
/// let path = canonicalize_no_follow(Path::new("/usr/./lib/..")).unwrap();
/// assert_eq!(path, Path::new("/usr"));
/// ```
pub fn canonicalize_no_follow(path: &Path) -> Result<PathBuf> {
    let normalized = normalize::normalize(path)?;

    let mut current = PathBuf::new();
    for component in normalized.components() {
        current.push(component);
        if !matches!(component, Component::Normal(_)) {
            continue;
        }

        let metadata = fs::symlink_metadata(&current).map_err(|source| Error::PathResolution {
            path: normalized.clone(),
            source,
        })?;
        if metadata.file_type().is_symlink() {
            return Err(Error::SymlinkTraversalRefused {
                path: normalized.clone(),
                link: current,
            });
        }
    }

    Ok(normalized)
}

/// Drop the `\\?\` prefix Windows adds to canonical disk paths.
#[cfg(windows)]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    use std::path::Prefix;

    let mut components = path.components();
    match components.next() {
        Some(Component::Prefix(prefix)) => match prefix.kind() {
            Prefix::VerbatimDisk(drive) => {
                let mut plain = PathBuf::from(format!("{}:", char::from(drive)));
                plain.push(components.as_path());
                if !plain.has_root() {
                    plain.push(Component::RootDir);
                }
                plain
            }
            _ => path,
        },
        _ => path,
    }
}

#[cfg(not(windows))]
fn strip_verbatim(path: PathBuf) -> PathBuf {
    path
}
