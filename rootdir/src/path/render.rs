//! Path rendering.
//!
//! Turns the selected root into the string published to the build. The
//! filesystem is consulted again here, so a directory that vanished after
//! filtering surfaces as [`Error::PathResolution`].
//!
//! Rendering starts from the selected directory as it was given (made
//! absolute, `..` still in place), not from its lexically collapsed form:
//! `repo/link/..` really is the parent of the link target.

use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::canonicalize::{canonicalize, canonicalize_no_follow};
use crate::path::types::SymlinkPolicy;

/// Resolve `path` to its canonical absolute form under `policy`.
///
/// # Errors
///
/// - [`Error::PathResolution`] if the path cannot be resolved
/// - [`Error::SymlinkTraversalRefused`] if links are not followed and the
///   path passes through one
pub fn resolve(path: &Path, policy: SymlinkPolicy) -> Result<PathBuf> {
    let resolved = match policy {
        SymlinkPolicy::Follow => canonicalize(path)?,
        SymlinkPolicy::NoFollow => canonicalize_no_follow(path)?,
    };
    log::trace!(
        "Resolved {} to {} ({:?})",
        path.display(),
        resolved.display(),
        policy
    );
    Ok(resolved)
}

/// Render the selected root as a platform-native string.
///
/// # Errors
///
/// Returns the errors of [`resolve`], and [`Error::PathResolution`] with an
/// [`io::ErrorKind::InvalidData`] source if the resolved path is not valid
/// UTF-8.
///
/// # Examples
///
/// ```
/// use rootdir::path::render::render;
/// use rootdir::path::SymlinkPolicy;
///
/// let dir = tempfile::tempdir().unwrap();
///
/// let rendered = render(dir.path(), SymlinkPolicy::Follow).unwrap();
/// assert!(std::path::Path::new(&rendered).is_absolute());
/// ```
pub fn render(root: &Path, policy: SymlinkPolicy) -> Result<String> {
    let resolved = resolve(root, policy)?;
    into_string(resolved)
}

fn into_string(path: PathBuf) -> Result<String> {
    path.into_os_string()
        .into_string()
        .map_err(|raw| Error::PathResolution {
            path: PathBuf::from(raw),
            source: io::Error::new(io::ErrorKind::InvalidData, "path contains invalid UTF-8"),
        })
}
