//! Path normalization functions.
//!
//! This module provides functionality to normalize paths by:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Resolving `.` and `..` components
//! - Normalizing path separators for the platform
//!
//! Normalization is purely lexical and never touches the filesystem. Tilde
//! expansion only applies to configured paths ([`normalize_from`]); paths
//! that name existing directories are taken literally, so a directory
//! called `~` stays a directory called `~`.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use rootdir::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    // Non-UTF-8 paths cannot start with a literal "~" we would expand.
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
///
/// A `..` directly below the root stays at the root, the way the platform
/// itself treats `/..`.
///
/// # Errors
///
/// Returns an error if a relative path climbs above its starting point.
///
/// # Examples
///
/// ```
/// use rootdir::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/a/c"));
///
/// let resolved = resolve_components(Path::new("/a/../../c")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/c"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
            }
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if !has_root {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components".to_string(),
                    });
                }
            }
        }
    }

    if result.as_os_str().is_empty() {
        result.push(Component::CurDir);
    }

    Ok(result)
}

/// Make a path absolute against the current directory.
///
/// Unlike [`normalize`], `.` and `..` are kept: the result still names the
/// same filesystem location when a `..` follows a symbolic link.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```
/// use rootdir::path::normalize::absolute;
/// use std::path::Path;
///
/// let path = absolute(Path::new("/repo/link/..")).unwrap();
/// assert_eq!(path, Path::new("/repo/link/.."));
/// ```
pub fn absolute(path: &Path) -> Result<PathBuf> {
    absolutize(path, None)
}

/// Normalize a path to absolute form.
///
/// Relative paths are made absolute against the current directory and
/// `.` and `..` are then resolved lexically. A leading `~` is an ordinary
/// segment here.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use rootdir::path::normalize::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("./modules/core")).unwrap();
/// assert!(normalized.is_absolute());
///
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    resolve_components(&absolute(path)?)
}

/// Normalize a path, resolving relative paths against `base`.
///
/// Used for paths read from configuration files, which are relative to the
/// file that names them rather than to the process working directory. A
/// leading `~` is expanded to the home directory.
///
/// # Errors
///
/// Returns an error if tilde expansion fails.
///
/// # Examples
///
/// ```
/// use rootdir::path::normalize::normalize_from;
/// use std::path::Path;
///
/// let normalized = normalize_from(Path::new("../lib"), Path::new("/repo/app")).unwrap();
/// assert_eq!(normalized, Path::new("/repo/lib"));
/// ```
pub fn normalize_from(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    let absolute = absolutize(&expanded, Some(base))?;
    resolve_components(&absolute)
}

fn absolutize(path: &Path, base: Option<&Path>) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    match base {
        Some(base) => Ok(base.join(path)),
        None => {
            let cwd = env::current_dir().map_err(|e| Error::InvalidPath {
                path: path.to_path_buf(),
                reason: format!("Cannot get current directory: {e}"),
            })?;
            Ok(cwd.join(path))
        }
    }
}
