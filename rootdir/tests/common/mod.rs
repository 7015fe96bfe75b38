//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for directory layouts used when
//! testing the rootdir library.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary multi-project directory tree.
///
/// The base path is canonicalized so results can be compared with
/// rendered output on platforms where the temp directory is a link.
#[allow(dead_code)]
pub struct ProjectTree {
    _temp: TempDir,
    base: PathBuf,
}

#[allow(dead_code)]
impl ProjectTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let base = temp
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self { _temp: temp, base }
    }

    /// Creates the `repo/moduleA`, `repo/moduleB/sub` layout.
    pub fn with_repo() -> Self {
        let tree = Self::new();
        tree.dir("repo/moduleA");
        tree.dir("repo/moduleB/sub");
        tree
    }

    /// The canonical base directory.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// A path below the base, not necessarily existing.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.base.join(relative)
    }

    /// Creates a directory below the base and returns its path.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.path(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Creates a file below the base and returns its path.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Creates a symbolic link at `link` pointing to `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, link: &str) -> PathBuf {
        let link_path = self.path(link);
        std::os::unix::fs::symlink(self.path(target), &link_path)
            .expect("Failed to create symlink");
        link_path
    }
}

impl Default for ProjectTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Wraps paths as present directory references.
#[allow(dead_code)]
pub fn present<I, P>(paths: I) -> Vec<Option<PathBuf>>
where
    I: IntoIterator<Item = P>,
    P: Into<PathBuf>,
{
    paths.into_iter().map(|p| Some(p.into())).collect()
}
