//! Root directory discovery.
//!
//! This module implements the three stages that turn the directories of a
//! multi-project build into the single directory closest to the filesystem
//! root.
//!
//! # Stages
//!
//! ## Filtering
//!
//! [`filter::filter_candidates`] drops absent references and anything that
//! is not an existing directory. It never fails.
//!
//! ## Selection
//!
//! [`selector::select_closest_to_root`] orders the survivors so that an
//! ancestor precedes its descendants and siblings are ordered segment by
//! segment, then picks the minimum. An empty candidate set and paths from
//! different roots are errors.
//!
//! ## Rendering
//!
//! [`render::render`] resolves the selection against the filesystem and
//! produces a native path string. Whether symbolic links are followed is
//! controlled by [`SymlinkPolicy`].
//!
//! # Examples
//!
//! ```
//! use rootdir::path::{filter, render, selector, SymlinkPolicy};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let module = dir.path().join("module");
//! std::fs::create_dir(&module).unwrap();
//!
//! let valid = filter::filter_candidates(vec![Some(module), Some(dir.path().to_path_buf())]);
//! let selection = selector::select_closest_to_root(&valid).unwrap();
//! let rendered = render::render(selection.source(), SymlinkPolicy::Follow).unwrap();
//!
//! assert_eq!(rendered, std::fs::canonicalize(dir.path()).unwrap().to_str().unwrap());
//! ```
//!
//! # Path Relationships
//!
//! ```
//! use rootdir::path::PathRelationship;
//! use std::path::Path;
//!
//! let parent = Path::new("/repo");
//! let child = Path::new("/repo/module");
//!
//! let rel = PathRelationship::between(parent, child);
//! assert_eq!(rel, PathRelationship::Ancestor);
//! assert!(rel.is_hierarchical());
//! ```

pub mod canonicalize;
pub mod filter;
pub mod normalize;
pub mod order;
pub mod relationship;
pub mod render;
pub mod selector;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use selector::RootSelection;
pub use types::{CanonicalPath, DirectoryReference, PathRoot, SymlinkPolicy, ValidatedDirectory};
