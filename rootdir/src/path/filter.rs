//! Candidate filtering.
//!
//! Turns the raw directory references reported for each project into the
//! directories that actually exist right now. Invalid entries are dropped
//! without error; an empty result is left for the selector to reject.

use std::path::Path;

use crate::path::types::ValidatedDirectory;

/// Keep the references that name existing directories, in input order.
///
/// An entry is kept iff it is present and currently reports itself as an
/// existing directory. This never fails.
///
/// # Examples
///
/// ```
/// use rootdir::path::filter::filter_candidates;
/// use std::path::PathBuf;
///
/// let dir = tempfile::tempdir().unwrap();
/// let candidates = vec![
///     None,
///     Some(dir.path().join("does-not-exist")),
///     Some(dir.path().to_path_buf()),
/// ];
///
/// let valid = filter_candidates(candidates);
/// assert_eq!(valid.len(), 1);
/// assert_eq!(valid[0].as_path(), dir.path());
/// ```
pub fn filter_candidates<I, P>(candidates: I) -> Vec<ValidatedDirectory>
where
    I: IntoIterator<Item = Option<P>>,
    P: AsRef<Path>,
{
    log::debug!("Validating root directory candidates");

    candidates
        .into_iter()
        .filter_map(|candidate| {
            let Some(candidate) = candidate else {
                log::trace!("Invalid: <none>");
                return None;
            };
            let path = candidate.as_ref();
            match ValidatedDirectory::validate(path) {
                Some(valid) => {
                    log::trace!("Valid: {}", path.display());
                    Some(valid)
                }
                None => {
                    log::trace!("Invalid: {}", path.display());
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_filter_drops_none_missing_and_files() {
        let dir = tempdir().unwrap();
        let module = dir.path().join("module");
        let file = dir.path().join("build.gradle");
        fs::create_dir(&module).unwrap();
        fs::write(&file, "").unwrap();

        let candidates: Vec<Option<PathBuf>> = vec![
            None,
            Some(dir.path().join("does-not-exist")),
            Some(file),
            Some(module.clone()),
        ];

        let valid = filter_candidates(candidates);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].as_path(), module.as_path());
    }

    #[test]
    fn test_filter_preserves_order() {
        let dir = tempdir().unwrap();
        let names = ["zeta", "alpha", "mid"];
        for name in names {
            fs::create_dir(dir.path().join(name)).unwrap();
        }

        let candidates = names
            .iter()
            .map(|name| Some(dir.path().join(name)))
            .collect::<Vec<_>>();

        let valid = filter_candidates(candidates);
        let kept: Vec<_> = valid
            .iter()
            .map(|v| v.as_path().file_name().unwrap().to_owned())
            .collect();
        assert_eq!(kept, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_filter_empty_and_all_invalid() {
        let empty: Vec<Option<PathBuf>> = Vec::new();
        assert!(filter_candidates(empty).is_empty());

        let all_invalid: Vec<Option<&str>> = vec![None, Some("/definitely/not/here")];
        assert!(filter_candidates(all_invalid).is_empty());
    }

    #[test]
    fn test_filter_keeps_duplicates() {
        let dir = tempdir().unwrap();
        let candidates = vec![Some(dir.path()), Some(dir.path())];
        assert_eq!(filter_candidates(candidates).len(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_filter_accepts_symlink_to_directory() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        let target = dir.path().join("target");
        let link = dir.path().join("link");
        fs::create_dir(&target).unwrap();
        symlink(&target, &link).unwrap();

        let valid = filter_candidates(vec![Some(&link)]);
        assert_eq!(valid.len(), 1);
        assert_eq!(valid[0].as_path(), link.as_path());
    }
}
