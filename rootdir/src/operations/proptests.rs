//! Property-based tests for operations module.
//!
//! These tests focus on the plan-execute pattern and how invalid candidates
//! interact with selection.

use super::{PlanExecutor, RootDirectoryOptions, RootDirectoryPlan};
use proptest::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

// Relative directory layouts below a temporary base
fn layout_strategy() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-c]{1,2}", 1..4), 1..5)
}

fn materialize(base: &std::path::Path, layout: &[Vec<String>]) -> Vec<PathBuf> {
    layout
        .iter()
        .map(|parts| {
            let dir = parts.iter().fold(base.to_path_buf(), |acc, p| acc.join(p));
            fs::create_dir_all(&dir).unwrap();
            dir
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    // Absent and missing candidates never change the selected root
    #[test]
    fn invalid_candidates_do_not_affect_selection(
        layout in layout_strategy(),
        noise in prop::collection::vec(prop::option::of("[x-z]{3}"), 0..4),
    ) {
        let dir = tempdir().unwrap();
        let dirs = materialize(dir.path(), &layout);

        let clean = RootDirectoryOptions::new(dirs.iter().cloned().map(Some).collect());
        let mut noisy = clean.project_directories.clone();
        for entry in &noise {
            noisy.push(entry.as_ref().map(|name| dir.path().join("missing").join(name)));
        }
        noisy.rotate_left(noise.len().min(noisy.len()));

        let executor = PlanExecutor::new().dry_run();
        let expected = executor
            .execute(&RootDirectoryPlan::new(clean).build_plan().unwrap())
            .unwrap();
        let actual = executor
            .execute(&RootDirectoryPlan::new(RootDirectoryOptions::new(noisy)).build_plan().unwrap())
            .unwrap();

        prop_assert_eq!(expected.root, actual.root);
    }

    // Skipped plans never produce a root, whatever the candidates
    #[test]
    fn skip_never_produces_output(layout in layout_strategy()) {
        let dir = tempdir().unwrap();
        let dirs = materialize(dir.path(), &layout);

        let options = RootDirectoryOptions::new(dirs.into_iter().map(Some).collect()).with_skip(true);
        prop_assert_eq!(RootDirectoryPlan::new(options).execute().unwrap(), None);
    }
}
