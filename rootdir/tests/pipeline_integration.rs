//! Integration tests for the root directory pipeline.
//!
//! These tests drive the filter, selector and renderer together through the
//! public API, on real temporary directory trees.

mod common;

use std::fs;
use std::path::{Path, PathBuf};

use common::{present, ProjectTree};
use rootdir::operations::{PlanAction, PlanExecutor};
use rootdir::output::{MemorySink, OutputFormat, WriterSink};
use rootdir::path::filter::filter_candidates;
use rootdir::path::render::render;
use rootdir::path::selector::{select_closest_to_root, select_min};
use rootdir::{
    CanonicalPath, Error, FailureKind, OutputSink, RootDirectoryOptions, RootDirectoryPlan,
    SymlinkPolicy,
};

fn run(options: RootDirectoryOptions) -> rootdir::Result<Option<String>> {
    RootDirectoryPlan::new(options).execute()
}

fn string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

// ============================================================================
// Candidate filtering
// ============================================================================

#[test]
fn test_filter_drops_absent_missing_and_files() {
    let tree = ProjectTree::with_repo();
    let file = tree.file("repo/pom.xml", "<project/>");
    let module = tree.path("repo/moduleA");

    let valid = filter_candidates(vec![
        None,
        Some(tree.path("does-not-exist")),
        Some(file),
        Some(module.clone()),
    ]);

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0].as_path(), module);
}

#[test]
fn test_filter_preserves_order() {
    let tree = ProjectTree::with_repo();
    let inputs = vec![
        Some(tree.path("repo/moduleB/sub")),
        None,
        Some(tree.path("repo")),
        Some(tree.path("repo/moduleA")),
    ];

    let valid: Vec<PathBuf> = filter_candidates(inputs)
        .into_iter()
        .map(|d| d.into_path_buf())
        .collect();

    assert_eq!(
        valid,
        vec![
            tree.path("repo/moduleB/sub"),
            tree.path("repo"),
            tree.path("repo/moduleA"),
        ]
    );
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_select_chain_in_every_order() {
    let tree = ProjectTree::new();
    let a = tree.dir("a");
    let ab = tree.dir("a/b");
    let abc = tree.dir("a/b/c");

    let orders = [
        [&a, &ab, &abc],
        [&a, &abc, &ab],
        [&ab, &a, &abc],
        [&ab, &abc, &a],
        [&abc, &a, &ab],
        [&abc, &ab, &a],
    ];

    for order in orders {
        let valid = filter_candidates(order.iter().map(|p| Some(p.as_path())));
        let selection = select_closest_to_root(&valid).unwrap();
        assert_eq!(selection.root().to_path_buf(), a, "order {order:?}");
        assert!(selection.is_common_ancestor());
    }
}

#[test]
fn test_select_single_candidate_unchanged() {
    let tree = ProjectTree::with_repo();
    let module = tree.path("repo/moduleA");

    let valid = filter_candidates([Some(&module)]);
    let selection = select_closest_to_root(&valid).unwrap();

    assert_eq!(selection.root().to_path_buf(), module);
    assert_eq!(selection.candidates().len(), 1);
}

#[test]
fn test_select_different_roots_indeterminable() {
    // A relative path has no filesystem root, unlike an absolute one
    let paths = vec![
        CanonicalPath::from_path(Path::new("/repo")).unwrap(),
        CanonicalPath::from_path(Path::new("repo/module")).unwrap(),
    ];

    let err = select_min(&paths).unwrap_err();
    assert_eq!(err.kind(), FailureKind::RootIndeterminable);
    assert!(err.to_string().contains("indeterminable"));
}

#[test]
fn test_select_siblings_picks_first_in_order() {
    let tree = ProjectTree::with_repo();
    let valid = filter_candidates([
        Some(tree.path("repo/moduleB")),
        Some(tree.path("repo/moduleA")),
    ]);

    let selection = select_closest_to_root(&valid).unwrap();
    assert_eq!(selection.root().to_path_buf(), tree.path("repo/moduleA"));
    assert!(!selection.is_common_ancestor());
    assert_eq!(selection.uncontained().count(), 1);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_render_policies_agree_without_links() {
    let tree = ProjectTree::with_repo();
    let root = tree.path("repo/moduleB/../moduleA");

    let followed = render(&root, SymlinkPolicy::Follow).unwrap();
    let unfollowed = render(&root, SymlinkPolicy::NoFollow).unwrap();

    assert_eq!(followed, unfollowed);
    assert_eq!(followed, string(&tree.path("repo/moduleA")));
}

#[test]
fn test_render_vanished_directory() {
    let tree = ProjectTree::with_repo();
    let module = tree.path("repo/moduleA");
    let valid = filter_candidates([Some(&module)]);
    let selection = select_closest_to_root(&valid).unwrap();

    // Deleted between validation and rendering
    fs::remove_dir(&module).unwrap();

    let err = render(selection.source(), SymlinkPolicy::Follow).unwrap_err();
    assert_eq!(err.kind(), FailureKind::PathResolution);
    assert!(err.is_not_found());
}

#[cfg(unix)]
#[test]
fn test_render_symlinked_root() {
    let tree = ProjectTree::with_repo();
    let link = tree.symlink("repo", "link");

    assert_eq!(
        render(&link, SymlinkPolicy::Follow).unwrap(),
        string(&tree.path("repo"))
    );

    let err = render(&link, SymlinkPolicy::NoFollow).unwrap_err();
    assert!(matches!(err, Error::SymlinkTraversalRefused { .. }));
    assert_eq!(err.kind(), FailureKind::PathResolution);
}

#[cfg(unix)]
#[test]
fn test_render_broken_link() {
    let tree = ProjectTree::new();
    let link = tree.symlink("missing-target", "dangling");

    let err = render(&link, SymlinkPolicy::Follow).unwrap_err();
    assert_eq!(err.kind(), FailureKind::PathResolution);
}

// ============================================================================
// End-to-end scenarios
// ============================================================================

#[test]
fn test_scenario_repo_with_modules() {
    let tree = ProjectTree::with_repo();
    let options = RootDirectoryOptions::new(present([
        tree.path("repo/moduleA"),
        tree.path("repo/moduleB/sub"),
        tree.path("repo"),
    ]))
    .with_follow_symbolic_links(true);

    assert_eq!(run(options).unwrap(), Some(string(&tree.path("repo"))));
}

#[cfg(unix)]
#[test]
fn test_scenario_repo_is_a_link() {
    let tree = ProjectTree::with_repo();
    let link = tree.symlink("repo", "checkout");

    let options = RootDirectoryOptions::new(present([
        link.join("moduleA"),
        link.join("moduleB/sub"),
        link.clone(),
    ]));

    assert_eq!(run(options).unwrap(), Some(string(&tree.path("repo"))));
}

#[cfg(unix)]
#[test]
fn test_scenario_parent_of_linked_module() {
    let tree = ProjectTree::with_repo();
    tree.dir("x/y");
    tree.symlink("x/y", "repo/link");
    let through_link = tree.path("repo/link/..");

    let followed = RootDirectoryOptions::new(present([
        tree.path("repo/moduleA"),
        through_link.clone(),
    ]));
    // The real parent of the link target, not the lexical parent
    assert_eq!(run(followed).unwrap(), Some(string(&tree.path("x"))));

    let unfollowed = RootDirectoryOptions::new(present([through_link]))
        .with_follow_symbolic_links(false);
    assert_eq!(run(unfollowed).unwrap(), Some(string(&tree.path("repo"))));
}

#[test]
fn test_scenario_null_and_missing_inputs() {
    let tree = ProjectTree::with_repo();
    let module = tree.path("repo/moduleA");
    let options = RootDirectoryOptions::new(vec![
        None,
        Some(tree.path("tmp/does-not-exist")),
        Some(module.clone()),
    ]);

    assert_eq!(run(options).unwrap(), Some(string(&module)));
}

#[test]
fn test_scenario_empty_input() {
    let err = run(RootDirectoryOptions::default()).unwrap_err();
    assert!(matches!(err, Error::EmptyCandidateSet));
}

#[test]
fn test_scenario_skip() {
    let tree = ProjectTree::with_repo();
    let options =
        RootDirectoryOptions::new(present([tree.path("repo")])).with_skip(true);

    let plan = RootDirectoryPlan::new(options).build_plan().unwrap();
    assert_eq!(plan.actions, vec![PlanAction::Skip]);

    let result = PlanExecutor::new().execute(&plan).unwrap();
    assert!(result.skipped);
    assert_eq!(result.root, None);
}

#[test]
fn test_dry_run_returns_unrendered_path() {
    let tree = ProjectTree::with_repo();
    let lexical = tree.path("repo/moduleA/..");
    let plan = RootDirectoryPlan::new(RootDirectoryOptions::new(vec![Some(lexical)]))
        .build_plan()
        .unwrap();

    let result = PlanExecutor::new().dry_run().execute(&plan).unwrap();
    assert!(result.dry_run);
    assert_eq!(result.root, Some(string(&tree.path("repo"))));
}

// ============================================================================
// Publishing
// ============================================================================

#[test]
fn test_publish_to_memory_sink() {
    let tree = ProjectTree::with_repo();
    let root = run(RootDirectoryOptions::new(present([tree.path("repo")])))
        .unwrap()
        .unwrap();

    let mut sink = MemorySink::new();
    sink.publish("maven.multiModuleProjectDirectory", &root)
        .unwrap();

    assert_eq!(
        sink.get("maven.multiModuleProjectDirectory"),
        Some(root.as_str())
    );
}

#[test]
fn test_publish_json_to_writer() {
    let tree = ProjectTree::with_repo();
    let root = run(RootDirectoryOptions::new(present([tree.path("repo")])))
        .unwrap()
        .unwrap();

    let mut sink = WriterSink::new(Vec::new(), OutputFormat::Json);
    sink.publish("rootdir", &root).unwrap();

    let written = String::from_utf8(sink.into_inner()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value["rootdir"], root.as_str());
}
