//! Property-based tests for root selection.
//!
//! Unit-level properties live next to each module. These cover how the
//! ordering, the structural form and the selector agree with each other.

use super::order::compare_segment_sequences;
use super::relationship::PathRelationship;
use super::selector::select_min;
use super::types::CanonicalPath;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::path::PathBuf;

fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-c0-9_-]{1,4}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 0..6).prop_map(|parts| {
        let mut path = std::env::temp_dir();
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn canonical(path: &PathBuf) -> CanonicalPath {
    CanonicalPath::from_path(path).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // The selected root does not depend on input order
    #[test]
    fn selection_order_independent(
        paths in prop::collection::vec(absolute_path_strategy(), 1..8),
    ) {
        let forward: Vec<_> = paths.iter().map(canonical).collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = select_min(&forward).unwrap();
        let b = select_min(&backward).unwrap();
        prop_assert_eq!(a.try_cmp(b), Some(Ordering::Equal));
    }

    // Structural containment agrees with component-wise path containment
    #[test]
    fn contains_matches_relationship(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let structural = canonical(&p1).contains(&canonical(&p2));
        prop_assert_eq!(structural, PathRelationship::contains(&p1, &p2));
    }

    // An ancestor always sorts before its descendants
    #[test]
    fn ancestors_sort_first(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        if PathRelationship::between(&p1, &p2) == PathRelationship::Ancestor {
            prop_assert_eq!(canonical(&p1).try_cmp(&canonical(&p2)), Some(Ordering::Less));
        }
    }

    // Rebuilding a path from its segments is lossless
    #[test]
    fn to_path_buf_roundtrips(path in absolute_path_strategy()) {
        let structural = canonical(&path);
        prop_assert_eq!(canonical(&structural.to_path_buf()), structural);
    }

    // The segment order is total on comparable paths
    #[test]
    fn ordering_total(p1 in absolute_path_strategy(), p2 in absolute_path_strategy()) {
        let (c1, c2) = (canonical(&p1), canonical(&p2));
        let forward = compare_segment_sequences(c1.segments(), c2.segments());
        let backward = compare_segment_sequences(c2.segments(), c1.segments());
        prop_assert_eq!(forward, backward.reverse());
    }
}
