//! Segment ordering for "closest to the filesystem root".
//!
//! Paths are ordered by their segment sequences: the first differing
//! segment decides, and a sequence that is a prefix of another sorts first.
//! Because an ancestor's segments are always a prefix of its descendants',
//! ancestors sort before descendants.
//!
//! Segments compare by their OS string contents. On Windows, where the
//! filesystem is case-insensitive, ASCII case is ignored.

use std::cmp::Ordering;
use std::ffi::{OsStr, OsString};

/// Compare two individual path segments.
///
/// # Examples
///
/// ```
/// use rootdir::path::order::compare_segments;
/// use std::cmp::Ordering;
/// use std::ffi::OsStr;
///
/// assert_eq!(compare_segments(OsStr::new("a"), OsStr::new("b")), Ordering::Less);
/// ```
#[must_use]
pub fn compare_segments(a: &OsStr, b: &OsStr) -> Ordering {
    #[cfg(windows)]
    {
        let a = a.to_string_lossy().to_ascii_lowercase();
        let b = b.to_string_lossy().to_ascii_lowercase();
        a.cmp(&b)
    }

    #[cfg(not(windows))]
    {
        a.cmp(b)
    }
}

/// Compare two segment sequences, ancestors first.
///
/// # Examples
///
/// ```
/// use rootdir::path::order::compare_segment_sequences;
/// use std::cmp::Ordering;
/// use std::ffi::OsString;
///
/// let a: Vec<OsString> = vec!["a".into()];
/// let ab: Vec<OsString> = vec!["a".into(), "b".into()];
/// assert_eq!(compare_segment_sequences(&a, &ab), Ordering::Less);
/// assert_eq!(compare_segment_sequences(&ab, &a), Ordering::Greater);
/// ```
#[must_use]
pub fn compare_segment_sequences(a: &[OsString], b: &[OsString]) -> Ordering {
    for (left, right) in a.iter().zip(b) {
        match compare_segments(left, right) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    a.len().cmp(&b.len())
}
