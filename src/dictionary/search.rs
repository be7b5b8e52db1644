//! Lower-bound binary search over sorted tables
//!
//! Both dictionaries hold runs of entries with equal keys (anagram groups,
//! words of one length). Callers need the first entry of a run so they can
//! scan forward through all of it, which is why this is a lower bound and not
//! `slice::binary_search` (that returns an arbitrary member of the run).

use std::cmp::Ordering;
use tracing::trace;

/// Find the first index whose key equals the target
///
/// `compare` orders an item's key against the target: `Less` if the item sorts
/// before it, `Equal` on a match, `Greater` after it. `items` must already be
/// sorted by that key.
///
/// Returns `None` for an empty slice or when no item has the target key.
///
/// # Examples
/// ```
/// use anagram_solver::dictionary::first_match_index;
///
/// let lengths = [2, 3, 3, 3, 5];
/// assert_eq!(first_match_index(&lengths, |len| len.cmp(&3)), Some(1));
/// assert_eq!(first_match_index(&lengths, |len| len.cmp(&4)), None);
/// ```
pub fn first_match_index<T, F>(items: &[T], mut compare: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    // Half-open search window [lo, hi)
    let mut lo = 0;
    let mut hi = items.len();

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if compare(&items[mid]) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    trace!(lower_bound = lo, len = items.len(), "binary search settled");

    match items.get(lo) {
        Some(item) if compare(item) == Ordering::Equal => Some(lo),
        _ => None,
    }
}
