//! Anagram group diagnostic command
//!
//! Lists anagram clusters in the dictionary together with summary statistics.

use crate::solver::{AnagramGroup, GroupStatistics, Solver, anagram_groups, group_statistics};

/// Result of the groups diagnostic
pub struct GroupsReport<'a> {
    /// Groups to print, possibly truncated by `limit`
    pub groups: Vec<AnagramGroup<'a>>,
    /// Groups meeting `min_size` before truncation
    pub total_groups: usize,
    pub min_size: usize,
    pub statistics: GroupStatistics,
}

/// Collect anagram groups of at least `min_size` words
///
/// `min_size` below 1 is treated as 1.
#[must_use]
pub fn run_groups(solver: &Solver, min_size: usize, limit: Option<usize>) -> GroupsReport<'_> {
    let min_size = min_size.max(1);
    let mut groups = anagram_groups(solver.anagrams(), min_size);
    let total_groups = groups.len();

    if let Some(limit) = limit {
        groups.truncate(limit);
    }

    GroupsReport {
        groups,
        total_groups,
        min_size,
        statistics: group_statistics(solver.anagrams()),
    }
}
