//! Anagram group enumeration
//!
//! Diagnostic view of the anagram dictionary: every run of words sharing a
//! signature. Reached through an explicit command, never through the query
//! namespace.

use crate::core::Signature;
use crate::dictionary::AnagramTable;
use rustc_hash::FxHashMap;

/// Words sharing one signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramGroup<'a> {
    pub signature: &'a Signature,
    pub words: Vec<&'a str>,
}

impl AnagramGroup<'_> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Summary of how the dictionary clusters into anagram groups
#[derive(Debug, Default)]
pub struct GroupStatistics {
    pub total_entries: usize,
    pub distinct_signatures: usize,
    /// Group size -> number of groups of that size
    pub size_distribution: FxHashMap<usize, usize>,
    pub largest: Option<(String, usize)>,
}

/// Every signature run with at least `min_size` words, in table order
///
/// # Examples
/// ```
/// use anagram_solver::dictionary::AnagramTable;
/// use anagram_solver::solver::anagram_groups;
///
/// let table = AnagramTable::from_words(["ant", "tan", "zoo"]);
/// let groups = anagram_groups(&table, 2);
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].words, ["ant", "tan"]);
/// ```
#[must_use]
pub fn anagram_groups(table: &AnagramTable, min_size: usize) -> Vec<AnagramGroup<'_>> {
    table
        .entries()
        .chunk_by(|a, b| a.signature == b.signature)
        .filter(|run| run.len() >= min_size)
        .map(|run| AnagramGroup {
            signature: &run[0].signature,
            words: run.iter().map(|entry| entry.word.as_str()).collect(),
        })
        .collect()
}

/// Tally group sizes across the whole table
#[must_use]
pub fn group_statistics(table: &AnagramTable) -> GroupStatistics {
    let mut stats = GroupStatistics {
        total_entries: table.len(),
        ..GroupStatistics::default()
    };

    for run in table.entries().chunk_by(|a, b| a.signature == b.signature) {
        stats.distinct_signatures += 1;
        *stats.size_distribution.entry(run.len()).or_insert(0) += 1;

        if stats.largest.as_ref().is_none_or(|(_, size)| run.len() > *size) {
            stats.largest = Some((run[0].signature.to_string(), run.len()));
        }
    }

    stats
}
