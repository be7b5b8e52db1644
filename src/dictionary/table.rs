//! Sorted in-memory dictionary tables
//!
//! Both tables are built once and never mutated. Their sort order is a
//! precondition of the input files; [`AnagramTable::first_unordered`] and
//! [`LengthTable::first_unordered`] exist to check it when asked.

use super::search::first_match_index;
use crate::core::Signature;

/// One line of the anagram dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramEntry {
    pub word: String,
    pub signature: Signature,
}

impl AnagramEntry {
    /// Build an entry, computing the signature from the word
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let signature = Signature::of(&word);
        Self { word, signature }
    }
}

/// One line of the length dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthEntry {
    pub word: String,
    pub length: usize,
}

impl LengthEntry {
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        let word = word.into();
        let length = word.chars().count();
        Self { word, length }
    }
}

/// Words ordered by signature, ties in file order
#[derive(Debug, Clone, Default)]
pub struct AnagramTable {
    entries: Vec<AnagramEntry>,
}

impl AnagramTable {
    /// Wrap entries that are already sorted by signature
    #[must_use]
    pub const fn from_sorted(entries: Vec<AnagramEntry>) -> Self {
        Self { entries }
    }

    /// Build a table from bare words, sorting them by signature
    ///
    /// The sort is stable, so words sharing a signature keep their input
    /// order. Handy for tests and for small in-memory word lists.
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<AnagramEntry> = words.into_iter().map(AnagramEntry::new).collect();
        entries.sort_by(|a, b| a.signature.cmp(&b.signature));
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[AnagramEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the first entry with this signature
    #[must_use]
    pub fn first_index_of(&self, signature: &Signature) -> Option<usize> {
        first_match_index(&self.entries, |entry| entry.signature.cmp(signature))
    }

    /// All entries sharing `signature`, in table order
    #[must_use]
    pub fn run_of(&self, signature: &Signature) -> &[AnagramEntry] {
        let Some(start) = self.first_index_of(signature) else {
            return &[];
        };
        let run = self.entries[start..]
            .iter()
            .take_while(|entry| entry.signature == *signature)
            .count();
        &self.entries[start..start + run]
    }

    /// Index of the first entry that sorts before its predecessor
    #[must_use]
    pub fn first_unordered(&self) -> Option<usize> {
        self.entries
            .windows(2)
            .position(|pair| pair[0].signature > pair[1].signature)
            .map(|i| i + 1)
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.first_unordered().is_none()
    }
}

/// Words ordered by length, ties in file order
#[derive(Debug, Clone, Default)]
pub struct LengthTable {
    entries: Vec<LengthEntry>,
}

impl LengthTable {
    #[must_use]
    pub const fn from_sorted(entries: Vec<LengthEntry>) -> Self {
        Self { entries }
    }

    /// Build a table from bare words, stably sorting them by length
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<LengthEntry> = words.into_iter().map(LengthEntry::new).collect();
        entries.sort_by_key(|entry| entry.length);
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[LengthEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn first_index_of(&self, length: usize) -> Option<usize> {
        first_match_index(&self.entries, |entry| entry.length.cmp(&length))
    }

    /// All words of exactly `length` characters, in table order
    #[must_use]
    pub fn run_of(&self, length: usize) -> &[LengthEntry] {
        let Some(start) = self.first_index_of(length) else {
            return &[];
        };
        let run = self.entries[start..]
            .iter()
            .take_while(|entry| entry.length == length)
            .count();
        &self.entries[start..start + run]
    }

    #[must_use]
    pub fn first_unordered(&self) -> Option<usize> {
        self.entries
            .windows(2)
            .position(|pair| pair[0].length > pair[1].length)
            .map(|i| i + 1)
    }

    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.first_unordered().is_none()
    }

    /// Length of the longest word in the table
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.entries.last().map_or(0, |entry| entry.length)
    }
}
