//! Solver configuration
//!
//! Where the dictionaries live and how user input is bounded. The binary fills
//! this in from command-line arguments; everything has a default that matches
//! the classic two-file layout in the working directory.

use std::path::PathBuf;

/// Default anagram dictionary (`<signature><word>` per line)
pub const DEFAULT_ANAGRAM_FILE: &str = "anag_sorted.txt";

/// Default length-sorted dictionary (one word per line)
pub const DEFAULT_LENGTH_FILE: &str = "words_by_length.txt";

/// Longest query token accepted by default
pub const DEFAULT_MAX_WORD_LEN: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub anagram_path: PathBuf,
    pub length_path: PathBuf,
    /// Tokens longer than this are rejected before classification
    pub max_word_len: usize,
    /// Check that both files really are sorted after loading
    pub verify_order: bool,
}

impl Config {
    #[must_use]
    pub fn new(anagram_path: impl Into<PathBuf>, length_path: impl Into<PathBuf>) -> Self {
        Self {
            anagram_path: anagram_path.into(),
            length_path: length_path.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    #[must_use]
    pub const fn with_verify_order(mut self, verify_order: bool) -> Self {
        self.verify_order = verify_order;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anagram_path: PathBuf::from(DEFAULT_ANAGRAM_FILE),
            length_path: PathBuf::from(DEFAULT_LENGTH_FILE),
            max_word_len: DEFAULT_MAX_WORD_LEN,
            verify_order: false,
        }
    }
}
