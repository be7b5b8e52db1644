//! Main solver interface

use super::anagram::find_anagrams;
use super::missing::find_missing_letters;
use crate::config::Config;
use crate::core::{Classification, QueryKind, classify};
use crate::dictionary::{
    AnagramTable, LengthTable, check_anagram_order, check_length_order, load_anagram_table,
    load_length_table,
};
use crate::errors::{DictionaryError, QueryError};
use tracing::{debug, info};

/// Answer to one lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// The normalized (lowercased) query token
    pub query: String,
    pub kind: QueryKind,
    pub matches: Vec<String>,
}

impl QueryOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}

/// Owns both dictionaries and answers queries against them
///
/// Tables are immutable after construction, so a `Solver` can be shared by
/// reference across threads without locking.
pub struct Solver {
    anagrams: AnagramTable,
    lengths: LengthTable,
    max_word_len: usize,
}

impl Solver {
    /// Create a solver over already-loaded tables
    #[must_use]
    pub const fn new(anagrams: AnagramTable, lengths: LengthTable) -> Self {
        Self {
            anagrams,
            lengths,
            max_word_len: crate::config::DEFAULT_MAX_WORD_LEN,
        }
    }

    #[must_use]
    pub const fn with_max_word_len(mut self, max_word_len: usize) -> Self {
        self.max_word_len = max_word_len;
        self
    }

    /// Load both dictionaries named by `config`
    ///
    /// # Errors
    ///
    /// Returns the first [`DictionaryError`] hit while loading either file, or
    /// while checking sort order when `config.verify_order` is set.
    pub fn from_config(config: &Config) -> Result<Self, DictionaryError> {
        let anagrams = load_anagram_table(&config.anagram_path)?;
        let lengths = load_length_table(&config.length_path)?;

        if config.verify_order {
            check_anagram_order(&anagrams, &config.anagram_path.display().to_string())?;
            check_length_order(&lengths, &config.length_path.display().to_string())?;
            info!("dictionary sort order verified");
        }

        Ok(Self::new(anagrams, lengths).with_max_word_len(config.max_word_len))
    }

    #[must_use]
    pub const fn anagrams(&self) -> &AnagramTable {
        &self.anagrams
    }

    #[must_use]
    pub const fn lengths(&self) -> &LengthTable {
        &self.lengths
    }

    #[must_use]
    pub const fn max_word_len(&self) -> usize {
        self.max_word_len
    }

    /// Words that are anagrams of `word`, excluding `word` itself
    #[must_use]
    pub fn anagrams_of(&self, word: &str) -> Vec<&str> {
        find_anagrams(word, &self.anagrams)
    }

    /// Words fitting a `.`-wildcard pattern
    #[must_use]
    pub fn fill_pattern(&self, pattern: &str) -> Vec<&str> {
        find_missing_letters(pattern, &self.lengths)
    }

    /// Classify a raw token and run the matching lookup
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::TooLong`] for tokens over the configured limit and
    /// [`QueryError::InvalidInput`] for anything outside `a-z` and `.`. Neither
    /// touches the tables.
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::dictionary::{AnagramTable, LengthTable};
    /// use anagram_solver::solver::Solver;
    ///
    /// let words = ["mate", "meat", "team", "cats", "bats"];
    /// let solver = Solver::new(AnagramTable::from_words(words), LengthTable::from_words(words));
    ///
    /// let outcome = solver.lookup("TEAM").unwrap();
    /// assert_eq!(outcome.query, "team");
    /// assert_eq!(outcome.matches, ["mate", "meat"]);
    ///
    /// assert!(solver.lookup("te4m").is_err());
    /// ```
    pub fn lookup(&self, token: &str) -> Result<QueryOutcome, QueryError> {
        let length = token.chars().count();
        if length > self.max_word_len {
            return Err(QueryError::TooLong {
                length,
                max: self.max_word_len,
            });
        }

        let classification = classify(token);
        debug!(token, ?classification, "classified query");

        let (query, kind, matches) = match classification {
            Classification::Invalid => {
                return Err(QueryError::InvalidInput {
                    token: token.to_string(),
                });
            }
            Classification::Exact(word) => {
                let matches = to_owned(self.anagrams_of(&word));
                (word, QueryKind::Anagram, matches)
            }
            Classification::Wildcard(pattern) => {
                let matches = to_owned(self.fill_pattern(&pattern));
                (pattern, QueryKind::MissingLetters, matches)
            }
        };

        debug!(query = %query, kind = kind.label(), matches = matches.len(), "query resolved");
        Ok(QueryOutcome {
            query,
            kind,
            matches,
        })
    }
}

fn to_owned(words: Vec<&str>) -> Vec<String> {
    words.into_iter().map(str::to_string).collect()
}
