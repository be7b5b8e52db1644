//! Fixed-length wildcard patterns
//!
//! A pattern is a string over `a-z` and `.`, where `.` stands for exactly one
//! unknown letter. It only ever matches words of the same length.

use std::fmt;

/// The single-character wildcard
pub const WILDCARD: char = '.';

/// A missing-letter pattern such as `c.t` or `..ts`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WildcardPattern {
    text: String,
    length: usize,
}

impl WildcardPattern {
    /// Create a pattern from already-normalized text
    ///
    /// The text is not validated here; [`crate::core::classify`] is the
    /// gatekeeper for user input.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count();
        Self { text, length }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of positions in the pattern
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Number of wildcard positions
    #[must_use]
    pub fn unknowns(&self) -> usize {
        self.text.chars().filter(|&c| c == WILDCARD).count()
    }

    /// Check `candidate` against the pattern position by position
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::WildcardPattern;
    ///
    /// let pattern = WildcardPattern::new("..ts");
    /// assert!(pattern.matches("cats"));
    /// assert!(!pattern.matches("rate"));
    /// assert!(!pattern.matches("cat"));
    /// ```
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let mut candidate_chars = candidate.chars();

        for p in self.text.chars() {
            match candidate_chars.next() {
                Some(c) if p == WILDCARD || p == c => {}
                _ => return false,
            }
        }

        candidate_chars.next().is_none()
    }
}

impl fmt::Display for WildcardPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
