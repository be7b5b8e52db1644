//! Anagram signatures
//!
//! A signature is the letters of a word sorted ascending. Two words are
//! anagrams of each other exactly when their signatures are equal.

use std::fmt;

/// The sorted-letter form of a word
///
/// Ordering is plain lexicographic string ordering, which is the order the
/// anagram dictionary is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(String);

impl Signature {
    /// Compute the signature of `word`
    ///
    /// # Examples
    /// ```
    /// use anagram_solver::core::Signature;
    ///
    /// let sig = Signature::of("team");
    /// assert_eq!(sig.as_str(), "aemt");
    /// assert_eq!(sig, Signature::of("mate"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        Self(canonicalize(word))
    }

    /// Wrap a string that is already in sorted form
    ///
    /// Used for signatures read from the anagram dictionary, which are trusted.
    #[must_use]
    pub fn from_sorted(sorted: impl Into<String>) -> Self {
        Self(sorted.into())
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the signature
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort the characters of `word` ascending by code point
///
/// Insertion sort: dictionary words are short, so the quadratic worst case
/// never matters and the sort needs no allocation beyond the output.
///
/// # Examples
/// ```
/// use anagram_solver::core::canonicalize;
///
/// assert_eq!(canonicalize("listen"), "eilnst");
/// assert_eq!(canonicalize("silent"), "eilnst");
/// ```
#[must_use]
pub fn canonicalize(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();

    for i in 1..letters.len() {
        let current = letters[i];
        let mut j = i;
        while j > 0 && letters[j - 1] > current {
            letters[j] = letters[j - 1];
            j -= 1;
        }
        letters[j] = current;
    }

    letters.into_iter().collect()
}
