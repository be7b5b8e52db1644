//! Query token classification
//!
//! Decides whether a raw token is an anagram query, a missing-letter query, or
//! something that must not reach either table.

use super::pattern::WILDCARD;

/// Which lookup a query uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// All letters known: find anagrams
    Anagram,
    /// Some letters replaced by `.`: find words fitting the gaps
    MissingLetters,
}

impl QueryKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Anagram => "anagram",
            Self::MissingLetters => "missing letters",
        }
    }
}

/// Result of classifying a raw token
///
/// Valid variants carry the lowercased token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Invalid,
    Exact(String),
    Wildcard(String),
}

impl Classification {
    /// The lookup this token dispatches to, if any
    #[must_use]
    pub const fn kind(&self) -> Option<QueryKind> {
        match self {
            Self::Invalid => None,
            Self::Exact(_) => Some(QueryKind::Anagram),
            Self::Wildcard(_) => Some(QueryKind::MissingLetters),
        }
    }

    /// The normalized token, if valid
    #[must_use]
    pub fn normalized(&self) -> Option<&str> {
        match self {
            Self::Invalid => None,
            Self::Exact(word) | Self::Wildcard(word) => Some(word),
        }
    }
}

/// Lowercase `raw` and classify it
///
/// Anything outside `a-z` and `.` after lowercasing is invalid, as is an
/// empty token.
///
/// # Examples
/// ```
/// use anagram_solver::core::{classify, Classification};
///
/// assert_eq!(classify("Team"), Classification::Exact("team".to_string()));
/// assert_eq!(classify("C.T"), Classification::Wildcard("c.t".to_string()));
/// assert_eq!(classify("r2d2"), Classification::Invalid);
/// ```
#[must_use]
pub fn classify(raw: &str) -> Classification {
    if raw.is_empty() {
        return Classification::Invalid;
    }

    let mut normalized = String::with_capacity(raw.len());
    let mut has_wildcard = false;

    for c in raw.chars() {
        let c = c.to_ascii_lowercase();
        if c == WILDCARD {
            has_wildcard = true;
        } else if !c.is_ascii_lowercase() {
            return Classification::Invalid;
        }
        normalized.push(c);
    }

    if has_wildcard {
        Classification::Wildcard(normalized)
    } else {
        Classification::Exact(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_letters_are_exact() {
        assert_eq!(classify("listen"), Classification::Exact("listen".to_string()));
    }

    #[test]
    fn uppercase_is_folded() {
        assert_eq!(classify("LiStEn"), Classification::Exact("listen".to_string()));
        assert_eq!(classify("..TS"), Classification::Wildcard("..ts".to_string()));
    }

    #[test]
    fn any_dot_makes_wildcard() {
        assert_eq!(classify("."), Classification::Wildcard(".".to_string()));
        assert_eq!(classify("ca."), Classification::Wildcard("ca.".to_string()));
        assert_eq!(classify(".at"), Classification::Wildcard(".at".to_string()));
    }

    #[test]
    fn digits_and_symbols_are_invalid_regardless_of_case() {
        for token in ["abc1", "ABC1", "a-b", "A_B", "ca t", "wörd", "é", "?", "x!", "Q9."] {
            assert_eq!(classify(token), Classification::Invalid, "{token}");
        }
    }

    #[test]
    fn empty_is_invalid() {
        assert_eq!(classify(""), Classification::Invalid);
    }

    #[test]
    fn kind_and_normalized_accessors() {
        let exact = classify("Meat");
        assert_eq!(exact.kind(), Some(QueryKind::Anagram));
        assert_eq!(exact.normalized(), Some("meat"));

        let wild = classify("m.at");
        assert_eq!(wild.kind(), Some(QueryKind::MissingLetters));
        assert_eq!(wild.normalized(), Some("m.at"));

        assert_eq!(Classification::Invalid.kind(), None);
        assert_eq!(Classification::Invalid.normalized(), None);
    }

    #[test]
    fn single_t_is_an_ordinary_query() {
        assert_eq!(classify("t"), Classification::Exact("t".to_string()));
    }
}
