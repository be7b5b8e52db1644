//! Missing-letter lookup

use crate::core::WildcardPattern;
use crate::dictionary::LengthTable;

/// Find every word that fits `pattern`, where `.` is any single letter
///
/// Only words of the pattern's length are examined. A pattern with no
/// wildcards matches itself if it is in the dictionary. Results come back in
/// table order.
///
/// # Examples
/// ```
/// use anagram_solver::dictionary::LengthTable;
/// use anagram_solver::solver::find_missing_letters;
///
/// let table = LengthTable::from_words(["cats", "bats", "mats", "rate"]);
/// assert_eq!(find_missing_letters("..ts", &table), ["cats", "bats", "mats"]);
/// assert_eq!(find_missing_letters("rate", &table), ["rate"]);
/// ```
#[must_use]
pub fn find_missing_letters<'a>(pattern: &str, table: &'a LengthTable) -> Vec<&'a str> {
    let pattern = WildcardPattern::new(pattern);

    table
        .run_of(pattern.len())
        .iter()
        .filter(|entry| pattern.matches(&entry.word))
        .map(|entry| entry.word.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LengthTable {
        LengthTable::from_words([
            "a", "ox", "cat", "cot", "cut", "dog", "cats", "bats", "mats", "rate", "crate",
        ])
    }

    #[test]
    fn wildcards_fill_any_letter() {
        assert_eq!(find_missing_letters("c.t", &table()), ["cat", "cot", "cut"]);
        assert_eq!(find_missing_letters("..ts", &table()), ["cats", "bats", "mats"]);
    }

    #[test]
    fn all_wildcards_return_whole_length() {
        assert_eq!(find_missing_letters("..", &table()), ["ox"]);
        assert_eq!(find_missing_letters(".", &table()), ["a"]);
    }

    #[test]
    fn plain_word_matches_itself() {
        assert_eq!(find_missing_letters("rate", &table()), ["rate"]);
    }

    #[test]
    fn no_words_of_that_length() {
        assert!(find_missing_letters("......", &table()).is_empty());
    }

    #[test]
    fn no_fit_among_right_length() {
        assert!(find_missing_letters("z..", &table()).is_empty());
    }

    #[test]
    fn longest_length_run_ends_at_table_end() {
        assert_eq!(find_missing_letters("c...e", &table()), ["crate"]);
    }

    #[test]
    fn empty_table() {
        assert!(find_missing_letters("c.t", &LengthTable::default()).is_empty());
    }
}
