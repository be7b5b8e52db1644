//! Anagram lookup

use crate::core::Signature;
use crate::dictionary::AnagramTable;

/// Find every other word built from exactly the letters of `word`
///
/// The query word itself is left out (exact, case-sensitive comparison), so a
/// word with no anagrams yields an empty result even when it is in the
/// dictionary. Results come back in table order.
///
/// # Examples
/// ```
/// use anagram_solver::dictionary::AnagramTable;
/// use anagram_solver::solver::find_anagrams;
///
/// let table = AnagramTable::from_words(["mate", "meat", "team", "tame"]);
/// assert_eq!(find_anagrams("team", &table), ["mate", "meat", "tame"]);
/// ```
#[must_use]
pub fn find_anagrams<'a>(word: &str, table: &'a AnagramTable) -> Vec<&'a str> {
    let signature = Signature::of(word);

    table
        .run_of(&signature)
        .iter()
        .filter(|entry| entry.word != word)
        .map(|entry| entry.word.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> AnagramTable {
        AnagramTable::from_words([
            "ant", "tan", "nat", "mate", "meat", "team", "tame", "listen", "silent", "zebra",
        ])
    }

    #[test]
    fn excludes_query_word() {
        assert_eq!(find_anagrams("team", &table()), ["mate", "meat", "tame"]);
        assert_eq!(find_anagrams("mate", &table()), ["meat", "team", "tame"]);
    }

    #[test]
    fn query_need_not_be_in_dictionary() {
        assert_eq!(find_anagrams("etam", &table()), ["mate", "meat", "team", "tame"]);
    }

    #[test]
    fn all_results_share_signature() {
        let table = table();
        let signature = Signature::of("silent");
        for word in find_anagrams("silent", &table) {
            assert_eq!(Signature::of(word), signature);
        }
    }

    #[test]
    fn lone_word_has_no_anagrams() {
        assert!(find_anagrams("zebra", &table()).is_empty());
    }

    #[test]
    fn unknown_letters_have_no_anagrams() {
        assert!(find_anagrams("qqq", &table()).is_empty());
        assert!(find_anagrams("ants", &table()).is_empty());
    }

    #[test]
    fn empty_table_has_no_anagrams() {
        assert!(find_anagrams("team", &AnagramTable::default()).is_empty());
    }

    #[test]
    fn duplicate_dictionary_lines_of_query_are_all_excluded() {
        let table = AnagramTable::from_words(["team", "meat", "team"]);
        assert_eq!(find_anagrams("team", &table), ["meat"]);
    }

    #[test]
    fn repeated_queries_agree() {
        let table = table();
        assert_eq!(find_anagrams("nat", &table), find_anagrams("nat", &table));
    }
}
