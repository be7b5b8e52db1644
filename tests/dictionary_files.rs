//! End-to-end checks against the sample dictionaries in `data/`

use anagram_solver::commands::{SessionOptions, run_session};
use anagram_solver::config::Config;
use anagram_solver::core::Signature;
use anagram_solver::dictionary::{load_anagram_table, load_length_table};
use anagram_solver::errors::DictionaryError;
use anagram_solver::solver::{Solver, anagram_groups};
use std::fs;
use std::path::PathBuf;

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data").join(name)
}

fn config() -> Config {
    Config::new(data_path("anag_sorted.txt"), data_path("words_by_length.txt"))
}

fn solver() -> Solver {
    Solver::from_config(&config()).unwrap()
}

#[test]
fn sample_dictionaries_are_sorted() {
    let anagrams = load_anagram_table(data_path("anag_sorted.txt")).unwrap();
    let lengths = load_length_table(data_path("words_by_length.txt")).unwrap();

    assert!(!anagrams.is_empty());
    assert!(anagrams.is_ordered());
    assert!(lengths.is_ordered());
    assert_eq!(anagrams.len(), lengths.len());
}

#[test]
fn stored_signatures_agree_with_canonical_form() {
    let anagrams = load_anagram_table(data_path("anag_sorted.txt")).unwrap();
    for entry in anagrams.entries() {
        assert_eq!(entry.signature, Signature::of(&entry.word), "{}", entry.word);
    }
}

#[test]
fn stored_lengths_are_non_decreasing() {
    let lengths = load_length_table(data_path("words_by_length.txt")).unwrap();
    let recomputed: Vec<usize> = lengths.entries().iter().map(|e| e.word.len()).collect();
    assert!(recomputed.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn verified_load_succeeds() {
    let solver = Solver::from_config(&config().with_verify_order(true));
    assert!(solver.is_ok());
}

#[test]
fn anagram_lookups() {
    let solver = solver();

    assert_eq!(solver.anagrams_of("team"), ["mate", "meat", "tame"]);
    assert_eq!(
        solver.anagrams_of("listen"),
        ["enlist", "inlets", "silent", "tinsel"]
    );
    assert!(solver.anagrams_of("puzzle").is_empty());
    assert!(solver.anagrams_of("qqqq").is_empty());
}

#[test]
fn pattern_lookups() {
    let solver = solver();

    assert_eq!(solver.fill_pattern("..ts"), ["bats", "cats", "mats", "opts", "pots"]);
    assert_eq!(solver.fill_pattern("c.t"), ["cat", "cot", "cut"]);
    assert_eq!(solver.fill_pattern("rate"), ["rate"]);
    assert!(solver.fill_pattern("...............").is_empty());
}

#[test]
fn every_dictionary_word_finds_itself_by_pattern() {
    let solver = solver();
    for entry in solver.lengths().entries() {
        let found = solver.fill_pattern(&entry.word);
        assert!(found.contains(&entry.word.as_str()), "{}", entry.word);
    }
}

#[test]
fn anagram_results_never_contain_query() {
    let solver = solver();
    for entry in solver.anagrams().entries() {
        let found = solver.anagrams_of(&entry.word);
        assert!(!found.contains(&entry.word.as_str()), "{}", entry.word);
        for word in found {
            assert_eq!(Signature::of(word), entry.signature);
        }
    }
}

#[test]
fn groups_cover_known_clusters() {
    let solver = solver();
    let groups = anagram_groups(solver.anagrams(), 5);
    let firsts: Vec<&str> = groups.iter().map(|g| g.words[0]).collect();

    assert!(firsts.contains(&"least"));
    assert!(firsts.contains(&"pares"));
    assert!(firsts.contains(&"enlist"));
}

#[test]
fn prompt_session_over_sample_data() {
    let solver = solver();
    let input = "Team c.t B4D zzzz q listen\n";
    let mut out = Vec::new();

    let summary = run_session(&solver, input.as_bytes(), &mut out, SessionOptions::default())
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "team: mate meat tame\nc.t: cat cot cut\nInvalid word.\nNo matches found.\n"
    );
    assert_eq!(summary.queries, 3);
    assert_eq!(summary.rejected, 1);
}

#[test]
fn missing_dictionary_is_fatal() {
    let config = Config::new(data_path("no_such_file.txt"), data_path("words_by_length.txt"));
    assert!(matches!(
        Solver::from_config(&config),
        Err(DictionaryError::Io { .. })
    ));
}

#[test]
fn malformed_dictionary_is_fatal() {
    let path = std::env::temp_dir().join(format!("anagram_solver_bad_{}.txt", std::process::id()));
    fs::write(&path, "aemtmate\naemtmea\n").unwrap();

    let result = load_anagram_table(&path);
    fs::remove_file(&path).unwrap();

    assert!(matches!(
        result,
        Err(DictionaryError::MalformedLine { line: 2, length: 7, .. })
    ));
}

#[test]
fn unsorted_dictionary_fails_verification() {
    let path = std::env::temp_dir().join(format!(
        "anagram_solver_unsorted_{}.txt",
        std::process::id()
    ));
    fs::write(&path, "cats\nox\n").unwrap();

    let config = Config::new(data_path("anag_sorted.txt"), &path).with_verify_order(true);
    let result = Solver::from_config(&config);
    fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(DictionaryError::Unsorted { line: 2, .. })));
}
