//! Dictionary file loading
//!
//! Two line-oriented formats, both trusted to be pre-sorted:
//! - anagram file: `<signature><word>` per line, two halves of equal length,
//!   sorted by signature;
//! - length file: one bare word per line, sorted by word length.
//!
//! Loading never re-sorts. Ordering can be checked separately with
//! [`check_anagram_order`] and [`check_length_order`].

use super::table::{AnagramEntry, AnagramTable, LengthEntry, LengthTable};
use crate::core::Signature;
use crate::errors::DictionaryError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Load the signature-sorted anagram dictionary from a file
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be opened or read, and
/// [`DictionaryError::MalformedLine`] for an empty or odd-length line.
///
/// # Examples
/// ```no_run
/// use anagram_solver::dictionary::load_anagram_table;
///
/// let table = load_anagram_table("anag_sorted.txt").unwrap();
/// println!("Loaded {} entries", table.len());
/// ```
pub fn load_anagram_table<P: AsRef<Path>>(path: P) -> Result<AnagramTable, DictionaryError> {
    let path = path.as_ref();
    let start = Instant::now();
    let reader = open(path)?;
    let table = read_anagram_table(reader, &path.display().to_string())?;

    info!(
        path = %path.display(),
        entries = table.len(),
        elapsed = ?start.elapsed(),
        "loaded anagram dictionary"
    );
    Ok(table)
}

/// Load the length-sorted dictionary from a file
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if the file cannot be opened or read.
pub fn load_length_table<P: AsRef<Path>>(path: P) -> Result<LengthTable, DictionaryError> {
    let path = path.as_ref();
    let start = Instant::now();
    let reader = open(path)?;
    let table = read_length_table(reader, &path.display().to_string())?;

    info!(
        path = %path.display(),
        entries = table.len(),
        longest = table.max_length(),
        elapsed = ?start.elapsed(),
        "loaded length dictionary"
    );
    Ok(table)
}

/// Parse an anagram dictionary from any buffered reader
///
/// `source_name` is only used in error messages.
///
/// # Errors
///
/// See [`load_anagram_table`].
pub fn read_anagram_table<R: BufRead>(
    reader: R,
    source_name: &str,
) -> Result<AnagramTable, DictionaryError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| DictionaryError::Io {
            path: source_name.into(),
            source,
        })?;
        let line = strip_cr(&line);

        let (signature, word) = split_entry(line).ok_or_else(|| DictionaryError::MalformedLine {
            source_name: source_name.to_string(),
            line: index + 1,
            length: line.len(),
        })?;

        entries.push(AnagramEntry {
            word: word.to_string(),
            signature: Signature::from_sorted(signature),
        });
    }

    debug!(source = source_name, entries = entries.len(), "parsed anagram entries");
    Ok(AnagramTable::from_sorted(entries))
}

/// Parse a length dictionary from any buffered reader
///
/// Blank lines carry no word and are skipped.
///
/// # Errors
///
/// Returns [`DictionaryError::Io`] if reading fails.
pub fn read_length_table<R: BufRead>(
    reader: R,
    source_name: &str,
) -> Result<LengthTable, DictionaryError> {
    let mut entries = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| DictionaryError::Io {
            path: source_name.into(),
            source,
        })?;
        let word = strip_cr(&line);

        if !word.is_empty() {
            entries.push(LengthEntry::new(word));
        }
    }

    debug!(source = source_name, entries = entries.len(), "parsed length entries");
    Ok(LengthTable::from_sorted(entries))
}

/// Fail if the anagram table is not sorted by signature
///
/// # Errors
///
/// Returns [`DictionaryError::Unsorted`] naming the first out-of-order line.
pub fn check_anagram_order(table: &AnagramTable, source_name: &str) -> Result<(), DictionaryError> {
    match table.first_unordered() {
        Some(index) => Err(DictionaryError::Unsorted {
            source_name: source_name.to_string(),
            line: index + 1,
        }),
        None => Ok(()),
    }
}

/// Fail if the length table is not sorted by word length
///
/// # Errors
///
/// Returns [`DictionaryError::Unsorted`] naming the first out-of-order line.
pub fn check_length_order(table: &LengthTable, source_name: &str) -> Result<(), DictionaryError> {
    match table.first_unordered() {
        Some(index) => Err(DictionaryError::Unsorted {
            source_name: source_name.to_string(),
            line: index + 1,
        }),
        None => Ok(()),
    }
}

fn open(path: &Path) -> Result<BufReader<File>, DictionaryError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })
}

fn strip_cr(line: &str) -> &str {
    line.strip_suffix('\r').unwrap_or(line)
}

/// Split `<signature><word>` at its midpoint
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let mid = line.len() / 2;
    if line.is_empty() || line.len() % 2 != 0 || !line.is_char_boundary(mid) {
        return None;
    }
    Some(line.split_at(mid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn anagrams(text: &str) -> Result<AnagramTable, DictionaryError> {
        read_anagram_table(Cursor::new(text), "test")
    }

    fn lengths(text: &str) -> Result<LengthTable, DictionaryError> {
        read_length_table(Cursor::new(text), "test")
    }

    #[test]
    fn anagram_lines_split_at_midpoint() {
        let table = anagrams("aemtmate\naemtmeat\nantant\n").unwrap();

        assert_eq!(table.len(), 3);
        let first = &table.entries()[0];
        assert_eq!(first.signature.as_str(), "aemt");
        assert_eq!(first.word, "mate");
        assert_eq!(table.entries()[2].word, "ant");
    }

    #[test]
    fn anagram_file_order_is_preserved() {
        let table = anagrams("aemtteam\naemtmate\n").unwrap();
        assert_eq!(table.entries()[0].word, "team");
        assert_eq!(table.entries()[1].word, "mate");
    }

    #[test]
    fn odd_length_line_is_malformed() {
        let err = anagrams("aemtmate\naemtmeatx\n").unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MalformedLine { line: 2, length: 9, .. }
        ));
    }

    #[test]
    fn empty_anagram_line_is_malformed() {
        let err = anagrams("aemtmate\n\nantant\n").unwrap_err();
        assert!(matches!(
            err,
            DictionaryError::MalformedLine { line: 2, length: 0, .. }
        ));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let table = anagrams("aemtmate\r\nantant\r\n").unwrap();
        assert_eq!(table.entries()[0].word, "mate");

        let table = lengths("ox\r\ncat\r\n").unwrap();
        assert_eq!(table.entries()[1].length, 3);
    }

    #[test]
    fn missing_final_newline_is_fine() {
        let table = anagrams("aemtmate\nantant").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn length_lines_record_length() {
        let table = lengths("a\nox\ncat\ndog\ncats\n").unwrap();
        let lens: Vec<usize> = table.entries().iter().map(|e| e.length).collect();
        assert_eq!(lens, [1, 2, 3, 3, 4]);
    }

    #[test]
    fn length_blank_lines_skipped() {
        let table = lengths("ox\n\ncat\n").unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_input_loads_empty_tables() {
        assert!(anagrams("").unwrap().is_empty());
        assert!(lengths("").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_anagram_table("/definitely/not/here/anag_sorted.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));

        let err = load_length_table("/definitely/not/here/words_by_length.txt").unwrap_err();
        assert!(matches!(err, DictionaryError::Io { .. }));
    }

    #[test]
    fn order_checks() {
        let sorted = anagrams("aemtmate\nantant\n").unwrap();
        assert!(check_anagram_order(&sorted, "test").is_ok());

        let unsorted = anagrams("antant\naemtmate\n").unwrap();
        assert!(matches!(
            check_anagram_order(&unsorted, "test"),
            Err(DictionaryError::Unsorted { line: 2, .. })
        ));

        let unsorted = lengths("cat\nox\n").unwrap();
        assert!(matches!(
            check_length_order(&unsorted, "test"),
            Err(DictionaryError::Unsorted { line: 2, .. })
        ));
    }
}
