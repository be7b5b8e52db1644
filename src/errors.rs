//! Error types for dictionary loading and query handling

use std::io;
use std::path::PathBuf;

/// Failure while loading one of the sorted dictionaries
///
/// Every variant is fatal: the solver is unusable without both tables, and a
/// partially loaded table would silently return incomplete results.
#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("cannot read dictionary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{source_name}:{line}: malformed anagram entry (length {length}, expected a non-empty even length)")]
    MalformedLine {
        source_name: String,
        line: usize,
        length: usize,
    },
    #[error("{source_name}:{line}: entry is out of order")]
    Unsorted { source_name: String, line: usize },
}

/// A query token that cannot be looked up
///
/// These are reported to the user and the session carries on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("invalid word \"{token}\"")]
    InvalidInput { token: String },
    #[error("word too long ({length} characters, max {max})")]
    TooLong { length: usize, max: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_line_names_location() {
        let err = DictionaryError::MalformedLine {
            source_name: "anag_sorted.txt".to_string(),
            line: 12,
            length: 7,
        };
        let text = err.to_string();
        assert!(text.starts_with("anag_sorted.txt:12:"));
        assert!(text.contains("length 7"));
    }

    #[test]
    fn io_error_keeps_source() {
        use std::error::Error;

        let err = DictionaryError::Io {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn query_error_messages() {
        let invalid = QueryError::InvalidInput {
            token: "ab3".to_string(),
        };
        assert_eq!(invalid.to_string(), "invalid word \"ab3\"");

        let long = QueryError::TooLong { length: 31, max: 30 };
        assert_eq!(long.to_string(), "word too long (31 characters, max 30)");
    }
}
