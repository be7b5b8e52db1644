//! One-shot lookup command
//!
//! Answers a fixed list of tokens without entering the prompt loop.

use crate::errors::QueryError;
use crate::solver::{QueryOutcome, Solver};

/// Result for one token given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupLine {
    pub token: String,
    pub result: Result<QueryOutcome, QueryError>,
}

/// Results of a lookup run, in argument order
#[derive(Debug, Default)]
pub struct LookupReport {
    pub lines: Vec<LookupLine>,
}

impl LookupReport {
    /// Number of tokens that produced at least one match
    #[must_use]
    pub fn matched(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| line.result.as_ref().is_ok_and(|outcome| !outcome.is_empty()))
            .count()
    }

    /// Number of tokens rejected before lookup
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.lines.iter().filter(|line| line.result.is_err()).count()
    }
}

/// Look up every token in turn
#[must_use]
pub fn run_lookup<S: AsRef<str>>(solver: &Solver, tokens: &[S]) -> LookupReport {
    let lines = tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            LookupLine {
                token: token.to_string(),
                result: solver.lookup(token),
            }
        })
        .collect();

    LookupReport { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AnagramTable, LengthTable};

    fn solver() -> Solver {
        let words = ["listen", "silent", "enlist", "tinsel", "cats", "bats"];
        Solver::new(AnagramTable::from_words(words), LengthTable::from_words(words))
    }

    #[test]
    fn lookup_preserves_argument_order() {
        let report = run_lookup(&solver(), &["silent", ".ats", "xyz", "b@d"]);
        let tokens: Vec<&str> = report.lines.iter().map(|l| l.token.as_str()).collect();

        assert_eq!(tokens, ["silent", ".ats", "xyz", "b@d"]);
        assert_eq!(report.matched(), 2);
        assert_eq!(report.rejected(), 1);
    }

    #[test]
    fn lookup_results_match_solver() {
        let solver = solver();
        let report = run_lookup(&solver, &["LISTEN".to_string()]);
        let outcome = report.lines[0].result.as_ref().unwrap();

        assert_eq!(outcome.query, "listen");
        assert_eq!(outcome.matches, ["silent", "enlist", "tinsel"]);
    }

    #[test]
    fn empty_token_list() {
        let report = run_lookup::<&str>(&solver(), &[]);
        assert!(report.lines.is_empty());
        assert_eq!(report.matched(), 0);
    }
}
