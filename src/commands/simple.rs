//! Simple interactive CLI mode
//!
//! Prompt loop: one whitespace-delimited token at a time, each answered with a
//! result line or a notice. The prompt is written before every token, so a
//! line holding several words gets one prompt per word.

use crate::errors::QueryError;
use crate::output::formatters::{
    INVALID_WORD, NO_MATCHES, format_group, format_outcome, too_long_notice,
};
use crate::solver::{Solver, anagram_groups};
use colored::Colorize;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// Token that ends the session
pub const QUIT: &str = "q";

/// Debug-only command listing every anagram group
///
/// `:` can never appear in a valid query, so this cannot shadow a word.
pub const GROUPS_COMMAND: &str = ":groups";

const PROMPT: &str = "\nEnter your word (or use 'q' to quit): ";

/// Session behaviour switches
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Accept diagnostic commands such as [`GROUPS_COMMAND`]
    pub debug: bool,
    /// Write a prompt before each token is read
    pub show_prompt: bool,
}

/// Counters for a finished session
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub queries: usize,
    pub matched: usize,
    pub unmatched: usize,
    pub rejected: usize,
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple(solver: &Solver, debug: bool) -> io::Result<SessionSummary> {
    println!("\n{}", "*** Anagram Solver ***".bright_cyan().bold());
    println!();
    println!("To find a word with missing letters instead,");
    println!("use a {} to stand for the unknown letter(s).", ".".bright_yellow());
    if debug {
        println!(
            "Debug commands: {} lists every anagram group.",
            GROUPS_COMMAND.bright_black()
        );
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let options = SessionOptions {
        debug,
        show_prompt: true,
    };
    let summary = run_session(solver, stdin.lock(), stdout.lock(), options)?;

    info!(
        queries = summary.queries,
        matched = summary.matched,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(summary)
}

/// Drive the prompt loop over any reader and writer
///
/// Ends on the [`QUIT`] token or at end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    solver: &Solver,
    mut input: R,
    mut output: W,
    options: SessionOptions,
) -> io::Result<SessionSummary> {
    let mut summary = SessionSummary::default();
    let mut pending = VecDeque::new();

    loop {
        if options.show_prompt {
            write!(output, "{PROMPT}")?;
            output.flush()?;
        }

        let Some(token) = next_token(&mut input, &mut pending)? else {
            break;
        };

        if token == QUIT {
            return Ok(summary);
        }

        if options.debug && token == GROUPS_COMMAND {
            for group in anagram_groups(solver.anagrams(), 2) {
                writeln!(output, "{}", format_group(&group))?;
            }
            continue;
        }

        handle_token(solver, &token, &mut output, &mut summary)?;
    }

    Ok(summary)
}

/// Next whitespace-delimited token, reading more lines as needed
///
/// Returns `None` at end of input.
fn next_token<R: BufRead>(
    input: &mut R,
    pending: &mut VecDeque<String>,
) -> io::Result<Option<String>> {
    let mut line = String::new();
    while pending.is_empty() {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        pending.extend(line.split_whitespace().map(str::to_string));
    }
    Ok(pending.pop_front())
}

fn handle_token<W: Write>(
    solver: &Solver,
    token: &str,
    output: &mut W,
    summary: &mut SessionSummary,
) -> io::Result<()> {
    match solver.lookup(token) {
        Ok(outcome) => {
            summary.queries += 1;
            if outcome.is_empty() {
                summary.unmatched += 1;
                writeln!(output, "{NO_MATCHES}")
            } else {
                summary.matched += 1;
                writeln!(output, "{}", format_outcome(&outcome))
            }
        }
        Err(err) => {
            debug!(%err, "query rejected");
            summary.rejected += 1;
            match err {
                QueryError::InvalidInput { .. } => writeln!(output, "{INVALID_WORD}"),
                QueryError::TooLong { max, .. } => writeln!(output, "{}", too_long_notice(max)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{AnagramTable, LengthTable};

    const WORDS: &[&str] = &[
        "ant", "tan", "nat", "cat", "mate", "meat", "team", "tame", "cats", "bats", "mats", "rate",
    ];

    fn solver() -> Solver {
        Solver::new(
            AnagramTable::from_words(WORDS.iter().copied()),
            LengthTable::from_words(WORDS.iter().copied()),
        )
    }

    fn run(input: &str, options: SessionOptions) -> (String, SessionSummary) {
        let mut out = Vec::new();
        let summary = run_session(&solver(), input.as_bytes(), &mut out, options).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn answers_each_token() {
        let (out, summary) = run("team\n..ts\nq\n", SessionOptions::default());

        assert_eq!(out, "team: mate meat tame\n..ts: cats bats mats\n");
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.matched, 2);
    }

    #[test]
    fn several_tokens_on_one_line() {
        let (out, _) = run("ant rate q\n", SessionOptions::default());
        assert_eq!(out, "ant: tan nat\nNo matches found.\n");
    }

    #[test]
    fn quit_stops_before_later_tokens() {
        let (out, summary) = run("q team\n", SessionOptions::default());
        assert!(out.is_empty());
        assert_eq!(summary, SessionSummary::default());
    }

    #[test]
    fn end_of_input_ends_session() {
        let (out, summary) = run("cat", SessionOptions::default());
        assert_eq!(out, "No matches found.\n");
        assert_eq!(summary.unmatched, 1);
    }

    #[test]
    fn invalid_and_overlong_tokens_get_notices() {
        let long = "a".repeat(31);
        let (out, summary) = run(&format!("c4t {long}\n"), SessionOptions::default());

        assert_eq!(out, "Invalid word.\nWord too long (max 30 characters).\n");
        assert_eq!(summary.rejected, 2);
        assert_eq!(summary.queries, 0);
    }

    #[test]
    fn uppercase_quit_is_a_query() {
        let (out, _) = run("Q\n", SessionOptions::default());
        assert_eq!(out, "No matches found.\n");
    }

    #[test]
    fn groups_command_requires_debug() {
        let (out, _) = run(":groups\n", SessionOptions::default());
        assert_eq!(out, "Invalid word.\n");

        let debug = SessionOptions {
            debug: true,
            show_prompt: false,
        };
        let (out, _) = run(":groups\n", debug);
        assert_eq!(out, "mate: meat team tame\nant: tan nat\n");
    }

    #[test]
    fn t_is_not_a_diagnostic_trigger() {
        let debug = SessionOptions {
            debug: true,
            show_prompt: false,
        };
        let (out, _) = run("t\n", debug);
        assert_eq!(out, "No matches found.\n");
    }

    #[test]
    fn prompt_written_per_token() {
        let options = SessionOptions {
            debug: false,
            show_prompt: true,
        };
        let (out, _) = run("ant\nq\n", options);
        assert_eq!(out.matches(PROMPT).count(), 2);

        // Two words on one line, then a prompt for the quit token
        let (out, _) = run("ant rate\nq\n", options);
        assert_eq!(out.matches(PROMPT).count(), 3);
        assert_eq!(
            out,
            format!("{PROMPT}ant: tan nat\n{PROMPT}No matches found.\n{PROMPT}")
        );
    }

    #[test]
    fn prompt_repeated_at_end_of_input() {
        let options = SessionOptions {
            debug: false,
            show_prompt: true,
        };
        let (out, summary) = run("cat\n", options);
        assert_eq!(out, format!("{PROMPT}No matches found.\n{PROMPT}"));
        assert_eq!(summary.unmatched, 1);
    }
}
