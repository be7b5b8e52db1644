//! Formatting utilities for terminal output
//!
//! Plain strings only; colouring is applied by the display layer so these
//! stay usable for piped output and tests.

use crate::solver::{AnagramGroup, QueryOutcome};

/// Printed when a valid query finds nothing
pub const NO_MATCHES: &str = "No matches found.";

/// Printed for a token with characters outside `a-z` and `.`
pub const INVALID_WORD: &str = "Invalid word.";

/// Printed for a token over the length limit
#[must_use]
pub fn too_long_notice(max: usize) -> String {
    format!("Word too long (max {max} characters).")
}

/// `<query>: <match1> <match2> ...`
///
/// # Examples
/// ```
/// use anagram_solver::core::QueryKind;
/// use anagram_solver::output::formatters::format_outcome;
/// use anagram_solver::solver::QueryOutcome;
///
/// let outcome = QueryOutcome {
///     query: "team".to_string(),
///     kind: QueryKind::Anagram,
///     matches: vec!["mate".to_string(), "meat".to_string()],
/// };
/// assert_eq!(format_outcome(&outcome), "team: mate meat");
/// ```
#[must_use]
pub fn format_outcome(outcome: &QueryOutcome) -> String {
    format!("{}: {}", outcome.query, outcome.matches.join(" "))
}

/// First word of the group, then the rest: `mate: meat team tame`
#[must_use]
pub fn format_group(group: &AnagramGroup<'_>) -> String {
    match group.words.split_first() {
        Some((first, rest)) if rest.is_empty() => (*first).to_string(),
        Some((first, rest)) => format!("{first}: {}", rest.join(" ")),
        None => String::new(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
