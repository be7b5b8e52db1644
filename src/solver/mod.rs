//! Query handling
//!
//! Anagram and missing-letter lookups over the sorted dictionaries, the
//! [`Solver`] facade that owns both tables, and the anagram group diagnostic.

mod anagram;
mod engine;
pub mod groups;
mod missing;

pub use anagram::find_anagrams;
pub use engine::{QueryOutcome, Solver};
pub use groups::{AnagramGroup, GroupStatistics, anagram_groups, group_statistics};
pub use missing::find_missing_letters;
