//! Sorted dictionaries
//!
//! Loading, in-memory representation, and lower-bound search for the two
//! pre-sorted word tables.

pub mod loader;
mod search;
mod table;

pub use loader::{
    check_anagram_order, check_length_order, load_anagram_table, load_length_table,
    read_anagram_table, read_length_table,
};
pub use search::first_match_index;
pub use table::{AnagramEntry, AnagramTable, LengthEntry, LengthTable};
