//! Anagram Solver
//!
//! Word-puzzle solver over two pre-sorted dictionaries: one ordered by each
//! word's sorted letters (for anagrams), one ordered by word length (for
//! missing-letter patterns such as `c.t`).
//!
//! # Quick Start
//!
//! ```rust
//! use anagram_solver::dictionary::{AnagramTable, LengthTable};
//! use anagram_solver::solver::Solver;
//!
//! let words = ["mate", "meat", "team", "tame", "cats", "bats"];
//! let solver = Solver::new(AnagramTable::from_words(words), LengthTable::from_words(words));
//!
//! assert_eq!(solver.anagrams_of("team"), ["mate", "meat", "tame"]);
//! assert_eq!(solver.fill_pattern(".ats"), ["cats", "bats"]);
//! ```

// Core domain types
pub mod core;

// Sorted dictionaries and binary search
pub mod dictionary;

// Query handling
pub mod solver;

// Error types
pub mod errors;

// Runtime configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
