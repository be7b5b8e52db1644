//! Core word-puzzle types
//!
//! Pure building blocks with no I/O: anagram signatures, wildcard patterns,
//! and the classifier that routes a user token to one of them.

mod classify;
mod pattern;
mod signature;

pub use classify::{Classification, QueryKind, classify};
pub use pattern::{WILDCARD, WildcardPattern};
pub use signature::{Signature, canonicalize};
