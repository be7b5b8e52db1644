//! Command implementations

pub mod benchmark;
pub mod groups;
pub mod lookup;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_queries};
pub use groups::{GroupsReport, run_groups};
pub use lookup::{LookupLine, LookupReport, run_lookup};
pub use simple::{SessionOptions, SessionSummary, run_session, run_simple};
