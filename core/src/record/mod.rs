//! Persisted result records of dual-solve runs.

pub mod io;
pub mod latex;
pub mod types;

pub use io::{read_result, result_file_name, write_result, Clock, FixedClock, RecordError, SystemClock};
pub use latex::{points_table, results_table};
pub use types::*;

#[cfg(test)]
mod tests_io;
