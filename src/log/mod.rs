//! Parsing for benchmark stat lines and search entries.

pub mod combined;
pub mod entry;
pub mod row;

pub use combined::parse_statfile;
pub use entry::EntryGrammar;
pub use row::{CombinedRow, StatRow};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed header at line {lineno}: {line:?}")]
    MalformedHeader { lineno: usize, line: String },

    #[error("malformed data at line {lineno}: {line:?}")]
    MalformedData { lineno: usize, line: String },

    #[error("data line {lineno} appears before any log header: {line:?}")]
    DataBeforeHeader { lineno: usize, line: String },
}

/// Drop the leading marker character (`N`, `s`, ...) of a token.
///
/// Empty tokens stay empty.
pub(crate) fn strip_marker(token: &str) -> &str {
    let mut chars = token.chars();
    chars.next();
    chars.as_str()
}
