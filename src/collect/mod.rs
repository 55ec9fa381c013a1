//! Locating benchmark output on disk.

pub mod search;
pub mod statfile;
pub mod unit;

pub use search::collect_entries;
pub use statfile::create_statfile;
pub use unit::Unit;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error(
        "'pagerank', 'ktruss', 'triangle', nor 'components' are in {folder}. Don't know unit for stats."
    )]
    UnknownUnit { folder: String },

    #[error("bad search pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: glob::PatternError,
    },

    #[error("cannot list log files: {source}")]
    Glob { source: glob::GlobError },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no logs_ folder in {}", folder.display())]
    NoLogFolder { folder: PathBuf },

    #[error("log folder {} is empty", folder.display())]
    EmptyLogFolder { folder: PathBuf },

    #[error("aggregation command {command:?} exited with {status}")]
    CommandFailed { command: String, status: String },
}
