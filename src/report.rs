//! Timestamped CSV output.

use crate::Result;
use crate::table::{ResultTable, Row};

use anyhow::Context;
use chrono::{DateTime, TimeZone};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const COMBINED_PREFIX: &str = "combined_performance_stats";
pub const STATS_PREFIX: &str = "performance_stats";
pub const INTERMEDIATE_PREFIX: &str = "intermediate_statfile";

const TIMESTAMP_FORMAT: &str = "%Y_%m_%d.%H-%M-%S";

/// Second-resolution run stamp, e.g. `2024_03_07.14-05-09`.
pub fn timestamp<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    now.format(TIMESTAMP_FORMAT).to_string()
}

pub fn report_path(dir: &Path, prefix: &str, stamp: &str, ext: &str) -> PathBuf {
    dir.join(format!("{}_{}.{}", prefix, stamp, ext))
}

/// Write the whole table to `<dir>/<prefix>_<stamp>.csv` and return the path.
pub fn write_csv<R: Row>(
    table: &ResultTable<R>,
    dir: &Path,
    prefix: &str,
    stamp: &str,
) -> Result<PathBuf> {
    let path = report_path(dir, prefix, stamp, "csv");
    let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
    table
        .write_to(file, b',')
        .with_context(|| format!("write {}", path.display()))?;

    tracing::info!(path = %path.display(), rows = table.len(), "wrote report");
    Ok(path)
}
