//! Table-building passes behind each subcommand.

use crate::Result;
use crate::collect;
use crate::log::{CombinedRow, EntryGrammar, StatRow, parse_statfile};
use crate::table::ResultTable;

use std::path::Path;

/// Build the combined table from an intermediate stat file.
///
/// Any malformed line fails the whole run.
pub fn combined_table(statfile: &Path) -> Result<ResultTable<CombinedRow>> {
    let mut table = ResultTable::new();
    table.extend(parse_statfile(statfile)?);
    Ok(table)
}

/// Build the per-application table for every folder, in order.
///
/// Entries that do not fit the expected shape are left out.
pub fn stats_table(folders: &[String]) -> Result<ResultTable<StatRow>> {
    let grammar = EntryGrammar::new()?;
    let mut table = ResultTable::new();

    for folder in folders {
        for entry in collect::collect_entries(folder)? {
            match grammar.parse(&entry) {
                Some(row) => table.push(row),
                None => tracing::warn!(folder = %folder, entry = %entry, "skipping malformed entry"),
            }
        }
    }

    Ok(table)
}
