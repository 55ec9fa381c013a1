//! Row construction for per-application search entries.
//!
//! Entry shape:
//! `<app_folder>/<log_folder>/<app>-s<scale>-N<nodes>.<ext>:<stat> <unit>`
//!
//! Example:
//! `pagerank/logs_N4/pagerank-s22-N4.out:812.5 MFLOPS`

use crate::Result;
use crate::log::row::StatRow;
use crate::log::strip_marker;

use regex::Regex;

// Exactly three path segments, one `:`, three `-` tokens in the file name and
// one space between stat and unit.
const ENTRY_RE: &str = concat!(
    r"^(?P<file>[^/:]*/[^/:]*/",
    r"(?P<app>[^/:\-]*)-(?P<scale>[^/:\-]*)-(?P<nodes>[^/:\-]*)):",
    r"(?P<stat>[^/: ]*) (?P<unit>[^/: ]*)$",
);

pub struct EntryGrammar {
    re: Regex,
}

impl EntryGrammar {
    pub fn new() -> Result<Self> {
        Ok(Self {
            re: Regex::new(ENTRY_RE)?,
        })
    }

    /// Build a row from one entry, or `None` when the entry does not fit the shape.
    pub fn parse(&self, entry: &str) -> Option<StatRow> {
        let caps = self.re.captures(entry)?;

        let nodes = caps["nodes"].split('.').next().unwrap_or_default();

        Some(StatRow {
            file: caps["file"].to_string(),
            app: caps["app"].to_string(),
            nodes: strip_marker(nodes).to_string(),
            unit: caps["unit"].to_string(),
            scale: strip_marker(&caps["scale"]).to_string(),
            stat: caps["stat"].to_string(),
        })
    }
}
