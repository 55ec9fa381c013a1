//! Parser for the combined stat file produced by the aggregation command.
//!
//! The file is a sequence of blocks. Each block starts with a header naming the
//! log it came from, followed by one line per application:
//!
//! ```text
//! logs_N4_run-a-b-s22
//! pagerank : 12.3 +- 1.1 9.0 / 15.0 MFLOPS
//! Mean over all runs
//! ```
//!
//! Header fields are carried forward to every data line until the next header.

use crate::Result;
use crate::log::row::CombinedRow;
use crate::log::{ParseError, strip_marker};

use anyhow::Context;
use regex::Regex;
use std::fs;
use std::path::Path;

const HEADER_PREFIX: &str = "logs";
const SUMMARY_PREFIX: &str = "Mean";

// nodes: second `_` token; scale: fourth `-` token.
const NODES_RE: &str = r"^[^_]*_(?P<nodes>[^_]*)";
const SCALE_RE: &str = r"^(?:[^-]*-){3}(?P<scale>[^-]*)";

// <app> : <mean> +- <tolerance> [labels] <min> / <max> [...] <unit>
const DATA_RE: &str = concat!(
    r"^(?P<app>[^:]*):\s*(?P<mean>[^\s+]+)\s*\+-\s*(?P<tolerance>[^\s/]+)\s+",
    r"(?:.*?\s)?(?P<min>[0-9][^\s/]*)\s*/\s*(?P<max>[0-9][^\s/]*)",
    r"(?:\s+.*)?\s(?P<unit>\S+)$",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Summary,
    Blank,
    Data,
}

impl LineKind {
    /// Classify a line whose trailing whitespace is already removed.
    pub fn of(line: &str) -> Self {
        if line.starts_with(HEADER_PREFIX) {
            LineKind::Header
        } else if line.starts_with(SUMMARY_PREFIX) {
            LineKind::Summary
        } else if line.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Data
        }
    }
}

/// Fields taken from the most recent header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderState {
    pub file: String,
    pub nodes: String,
    pub scale: String,
}

/// Compiled line grammars.
pub struct Grammar {
    nodes: Regex,
    scale: Regex,
    data: Regex,
}

impl Grammar {
    pub fn new() -> Result<Self> {
        Ok(Self {
            nodes: Regex::new(NODES_RE)?,
            scale: Regex::new(SCALE_RE)?,
            data: Regex::new(DATA_RE)?,
        })
    }

    pub fn parse_header(&self, lineno: usize, line: &str) -> Result<HeaderState, ParseError> {
        let malformed = || ParseError::MalformedHeader {
            lineno,
            line: line.to_string(),
        };
        let nodes = self.nodes.captures(line).ok_or_else(malformed)?;
        let scale = self.scale.captures(line).ok_or_else(malformed)?;

        Ok(HeaderState {
            file: line.to_string(),
            nodes: strip_marker(&nodes["nodes"]).to_string(),
            scale: strip_marker(&scale["scale"]).to_string(),
        })
    }

    pub fn parse_data(
        &self,
        header: &HeaderState,
        lineno: usize,
        line: &str,
    ) -> Result<CombinedRow, ParseError> {
        let caps = self
            .data
            .captures(line)
            .ok_or_else(|| ParseError::MalformedData {
                lineno,
                line: line.to_string(),
            })?;

        Ok(CombinedRow {
            file: header.file.clone(),
            app: caps["app"].trim().to_string(),
            nodes: header.nodes.clone(),
            unit: caps["unit"].to_string(),
            scale: header.scale.clone(),
            mean: caps["mean"].to_string(),
            mean_tolerance: caps["tolerance"].to_string(),
            min: caps["min"].to_string(),
            max: caps["max"].to_string(),
        })
    }

    /// Advance the fold by one line.
    ///
    /// Returns the header in effect after this line and the row it produced, if any.
    pub fn step(
        &self,
        header: Option<HeaderState>,
        lineno: usize,
        line: &str,
    ) -> Result<(Option<HeaderState>, Option<CombinedRow>), ParseError> {
        let line = line.trim_end();
        match LineKind::of(line) {
            LineKind::Header => Ok((Some(self.parse_header(lineno, line)?), None)),
            LineKind::Summary | LineKind::Blank => Ok((header, None)),
            LineKind::Data => {
                let Some(h) = header.as_ref() else {
                    return Err(ParseError::DataBeforeHeader {
                        lineno,
                        line: line.to_string(),
                    });
                };
                let row = self.parse_data(h, lineno, line)?;
                Ok((header, Some(row)))
            }
        }
    }
}

/// Parse stat file text into rows. The first malformed line aborts the parse.
pub fn parse_stat_text(text: &str) -> Result<Vec<CombinedRow>> {
    let grammar = Grammar::new()?;

    let (_, rows) = text.lines().enumerate().try_fold(
        (None, Vec::new()),
        |(header, mut rows), (lineno, line)| {
            let (header, row) = grammar.step(header, lineno + 1, line)?;
            rows.extend(row);
            Ok::<_, ParseError>((header, rows))
        },
    )?;

    Ok(rows)
}

/// Read and parse a combined stat file.
pub fn parse_statfile(path: &Path) -> Result<Vec<CombinedRow>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read stat file {}", path.display()))?;
    parse_stat_text(&text).with_context(|| format!("parse stat file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header() -> HeaderState {
        HeaderState {
            file: "logs_N4_run-a-b-s22".to_string(),
            nodes: "4".to_string(),
            scale: "22".to_string(),
        }
    }

    #[test]
    fn classifies_lines() {
        assert_eq!(LineKind::of("logs_N4_x"), LineKind::Header);
        assert_eq!(LineKind::of("Mean of everything"), LineKind::Summary);
        assert_eq!(LineKind::of(""), LineKind::Blank);
        assert_eq!(LineKind::of("pagerank : 1.0 +- 0.1 1.0 / 2.0 MFLOPS"), LineKind::Data);
    }

    #[test]
    fn data_line_fields() {
        let g = Grammar::new().unwrap();
        let row = g
            .parse_data(&header(), 2, "app : 12.3 +- 1.1 9.0 / 15.0 MFLOPS")
            .unwrap();
        assert_eq!(
            row,
            CombinedRow {
                file: "logs_N4_run-a-b-s22".to_string(),
                app: "app".to_string(),
                nodes: "4".to_string(),
                unit: "MFLOPS".to_string(),
                scale: "22".to_string(),
                mean: "12.3".to_string(),
                mean_tolerance: "1.1".to_string(),
                min: "9.0".to_string(),
                max: "15.0".to_string(),
            }
        );
    }

    #[test]
    fn data_line_with_labels() {
        let g = Grammar::new().unwrap();
        let row = g
            .parse_data(
                &header(),
                2,
                "triangle_count: 0.52 +- 0.03 GTPPS min/max: 0.47 / 0.55 GTPPS",
            )
            .unwrap();
        assert_eq!(row.app, "triangle_count");
        assert_eq!(row.mean, "0.52");
        assert_eq!(row.mean_tolerance, "0.03");
        assert_eq!(row.min, "0.47");
        assert_eq!(row.max, "0.55");
        assert_eq!(row.unit, "GTPPS");
    }

    #[test]
    fn header_fields() {
        let g = Grammar::new().unwrap();
        let h = g.parse_header(1, "logs_N1024_run-a-b-s30-extra").unwrap();
        assert_eq!(h.nodes, "1024");
        assert_eq!(h.scale, "30");
        assert_eq!(h.file, "logs_N1024_run-a-b-s30-extra");
    }

    #[test]
    fn header_without_scale_token_is_malformed() {
        let g = Grammar::new().unwrap();
        let err = g.parse_header(7, "logs_N4_run-a").unwrap_err();
        assert!(matches!(err, ParseError::MalformedHeader { lineno: 7, .. }));
    }

    #[test]
    fn header_state_carries_forward() {
        let text = "\
logs_N4_run-a-b-s22
pagerank : 12.3 +- 1.1 9.0 / 15.0 MFLOPS
ktruss : 1.5 +- 0.2 1.1 / 1.9 GTEPS
Mean over runs

logs_N8_run-a-b-s24
components : 3.0 +- 0.5 2.0 / 4.0 GTEPS
";
        let rows = parse_stat_text(text).unwrap();
        let got: Vec<(&str, &str, &str)> = rows
            .iter()
            .map(|r| (r.app.as_str(), r.nodes.as_str(), r.scale.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("pagerank", "4", "22"),
                ("ktruss", "4", "22"),
                ("components", "8", "24"),
            ]
        );
        assert_eq!(rows[2].file, "logs_N8_run-a-b-s24");
    }

    #[test]
    fn malformed_data_aborts() {
        let text = "\
logs_N4_run-a-b-s22
pagerank : 12.3 +- 1.1 9.0 / 15.0 MFLOPS
garbage without structure
ktruss : 1.5 +- 0.2 1.1 / 1.9 GTEPS
";
        let err = parse_stat_text(text).unwrap_err();
        let parse = err.downcast_ref::<ParseError>().unwrap();
        assert!(matches!(parse, ParseError::MalformedData { lineno: 3, .. }));
    }

    #[test]
    fn data_before_header_is_an_error() {
        let err = parse_stat_text("pagerank : 12.3 +- 1.1 9.0 / 15.0 MFLOPS\n").unwrap_err();
        let parse = err.downcast_ref::<ParseError>().unwrap();
        assert!(matches!(parse, ParseError::DataBeforeHeader { lineno: 1, .. }));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intermediate.txt");
        fs::write(&path, "logs_N2_r-a-b-s20\napp : 1.0 +- 0.1 0.9 / 1.1 MFLOPS\n").unwrap();
        let rows = parse_statfile(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].nodes, "2");
    }
}
