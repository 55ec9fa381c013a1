//! In-memory result table with a fixed column schema.

use crate::Result;
use serde::Serialize;
use std::io;

/// A record type that can be stored in a [`ResultTable`].
///
/// `COLUMNS` must list the serialized fields in declaration order.
pub trait Row: Serialize {
    const COLUMNS: &'static [&'static str];
}

#[derive(Debug, Clone)]
pub struct ResultTable<R> {
    rows: Vec<R>,
}

impl<R> Default for ResultTable<R> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<R: Row> ResultTable<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: R) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write header and rows as delimited records into `out`.
    ///
    /// The header is written even when the table is empty.
    pub fn write_to<W: io::Write>(&self, out: W, delimiter: u8) -> Result<W> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .delimiter(delimiter)
            .from_writer(out);
        wtr.write_record(R::COLUMNS)?;
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.into_inner().map_err(|e| e.into_error().into())
    }

    /// Tab-separated listing for the console.
    pub fn preview(&self) -> Result<String> {
        let bytes = self.write_to(Vec::new(), b'\t')?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl<R: Row> Extend<R> for ResultTable<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        self.rows.extend(iter);
    }
}
