use crate::table::Row;
use serde::Serialize;

/// One benchmark result from the combined stat file.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedRow {
    pub file: String,
    pub app: String,
    pub nodes: String,
    pub unit: String,
    pub scale: String,
    pub mean: String,
    pub mean_tolerance: String,
    pub min: String,
    pub max: String,
}

impl Row for CombinedRow {
    const COLUMNS: &'static [&'static str] = &[
        "file",
        "app",
        "nodes",
        "unit",
        "scale",
        "mean",
        "mean_tolerance",
        "min",
        "max",
    ];
}

/// One throughput value found in an application's log folders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub file: String,
    pub app: String,
    pub nodes: String,
    pub unit: String,
    pub scale: String,
    pub stat: String,
}

impl Row for StatRow {
    const COLUMNS: &'static [&'static str] = &["file", "app", "nodes", "unit", "scale", "stat"];
}
