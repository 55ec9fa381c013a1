use crate::collect::CollectError;
use std::fmt;

/// Throughput unit reported by a benchmark family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Mflops,
    Gteps,
    Gtpps,
}

// Checked in order; the first substring found in the folder name wins.
const FOLDER_UNITS: &[(&str, Unit)] = &[
    ("pagerank", Unit::Mflops),
    ("ktruss", Unit::Gteps),
    ("components", Unit::Gteps),
    ("triangle", Unit::Gtpps),
];

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Mflops => "MFLOPS",
            Unit::Gteps => "GTEPS",
            Unit::Gtpps => "GTPPS",
        }
    }

    /// Resolve the unit from an application folder name.
    pub fn for_folder(folder: &str) -> Result<Self, CollectError> {
        FOLDER_UNITS
            .iter()
            .find(|(needle, _)| folder.contains(*needle))
            .map(|(_, unit)| *unit)
            .ok_or_else(|| CollectError::UnknownUnit {
                folder: folder.to_string(),
            })
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_folders() {
        assert_eq!(Unit::for_folder("pagerank/").unwrap(), Unit::Mflops);
        assert_eq!(Unit::for_folder("ktruss/").unwrap(), Unit::Gteps);
        assert_eq!(Unit::for_folder("connected_components/").unwrap(), Unit::Gteps);
        assert_eq!(Unit::for_folder("triangle_count/").unwrap(), Unit::Gtpps);
        assert_eq!(Unit::Gtpps.to_string(), "GTPPS");
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(Unit::for_folder("pagerank_vs_triangle").unwrap(), Unit::Mflops);
    }

    #[test]
    fn unknown_folder() {
        let err = Unit::for_folder("bfs/").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'pagerank', 'ktruss', 'triangle', nor 'components' are in bfs/. Don't know unit for stats."
        );
    }
}
