//! Throughput search over an application folder's `logs*` directories.
//!
//! Output mirrors `grep -oE "[0-9]+.[0-9]+ *<UNIT>" <folder>logs*/*`: one line
//! per match, prefixed with `<path>:` only when more than one file was searched.

use crate::Result;
use crate::collect::{CollectError, Unit};

use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Append the `/` the search pattern and entry paths are built on.
pub fn normalize_folder(folder: &str) -> String {
    if folder.ends_with('/') {
        folder.to_string()
    } else {
        format!("{}/", folder)
    }
}

fn stat_regex(unit: Unit) -> Result<Regex> {
    Ok(Regex::new(&format!("[0-9]+.[0-9]+ *{}", unit))?)
}

fn log_files(folder: &str) -> Result<Vec<PathBuf>, CollectError> {
    let pattern = format!("{}logs*/*", glob::Pattern::escape(folder));
    let paths = glob::glob(&pattern).map_err(|source| CollectError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for path in paths {
        let path = path.map_err(|source| CollectError::Glob { source })?;
        if path.is_dir() {
            tracing::debug!(path = %path.display(), "skipping directory");
            continue;
        }
        files.push(path);
    }
    Ok(files)
}

/// Raw search output for one folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matches {
    pub lines: Vec<String>,
    /// True when each line carries a `<path>:` prefix.
    pub prefixed: bool,
}

/// Find every throughput value in the folder's log files.
pub fn search_matches(folder: &str, unit: Unit) -> Result<Matches> {
    let folder = normalize_folder(folder);
    let re = stat_regex(unit)?;
    let files = log_files(&folder)?;
    let prefixed = files.len() > 1;

    let mut out = Vec::new();
    for path in &files {
        let bytes = fs::read(path).map_err(|source| CollectError::Io {
            path: path.clone(),
            source,
        })?;
        let text = String::from_utf8_lossy(&bytes);

        for m in re.find_iter(&text) {
            if prefixed {
                out.push(format!("{}:{}", path.display(), m.as_str()));
            } else {
                out.push(m.as_str().to_string());
            }
        }
    }

    tracing::debug!(folder = %folder, files = files.len(), matches = out.len(), "searched logs");
    Ok(Matches {
        lines: out,
        prefixed,
    })
}

/// First visible directory entry (byte order) whose name satisfies `keep`.
///
/// Dot entries are never listed; with `files_only` directories are skipped too.
fn first_entry(
    dir: &Path,
    files_only: bool,
    keep: impl Fn(&str) -> bool,
) -> Result<Option<String>, CollectError> {
    let io = |source| CollectError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io)? {
        let entry = entry.map_err(io)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') || !keep(&name) {
            continue;
        }
        if files_only && entry.path().is_dir() {
            continue;
        }
        names.push(name);
    }
    names.sort();
    Ok(names.into_iter().next())
}

/// Qualify a bare match with the folder's single log file.
///
/// Used when only one file was searched, so the match carries no path.
pub fn make_entry(folder: &str, raw: &str) -> Result<String, CollectError> {
    let folder = normalize_folder(folder);

    let log_folder = first_entry(Path::new(&folder), false, |name| name.contains("logs_"))?
        .ok_or_else(|| CollectError::NoLogFolder {
            folder: PathBuf::from(&folder),
        })?;

    let full_path = format!("{}{}", folder, log_folder);
    let outfile = first_entry(Path::new(&full_path), true, |_| true)?.ok_or_else(|| {
        CollectError::EmptyLogFolder {
            folder: PathBuf::from(&full_path),
        }
    })?;

    Ok(format!("{}/{}:{}", full_path, outfile, raw))
}

/// Produce the search entries for one application folder.
pub fn collect_entries(folder: &str) -> Result<Vec<String>> {
    let unit = Unit::for_folder(folder)?;
    let Matches {
        lines: mut entries,
        prefixed,
    } = search_matches(folder, unit)?;

    if entries.is_empty() {
        tracing::warn!(folder, unit = %unit, "no {} values found", unit);
    }

    if entries.len() == 1 && !prefixed {
        tracing::info!(folder, "only one log file, qualifying entry by hand");
        let entry = make_entry(folder, &entries[0])?;
        entries = vec![entry];
    }

    Ok(entries)
}
