//! High-level line counting API.
//!
//! This module provides the main entry points for counting lines: collect
//! the files under one or more roots, classify each one, and aggregate the
//! counts into a [`ScanResult`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::classifier::parse_file;
use crate::filter::{discover_files, FilterConfig};
use crate::stats::{FileRecord, LineStats, ScanResult};
use crate::Result;

/// Count lines under one or more roots.
///
/// Each root may be a directory (scanned recursively) or a plain file
/// (taken as-is). Roots are processed in the given order; files discovered
/// under a directory root come back sorted, and a file reached through more
/// than one root is counted once, at its first occurrence.
///
/// A root that does not exist is a fatal error. A file that fails to *read*
/// after collection is not: it gets a zero-count record and a warning in
/// the result, and the scan continues.
///
/// # Example
///
/// ```rust,ignore
/// use linetallylib::{count_paths, FilterConfig};
///
/// let filter = FilterConfig::new().extension("m")?;
/// let result = count_paths(&["sim/".into()], &filter)?;
/// println!("code lines: {}", result.total.code);
/// ```
pub fn count_paths(paths: &[PathBuf], filter: &FilterConfig) -> Result<ScanResult> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for path in paths {
        for file in discover_files(path, filter)? {
            if seen.insert(file.clone()) {
                files.push(file);
            }
        }
    }

    Ok(analyze_files(files))
}

/// Analyze an explicit list of files, in the given order.
///
/// No filtering is applied — the list is taken as final. Files that cannot
/// be read produce a zero-count [`FileRecord`] plus a warning entry rather
/// than aborting the batch.
pub fn analyze_files(files: Vec<PathBuf>) -> ScanResult {
    let mut result = ScanResult::new();

    for path in files {
        match parse_file(&path) {
            Ok(stats) => result.add_record(FileRecord::new(path, stats)),
            Err(e) => {
                result.warn(path.clone(), e.to_string());
                result.add_record(FileRecord::unreadable(path));
            }
        }
    }

    result
}

/// Count lines in a single file.
pub fn count_file(path: impl AsRef<Path>) -> Result<LineStats> {
    parse_file(path)
}
