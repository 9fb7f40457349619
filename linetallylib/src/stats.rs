//! Core data structures for line-count statistics

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::path::PathBuf;

/// Line counts for a single file or an aggregate.
///
/// `total` is the number of lines scanned, not the sum of the other
/// counters: a mixed line (code with a trailing comment) increments both
/// `code` and `comments`, so `code + comments + blank` may exceed `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineStats {
    /// Lines containing executable code
    pub code: u64,
    /// Comment lines (including the comment half of mixed lines)
    pub comments: u64,
    /// Blank lines (whitespace only)
    pub blank: u64,
    /// Total lines scanned
    pub total: u64,
}

impl LineStats {
    /// Create a new LineStats with all zeros
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no lines were counted at all
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Add for LineStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            code: self.code + other.code,
            comments: self.comments + other.comments,
            blank: self.blank + other.blank,
            total: self.total + other.total,
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.code += other.code;
        self.comments += other.comments;
        self.blank += other.blank;
        self.total += other.total;
    }
}

/// Counts for a single analyzed file.
///
/// Immutable once computed; files that could not be read keep zero counts
/// and show up in [`ScanResult::warnings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Path to the file
    pub path: PathBuf,
    /// Line counts for this file
    pub stats: LineStats,
}

impl FileRecord {
    /// Create a new file record
    pub fn new(path: PathBuf, stats: LineStats) -> Self {
        Self { path, stats }
    }

    /// Create a record with zero counts for a file that could not be read
    pub fn unreadable(path: PathBuf) -> Self {
        Self::new(path, LineStats::new())
    }
}

/// A non-fatal problem encountered while scanning a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    /// Path of the file the warning refers to
    pub path: PathBuf,
    /// Human-readable description of what went wrong
    pub message: String,
}

/// Result of scanning a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanResult {
    /// Per-file records, in scan order
    pub files: Vec<FileRecord>,
    /// Grand totals across all files
    pub total: LineStats,
    /// Files that could not be read (zero counts, scan continued)
    pub warnings: Vec<ScanWarning>,
}

impl ScanResult {
    /// Create a new empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file record, folding its counts into the grand totals
    pub fn add_record(&mut self, record: FileRecord) {
        self.total += record.stats;
        self.files.push(record);
    }

    /// Record a warning for a file that could not be read
    pub fn warn(&mut self, path: PathBuf, message: impl Into<String>) {
        self.warnings.push(ScanWarning {
            path,
            message: message.into(),
        });
    }

    /// Number of files analyzed
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}
