//! # linetallylib
//!
//! A line counter library that classifies each line of a source file as
//! code, comment, or blank, and aggregates per-file and grand-total counts.
//!
//! ## Overview
//!
//! The library has two halves:
//!
//! - **Collection**: [`FilterConfig`] + [`discover_files`] turn roots
//!   (directories or plain files) into the final ordered file list, applying
//!   an extension filter, an ignore set, and exclude glob patterns.
//! - **Classification**: [`parse_file`] scans a file line by line with a
//!   two-state machine that tracks block comments (`/* */` and MATLAB's
//!   `%{ %}`) across lines. Lines mixing code with a trailing `%` or `//`
//!   comment count toward *both* the code and comment totals, so category
//!   counts may exceed the line count by design.
//!
//! [`count_paths`] ties the halves together and returns a [`ScanResult`];
//! [`write_report`] renders it to the `lineCount.txt` report file. A file
//! that cannot be read never aborts a scan: it contributes zero counts and
//! a [`ScanWarning`] instead.
//!
//! This is a heuristic counter, not a parser — string literals containing
//! comment markers and nested block comments are out of scope.
//!
//! ## Example
//!
//! ```rust
//! use linetallylib::{count_paths, write_report, FilterConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("demo.m"), "% header\nx = 1;\n").unwrap();
//!
//! let filter = FilterConfig::new().extension("m").unwrap();
//! let result = count_paths(&[dir.path().to_path_buf()], &filter).unwrap();
//! assert_eq!(result.total.code, 1);
//! assert_eq!(result.total.comments, 1);
//!
//! let report = write_report(&result, dir.path()).unwrap();
//! assert!(report.ends_with("lineCount.txt"));
//! ```

pub mod classifier;
pub mod counter;
pub mod error;
pub mod filter;
pub mod report;
pub mod stats;

pub use classifier::{parse_file, parse_string, Classifier, LineKind};
pub use counter::{analyze_files, count_file, count_paths};
pub use error::LinetallyError;
pub use filter::{discover_files, FilterConfig};
pub use report::{render_report, write_report, REPORT_FILE_NAME};
pub use stats::{FileRecord, LineStats, ScanResult, ScanWarning};

/// Result type for linetallylib operations
pub type Result<T> = std::result::Result<T, LinetallyError>;
