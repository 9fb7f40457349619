//! Report rendering and output.
//!
//! Renders a [`ScanResult`] as a fixed-width text table — header, dash
//! separator, one row per file, then a grand-totals block — and writes it
//! to `lineCount.txt` in a chosen directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LinetallyError;
use crate::stats::{LineStats, ScanResult};
use crate::Result;

/// File name of the written report.
pub const REPORT_FILE_NAME: &str = "lineCount.txt";

const NAME_WIDTH: usize = 60;
const CELL_WIDTH: usize = 10;

fn format_row(name: &str, code: &str, comments: &str, blank: &str, total: &str) -> String {
    format!(
        "{:<name_w$} : {:>cell_w$} | {:>cell_w$} | {:>cell_w$} | {:>cell_w$}",
        name,
        code,
        comments,
        blank,
        total,
        name_w = NAME_WIDTH,
        cell_w = CELL_WIDTH
    )
}

fn stats_row(name: &str, stats: &LineStats) -> String {
    format_row(
        name,
        &stats.code.to_string(),
        &stats.comments.to_string(),
        &stats.blank.to_string(),
        &stats.total.to_string(),
    )
}

/// Render the report as a string.
///
/// Long paths are padded, never truncated — the report is a file, not a
/// terminal.
pub fn render_report(result: &ScanResult) -> String {
    let header = format_row("File", "Code", "Comments", "Blank", "Total");
    let separator = "-".repeat(header.chars().count());

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for record in &result.files {
        out.push_str(&stats_row(&record.path.to_string_lossy(), &record.stats));
        out.push('\n');
    }

    out.push_str(&separator);
    out.push('\n');
    out.push_str(&stats_row(
        &format!("Total ({} files)", result.file_count()),
        &result.total,
    ));
    out.push('\n');

    out
}

/// Write the report to `lineCount.txt` inside `output_dir`.
///
/// The directory is created if missing. Returns the path of the written
/// file.
pub fn write_report(result: &ScanResult, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();

    fs::create_dir_all(output_dir).map_err(|e| LinetallyError::ReportWrite {
        path: output_dir.to_path_buf(),
        source: e,
    })?;

    let path = output_dir.join(REPORT_FILE_NAME);
    fs::write(&path, render_report(result)).map_err(|e| LinetallyError::ReportWrite {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}
