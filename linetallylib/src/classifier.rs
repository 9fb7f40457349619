//! Line classifier for source files.
//!
//! This module provides the core heuristic for categorizing each line of a
//! file as code, comment, or blank. It is a single forward scan over trimmed
//! lines with one piece of state carried between them: whether the scan is
//! currently inside a block comment, and if so which delimiter pair opened it
//! (`/* */` or MATLAB's `%{ %}`).
//!
//! Each line is matched against a fixed rule chain; the first rule that
//! matches decides the line. A line holding code followed by a trailing `%`
//! or `//` marker is a *mixed* line and counts toward both the code and the
//! comment totals, so the per-category counts may add up to more than the
//! line count.
//!
//! The classifier is deliberately not a parser: it does not tokenize, does
//! not understand string literals containing comment-like substrings, and
//! does not support nested block comments.

use std::fs;
use std::path::Path;

use crate::error::LinetallyError;
use crate::stats::LineStats;
use crate::Result;

/// Which delimiter pair opened the current block comment.
///
/// The two block styles exit on different closing markers, so the open
/// delimiter is remembered for the duration of the block.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum BlockKind {
    /// `/* ... */`
    CStyle,
    /// `%{ ... %}`
    Matlab,
}

/// Block-comment state carried across lines.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
enum BlockState {
    /// Not inside a block comment
    #[default]
    Normal,
    /// Inside a block comment opened by the given delimiter pair
    InBlock(BlockKind),
}

/// How a single line was classified.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Whitespace only
    Blank,
    /// Comment only
    Comment,
    /// Code only
    Code,
    /// Code with a trailing comment marker; counts toward both code and
    /// comments
    Mixed,
}

/// Incremental line classifier.
///
/// Feed lines in file order with [`push_line`](Classifier::push_line) and
/// collect the counts with [`finish`](Classifier::finish). Most callers use
/// [`parse_file`] or [`parse_string`] instead.
#[derive(Debug, Default)]
pub struct Classifier {
    state: BlockState,
    stats: LineStats,
}

impl Classifier {
    /// Create a classifier in the normal (outside any block) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one line and fold it into the running counts.
    pub fn push_line(&mut self, raw: &str) -> LineKind {
        let kind = self.classify(raw.trim());

        match kind {
            LineKind::Blank => self.stats.blank += 1,
            LineKind::Comment => self.stats.comments += 1,
            LineKind::Code => self.stats.code += 1,
            LineKind::Mixed => {
                self.stats.code += 1;
                self.stats.comments += 1;
            }
        }
        self.stats.total += 1;

        kind
    }

    /// Consume the classifier and return the accumulated counts.
    pub fn finish(self) -> LineStats {
        self.stats
    }

    /// The rule chain. First match wins; order is load-bearing.
    fn classify(&mut self, line: &str) -> LineKind {
        if line.is_empty() {
            return LineKind::Blank;
        }

        // A leading marker beats everything, including block state. In
        // particular `%{` or `%}` at the start of a line is a plain comment
        // and neither opens nor closes a block.
        if line.starts_with('%') || line.starts_with("//") {
            return LineKind::Comment;
        }

        if line.contains("/*") {
            self.state = if line.contains("*/") {
                BlockState::Normal
            } else {
                BlockState::InBlock(BlockKind::CStyle)
            };
            return LineKind::Comment;
        }

        if self.state == BlockState::InBlock(BlockKind::CStyle) {
            if line.contains("*/") {
                self.state = BlockState::Normal;
            }
            return LineKind::Comment;
        }

        if line.contains("%{") {
            self.state = if line.contains("%}") {
                BlockState::Normal
            } else {
                BlockState::InBlock(BlockKind::Matlab)
            };
            return LineKind::Comment;
        }

        if self.state == BlockState::InBlock(BlockKind::Matlab) {
            if line.contains("%}") {
                self.state = BlockState::Normal;
            }
            return LineKind::Comment;
        }

        if line.contains('%') {
            return LineKind::Mixed;
        }

        if line.contains("//") {
            return LineKind::Mixed;
        }

        LineKind::Code
    }
}

/// Classify a single file and return its line counts.
///
/// The file is read whole; invalid UTF-8 degrades to replacement characters
/// rather than failing the file. An unreadable file returns
/// [`LinetallyError::FileRead`].
///
/// # Example
///
/// ```rust,ignore
/// use linetallylib::classifier::parse_file;
///
/// let stats = parse_file("src/solver.m")?;
/// println!("code: {}, comments: {}", stats.code, stats.comments);
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<LineStats> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| LinetallyError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(parse_string(&String::from_utf8_lossy(&bytes)))
}

/// Classify source text and return its line counts.
///
/// # Example
///
/// ```rust
/// use linetallylib::classifier::parse_string;
///
/// let stats = parse_string("% setup\nx = 1;\n");
/// assert_eq!(stats.comments, 1);
/// assert_eq!(stats.code, 1);
/// assert_eq!(stats.total, 2);
/// ```
pub fn parse_string(source: &str) -> LineStats {
    let mut classifier = Classifier::new();
    for line in source.lines() {
        classifier.push_line(line);
    }
    classifier.finish()
}
