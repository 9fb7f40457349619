//! File discovery and filtering.
//!
//! This module turns roots (directories or plain files) into the final
//! ordered list of files to analyze, applying an extension filter, an
//! ignore set of exact file names, and optional exclude glob patterns.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::error::LinetallyError;
use crate::Result;

/// Configuration for file selection.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Extensions to include, normalized (no leading dot). Empty = any file.
    extensions: Vec<String>,
    /// Exact file names (base name + extension) to skip.
    ignore: HashSet<String>,
    /// Glob patterns to exclude.
    exclude: Vec<Pattern>,
}

impl FilterConfig {
    /// Create a new empty filter config (any extension, nothing ignored).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extension to include.
    ///
    /// A leading dot is accepted and stripped (`"m"` and `".m"` are the
    /// same entry). Matching is ASCII case-insensitive.
    pub fn extension(mut self, ext: &str) -> Result<Self> {
        let normalized = ext.strip_prefix('.').unwrap_or(ext);
        if normalized.is_empty()
            || normalized.contains(['.', '/', '\\'])
            || normalized.chars().any(char::is_whitespace)
        {
            return Err(LinetallyError::InvalidExtension(ext.to_string()));
        }
        self.extensions.push(normalized.to_ascii_lowercase());
        Ok(self)
    }

    /// Add multiple extensions.
    pub fn extension_many(mut self, exts: &[&str]) -> Result<Self> {
        for ext in exts {
            self = self.extension(ext)?;
        }
        Ok(self)
    }

    /// Skip any file with exactly this name (base name + extension).
    pub fn ignore(mut self, name: &str) -> Self {
        self.ignore.insert(name.to_string());
        self
    }

    /// Skip any file whose name appears in the list.
    pub fn ignore_many(mut self, names: &[&str]) -> Self {
        for name in names {
            self = self.ignore(name);
        }
        self
    }

    /// Add an exclude glob pattern, matched against the full path.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| LinetallyError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.exclude.push(pat);
        Ok(self)
    }

    /// Add multiple exclude glob patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Whether the file name is in the ignore set.
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .map_or(false, |name| self.ignore.contains(name))
    }

    /// Whether any exclude pattern matches the path.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.exclude.iter().any(|pat| pat.matches(&path_str))
    }

    /// Whether the path's extension is in the configured set.
    ///
    /// An empty set matches everything.
    pub fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .map_or(false, |ext| {
                self.extensions.iter().any(|e| ext.eq_ignore_ascii_case(e))
            })
    }

    /// Full check used for files found during directory traversal.
    pub fn matches(&self, path: &Path) -> bool {
        self.matches_extension(path) && !self.is_ignored(path) && !self.is_excluded(path)
    }
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    name.starts_with('.')
}

/// Discover files to analyze under a root.
///
/// A directory root is walked recursively (hidden directories skipped,
/// symlinks followed) and matching files are returned sorted. A plain-file
/// root is passed through without the extension check — naming a file
/// directly opts it in — though the ignore set and exclude patterns still
/// apply.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(LinetallyError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    if root.is_file() {
        if !filter.is_ignored(root) && !filter.is_excluded(root) {
            files.push(root.to_path_buf());
        }
        return Ok(files);
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let path = entry.path();

        if path.is_file() && filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}
