//! Directory scan and line classification
//!
//! Uses the ignore crate for traversal, with its standard filters disabled:
//! hidden and gitignored entries are visited like any other, and the only
//! pruning comes from the fixed exclusion set below.

use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use crate::error::{Result, ScanError};

/// File-name suffix selecting files for scanning (case-sensitive).
pub const TARGET_EXTENSION: &str = ".cs";

/// Single-line comment marker, checked at line start after trimming.
pub const COMMENT_MARKER: &str = "//";

/// Directory names pruned from the walk together with everything beneath them.
pub const EXCLUDED_DIRS: &[&str] = &["Migrations", "obj", "Properties", "bin", ".godot"];

/// Line counts for a single scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    /// Path as encountered during the walk
    pub path: String,
    /// Lines that are neither blank nor comment-only
    pub code_lines: usize,
    /// Blank lines and //-comment-only lines
    pub excluded_lines: usize,
    /// Always code_lines + excluded_lines
    pub total_lines: usize,
}

/// Aggregate counts across all reports of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub files: usize,
    pub code_lines: usize,
    pub excluded_lines: usize,
    pub total_lines: usize,
}

impl Totals {
    fn add(&mut self, report: &FileReport) {
        self.files += 1;
        self.code_lines += report.code_lines;
        self.excluded_lines += report.excluded_lines;
        self.total_lines += report.total_lines;
    }
}

/// Check whether a line counts as code.
///
/// A line is excluded when its trimmed content is empty or starts with the
/// comment marker. This is a prefix heuristic, not a lexer: block comment
/// bodies and trailing comments after code still count as code.
fn is_code_line(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with(COMMENT_MARKER)
}

/// Check whether a directory name is in the exclusion set (exact segment
/// match, not substring: a directory named MyProperties is still scanned).
fn is_excluded_name(name: &OsStr) -> bool {
    name.to_str()
        .map(|n| EXCLUDED_DIRS.contains(&n))
        .unwrap_or(false)
}

/// Count the lines of a single file.
///
/// The whole file is read and decoded as UTF-8 before classification; the
/// handle is released as soon as the read returns. A trailing line without a
/// terminator still counts as one line, an empty file yields zero lines.
fn count_file(path: &Path) -> Result<FileReport> {
    let bytes = fs::read(path).map_err(|source| ScanError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| ScanError::Decode {
        path: path.to_path_buf(),
    })?;

    let mut code_lines = 0;
    let mut excluded_lines = 0;
    for line in content.lines() {
        if is_code_line(line) {
            code_lines += 1;
        } else {
            excluded_lines += 1;
        }
    }

    Ok(FileReport {
        path: path.to_string_lossy().into_owned(),
        code_lines,
        excluded_lines,
        total_lines: code_lines + excluded_lines,
    })
}

/// Walk `root` and produce one report per .cs file plus aggregate totals.
///
/// Reports come back sorted by code line count descending; ties keep the
/// order files were discovered in (stable sort over the discovery-ordered
/// sequence). Any walk, read, or decode failure aborts the whole scan with
/// no partial result.
pub fn scan(root: &Path) -> Result<(Vec<FileReport>, Totals)> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).filter_entry(|entry| {
        // depth 0 is the root the caller asked for; never prune it
        if entry.depth() == 0 {
            return true;
        }
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        !(is_dir && entry.path().file_name().is_some_and(is_excluded_name))
    });

    let mut reports = Vec::new();
    let mut totals = Totals::default();

    for entry in builder.build() {
        let entry = entry?;
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(true) {
            continue;
        }

        let path = entry.path();
        let matches_extension = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.ends_with(TARGET_EXTENSION))
            .unwrap_or(false);
        if !matches_extension {
            continue;
        }

        let report = count_file(path)?;
        totals.add(&report);
        reports.push(report);
    }

    reports.sort_by(|a, b| b.code_lines.cmp(&a.code_lines));
    Ok((reports, totals))
}
