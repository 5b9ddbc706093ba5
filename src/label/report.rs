//! Structured diagnostics for label-file loading.
//!
//! Loading is deliberately tolerant: a malformed line is skipped and
//! reported, never fatal. These types carry those reports to callers — the
//! session surfaces them to its host, and the `check` subcommand aggregates
//! them across a whole labels directory.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A stable code identifying the kind of problem found on a label line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum WarningCode {
    /// The line does not have exactly five whitespace-separated fields.
    FieldCount,
    /// A field could not be parsed as a number of the expected kind.
    InvalidNumber,
    /// The fields parsed but describe a box violating the invariant.
    InvalidBox,
}

/// One skipped line in a label file.
#[derive(Clone, Debug, Serialize)]
pub struct LoadWarning {
    /// 1-based line number within the file.
    pub line: usize,

    /// A stable code for the warning type.
    pub code: WarningCode,

    /// A human-readable description of what was wrong.
    pub message: String,
}

impl LoadWarning {
    /// Creates a new warning for the given line.
    pub fn new(line: usize, code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            line,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {:?}: {}", self.line, self.code, self.message)
    }
}

/// Per-file result within a directory-wide check.
#[derive(Clone, Debug, Serialize)]
pub struct FileReport {
    /// The label file that was loaded.
    pub path: PathBuf,

    /// Number of boxes that loaded cleanly.
    pub boxes: usize,

    /// Lines that were skipped.
    pub warnings: Vec<LoadWarning>,
}

/// The result of checking every label file under a directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct LabelCheckReport {
    /// One entry per label file, in path order.
    pub files: Vec<FileReport>,
}

impl LabelCheckReport {
    /// Creates a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a per-file result to the report.
    pub fn add(&mut self, file: FileReport) {
        self.files.push(file);
    }

    /// Total number of boxes that loaded cleanly.
    pub fn box_count(&self) -> usize {
        self.files.iter().map(|f| f.boxes).sum()
    }

    /// Total number of skipped lines across all files.
    pub fn warning_count(&self) -> usize {
        self.files.iter().map(|f| f.warnings.len()).sum()
    }

    /// Returns true if no file produced a warning.
    pub fn is_clean(&self) -> bool {
        self.files.iter().all(|f| f.warnings.is_empty())
    }
}

impl fmt::Display for LabelCheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Checked {} label file(s): {} box(es), {} warning(s)",
            self.files.len(),
            self.box_count(),
            self.warning_count()
        )?;

        for file in &self.files {
            for warning in &file.warnings {
                writeln!(f, "  {}: {}", file.path.display(), warning)?;
            }
        }

        Ok(())
    }
}
