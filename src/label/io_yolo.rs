//! Reader and writer for normalized label files.
//!
//! One plain-text file per image, one box per line:
//! `class_id x_center y_center width height`, space-separated, floats at
//! six decimal places. Reading is tolerant: a malformed line is skipped
//! with a warning so one bad line never loses the rest of a file. An image
//! with no boxes has an empty file; writing an empty set produces one
//! rather than deleting the file, which keeps saving idempotent and lets
//! [`has_labels`] stay a cheap content check.

use std::fs;
use std::io;
use std::path::Path;

use log::warn;

use super::bbox::BoundingBox;
use super::report::{LoadWarning, WarningCode};
use super::store::LabelSet;
use crate::error::BoxmarkError;

/// A loaded label set together with the lines that had to be skipped.
#[derive(Clone, Debug)]
pub struct LoadedLabels {
    pub labels: LabelSet,
    pub warnings: Vec<LoadWarning>,
}

/// Renders a label set in the on-disk line format.
pub fn write_labels_string(labels: &LabelSet) -> String {
    let mut out = String::new();
    for bbox in labels.boxes() {
        out.push_str(&format!(
            "{} {:.6} {:.6} {:.6} {:.6}\n",
            bbox.class_id(),
            bbox.x_center(),
            bbox.y_center(),
            bbox.width(),
            bbox.height()
        ));
    }
    out
}

/// Writes a label set to `path`, overwriting any existing file.
///
/// Parent directories are created as needed. An empty set writes an empty
/// file.
pub fn save_labels(labels: &LabelSet, path: &Path) -> Result<(), BoxmarkError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(BoxmarkError::Io)?;
        }
    }
    fs::write(path, write_labels_string(labels)).map_err(BoxmarkError::Io)
}

/// Parses label-file text, collecting a warning per malformed line.
pub fn parse_labels_str(text: &str) -> (LabelSet, Vec<LoadWarning>) {
    let mut boxes = Vec::new();
    let mut warnings = Vec::new();

    for (line_idx, line) in text.lines().enumerate() {
        match parse_label_line(line, line_idx + 1) {
            Ok(Some(bbox)) => boxes.push(bbox),
            Ok(None) => {}
            Err(warning) => warnings.push(warning),
        }
    }

    (LabelSet::from_boxes(boxes), warnings)
}

/// Loads the label file for an image.
///
/// A missing file is an empty label set, not an error; only a file that
/// exists but cannot be read fails. Skipped lines are surfaced in the
/// result and logged.
pub fn load_labels(path: &Path) -> Result<LoadedLabels, BoxmarkError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(LoadedLabels {
                labels: LabelSet::new(),
                warnings: Vec::new(),
            });
        }
        Err(err) => return Err(BoxmarkError::Io(err)),
    };

    let (labels, warnings) = parse_labels_str(&text);
    for warning in &warnings {
        warn!("{}: {}", path.display(), warning);
    }

    Ok(LoadedLabels { labels, warnings })
}

/// Returns true if `path` holds at least one annotation line.
///
/// Under the write-empty-file policy an existing file alone means nothing,
/// so this checks content, and a missing or unreadable file is simply
/// "no labels".
pub fn has_labels(path: &Path) -> bool {
    fs::read_to_string(path)
        .map(|text| text.lines().any(|line| !line.trim().is_empty()))
        .unwrap_or(false)
}

fn parse_label_line(line: &str, line_num: usize) -> Result<Option<BoundingBox>, LoadWarning> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    // Take at most 6 tokens so pathological inputs do not allocate unbounded memory.
    let tokens: Vec<&str> = trimmed.split_whitespace().take(6).collect();

    if tokens.len() < 5 {
        return Err(LoadWarning::new(
            line_num,
            WarningCode::FieldCount,
            format!("expected 5 fields, found {}", tokens.len()),
        ));
    }

    if tokens.len() > 5 {
        return Err(LoadWarning::new(
            line_num,
            WarningCode::FieldCount,
            "expected 5 fields, found more",
        ));
    }

    let class_id = tokens[0].parse::<u32>().map_err(|_| {
        LoadWarning::new(
            line_num,
            WarningCode::InvalidNumber,
            format!(
                "invalid class_id '{}'; expected non-negative integer",
                tokens[0]
            ),
        )
    })?;

    let x_center = parse_f64_field(tokens[1], "x_center", line_num)?;
    let y_center = parse_f64_field(tokens[2], "y_center", line_num)?;
    let width = parse_f64_field(tokens[3], "width", line_num)?;
    let height = parse_f64_field(tokens[4], "height", line_num)?;

    BoundingBox::new(class_id, x_center, y_center, width, height)
        .map(Some)
        .map_err(|err| LoadWarning::new(line_num, WarningCode::InvalidBox, err.to_string()))
}

fn parse_f64_field(raw: &str, field_name: &str, line_num: usize) -> Result<f64, LoadWarning> {
    raw.parse::<f64>().map_err(|_| {
        LoadWarning::new(
            line_num,
            WarningCode::InvalidNumber,
            format!("invalid {field_name} '{raw}'; expected floating-point number"),
        )
    })
}

/// Fuzz-only entrypoint for label-file parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_labels(input: &str) {
    let _ = parse_labels_str(input);
}
