//! Reading raw labels from the input file.

use std::path::Path;

use tracing::{debug, info};

use super::generate::GenerateError;

/// How labels are laid out in the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFormat {
    /// One label per line.
    #[default]
    Lines,
    /// One label per row, taken from the first CSV field.
    Csv,
}

/// A label as read from the file, before sanitizing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLabel {
    /// 1-based line number in the input file.
    pub line: usize,
    pub text: String,
}

/// Read every non-blank label from `path`.
pub fn read_labels(path: &Path, format: InputFormat) -> Result<Vec<RawLabel>, GenerateError> {
    let content = std::fs::read_to_string(path).map_err(|source| GenerateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let labels = parse_labels(&content, format);
    info!(path = %path.display(), count = labels.len(), ?format, "Labels read");
    Ok(labels)
}

/// Split file content into raw labels.
///
/// Lines that are blank before sanitizing are skipped. A leading UTF-8 byte
/// order mark is ignored. CSV records are one per line; quoted fields may
/// contain commas and doubled quotes but not line breaks.
pub fn parse_labels(content: &str, format: InputFormat) -> Vec<RawLabel> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut labels = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            debug!(line = idx + 1, "Skipping blank line");
            continue;
        }
        let text = match format {
            InputFormat::Lines => line.to_string(),
            InputFormat::Csv => first_csv_field(line),
        };
        labels.push(RawLabel { line: idx + 1, text });
    }

    labels
}

/// First field of a CSV record, with RFC 4180 quoting removed.
pub fn first_csv_field(record: &str) -> String {
    let trimmed = record.trim_start();
    let Some(quoted) = trimmed.strip_prefix('"') else {
        return record.split(',').next().unwrap_or_default().to_string();
    };

    let mut field = String::new();
    let mut chars = quoted.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '"' {
            if chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                break;
            }
        } else {
            field.push(c);
        }
    }
    field
}
