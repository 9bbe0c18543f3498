//! Label pipeline: sanitize, render and persist one PNG per label.

use std::path::{Path, PathBuf};

use image::ImageFormat;
use label_render::{RenderConfig, RenderError, Typeface};
use tracing::{debug, info, warn};

use super::input::{self, RawLabel};
use super::progress::ProgressObserver;
use crate::config::Settings;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: label {raw:?} is empty after sanitizing")]
    EmptyLabel { line: usize, raw: String },

    #[error("line {line}: label {label:?} cannot be used as a file name")]
    UnsafeFileName { line: usize, label: String },

    #[error("label {label:?}: {source}")]
    Render {
        label: String,
        #[source]
        source: RenderError,
    },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("label {label:?}: failed to write {}: {source}", path.display())]
    Write {
        label: String,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// A sanitized label ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub line: usize,
    pub text: String,
}

impl Label {
    pub fn file_name(&self) -> String {
        format!("{}.png", self.text)
    }
}

/// Sanitize raw labels, rejecting any that end up empty or unusable as a
/// file stem. Every label is checked before the first one is rendered.
pub fn prepare_labels(raw: Vec<RawLabel>) -> Result<Vec<Label>, GenerateError> {
    raw.into_iter()
        .map(|RawLabel { line, text }| {
            let clean = label_sanitizer::sanitize(&text);
            debug!(line, raw = %text, label = %clean, "Label sanitized");
            if clean.is_empty() {
                return Err(GenerateError::EmptyLabel { line, raw: text });
            }
            if !is_safe_file_stem(&clean) {
                return Err(GenerateError::UnsafeFileName { line, label: clean });
            }
            Ok(Label { line, text: clean })
        })
        .collect()
}

/// Whether `stem` can be used as-is for a file inside the output directory.
pub fn is_safe_file_stem(stem: &str) -> bool {
    !stem.is_empty()
        && stem != "."
        && stem != ".."
        && !stem.contains(['/', '\\', '\0'])
}

/// Render every label into `output_dir`, notifying `progress` after each.
///
/// Stops at the first failing label. Files already written stay in place.
pub fn generate<T: Typeface + ?Sized>(
    labels: &[Label],
    output_dir: &Path,
    config: &RenderConfig,
    font: &T,
    progress: &mut dyn ProgressObserver,
) -> Result<Vec<PathBuf>, GenerateError> {
    std::fs::create_dir_all(output_dir).map_err(|source| GenerateError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    progress.start(labels.len());
    let mut written = Vec::with_capacity(labels.len());

    for label in labels {
        let rendered = label_render::render(&label.text, config, font).map_err(|source| {
            GenerateError::Render {
                label: label.text.clone(),
                source,
            }
        })?;

        let path = output_dir.join(label.file_name());
        rendered
            .canvas
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| GenerateError::Write {
                label: label.text.clone(),
                path: path.clone(),
                source,
            })?;

        debug!(label = %label.text, version = rendered.version, path = %path.display(), "QR code written");
        written.push(path);
        progress.advance(&label.text);
    }

    progress.finish();
    Ok(written)
}

/// Read, sanitize and render every label named by `settings`.
pub fn run<T: Typeface + ?Sized>(
    settings: &Settings,
    font: &T,
    progress: &mut dyn ProgressObserver,
) -> Result<Vec<PathBuf>, GenerateError> {
    let raw = input::read_labels(&settings.input, settings.input_format)?;
    let labels = prepare_labels(raw)?;
    if labels.is_empty() {
        warn!(path = %settings.input.display(), "No labels found");
    }

    let written = generate(&labels, &settings.output_dir, &settings.render, font, progress)?;
    info!(
        count = written.len(),
        dir = %settings.output_dir.display(),
        "QR codes generated"
    );
    Ok(written)
}
