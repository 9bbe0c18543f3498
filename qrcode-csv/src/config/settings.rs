//! Validated run settings built from the command line.

use std::path::{Path, PathBuf};

use label_render::RenderConfig;

use super::cli::Cli;
use super::validation::{self, ConfigError};
use crate::services::input::InputFormat;

/// Everything a run needs, validated once up front.
#[derive(Debug, Clone)]
pub struct Settings {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub text_font: String,
    pub input_format: InputFormat,
    pub show_progress: bool,
    pub render: RenderConfig,
}

impl Settings {
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let render = RenderConfig::new()
            .with_box_size(validation::validate_positive(cli.box_size, ConfigError::ZeroBoxSize)?)
            .with_top_padding(cli.top_padding)
            .with_side_padding(cli.side_padding)
            .with_bottom_padding(cli.bottom_padding)
            .with_text_size(validation::validate_positive(cli.text_size, ConfigError::ZeroTextSize)?)
            .with_front_color(validation::validate_front_color(&cli.front_color)?)
            .with_background(validation::validate_background_color(&cli.background_color)?)
            .with_min_version(validation::validate_min_version(cli.min_version)?)
            .with_error_correction(validation::validate_error_correction(&cli.error_correction)?);

        let text_font = validation::validate_font_name(&cli.text_font)?.to_string();
        let output_dir = cli
            .output_dir
            .or(cli.output)
            .unwrap_or_else(|| default_output_dir(&cli.input));
        let input_format = if cli.csv {
            InputFormat::Csv
        } else {
            InputFormat::Lines
        };

        Ok(Self {
            input: cli.input,
            output_dir,
            text_font,
            input_format,
            show_progress: !cli.quiet,
            render,
        })
    }
}

/// Sibling directory named after the input file's stem.
///
/// `data/labels.csv` writes into `data/labels/`.
pub fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "qrcodes".into());
    let parent = input.parent().unwrap_or_else(|| Path::new(""));
    let dir = parent.join(&stem);
    // Input without an extension would collide with its own output directory.
    if dir == input {
        let mut name = stem;
        name.push("_qrcodes");
        return parent.join(name);
    }
    dir
}
