//! Argument value validation.

use image::Rgba;
use label_render::{ColorError, ErrorCorrection, Fill, MAX_VERSION, MIN_VERSION, ParseLevelError};

/// Invalid command-line value, reported before any label is rendered.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("--box-size must be positive")]
    ZeroBoxSize,

    #[error("--text-size must be positive")]
    ZeroTextSize,

    #[error("--min-version must be between 1 and 40, got {0}")]
    MinVersion(i16),

    #[error("--front-color: {0}")]
    FrontColor(ColorError),

    #[error("--background-color: {0}")]
    BackgroundColor(ColorError),

    #[error("--error-correction: {0}")]
    ErrorCorrection(#[from] ParseLevelError),

    #[error("--text-font must not be empty")]
    EmptyFont,
}

pub fn validate_positive(value: u32, err: ConfigError) -> Result<u32, ConfigError> {
    if value == 0 {
        return Err(err);
    }
    Ok(value)
}

pub fn validate_min_version(value: i16) -> Result<i16, ConfigError> {
    if !(MIN_VERSION..=MAX_VERSION).contains(&value) {
        return Err(ConfigError::MinVersion(value));
    }
    Ok(value)
}

pub fn validate_front_color(value: &str) -> Result<Rgba<u8>, ConfigError> {
    label_render::parse_color(value).map_err(ConfigError::FrontColor)
}

pub fn validate_background_color(value: &str) -> Result<Fill, ConfigError> {
    value.parse().map_err(ConfigError::BackgroundColor)
}

pub fn validate_error_correction(value: &str) -> Result<ErrorCorrection, ConfigError> {
    Ok(value.parse()?)
}

pub fn validate_font_name(value: &str) -> Result<&str, ConfigError> {
    let name = value.trim();
    if name.is_empty() {
        return Err(ConfigError::EmptyFont);
    }
    Ok(name)
}
