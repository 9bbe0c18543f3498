//! QR label rendering.
//!
//! Encodes a label into the smallest QR version that holds it, rasterizes
//! the modules onto a padded RGBA canvas and prints the label centered in
//! the band below the code.

pub mod color;
pub mod compose;
pub mod font;
pub mod layout;
pub mod level;
pub mod qr;
pub mod render;
pub mod text;

// Re-exports for convenience
pub use color::{ColorError, Fill, parse_color};
pub use font::FontError;
pub use layout::CanvasLayout;
pub use level::{ErrorCorrection, ParseLevelError};
pub use qr::{MAX_VERSION, MIN_VERSION, QrMatrix, fit_version};
pub use render::{RenderConfig, RenderedLabel, render};
pub use text::{LabelFont, TextExtent, Typeface};

/// Errors that can occur while rendering a single label.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("label is empty")]
    EmptyLabel,

    #[error("QR version {0} is outside 1..=40")]
    InvalidVersion(i16),

    #[error("{len} bytes do not fit any QR version from {min_version} to 40 at error correction {level}")]
    Capacity {
        len: usize,
        min_version: i16,
        level: ErrorCorrection,
    },

    #[error("QR encode error: {0}")]
    Encode(qrcode::types::QrError),

    #[error("box size must be positive")]
    ZeroBoxSize,

    #[error("canvas dimensions overflow")]
    CanvasTooLarge,
}

/// Result type alias for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;
