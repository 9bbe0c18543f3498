//! Label canvas rendering: QR code on a padded canvas with a caption below.

use image::{Rgba, RgbaImage};
use tracing::debug;

use crate::color::Fill;
use crate::compose;
use crate::layout::CanvasLayout;
use crate::level::ErrorCorrection;
use crate::qr;
use crate::text::{self, Typeface};
use crate::{RenderError, Result};

pub const DEFAULT_BOX_SIZE: u32 = 30;
pub const DEFAULT_TOP_PADDING: u32 = 170;
pub const DEFAULT_SIDE_PADDING: u32 = 170;
pub const DEFAULT_BOTTOM_PADDING: u32 = 340;
pub const DEFAULT_TEXT_SIZE: u32 = 100;
pub const DEFAULT_FRONT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Sizes, colors and QR parameters shared by every label of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Pixels per QR module.
    pub box_size: u32,
    pub top_padding: u32,
    pub side_padding: u32,
    pub bottom_padding: u32,
    /// Caption height in pixels.
    pub text_size: u32,
    /// Color of dark modules and of the caption.
    pub front_color: Rgba<u8>,
    pub background: Fill,
    /// Lower bound on the QR version; the encoder grows past it as needed.
    pub min_version: i16,
    pub error_correction: ErrorCorrection,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            box_size: DEFAULT_BOX_SIZE,
            top_padding: DEFAULT_TOP_PADDING,
            side_padding: DEFAULT_SIDE_PADDING,
            bottom_padding: DEFAULT_BOTTOM_PADDING,
            text_size: DEFAULT_TEXT_SIZE,
            front_color: DEFAULT_FRONT_COLOR,
            background: Fill::Transparent,
            min_version: qr::MIN_VERSION,
            error_correction: ErrorCorrection::High,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_box_size(mut self, val: u32) -> Self {
        self.box_size = val;
        self
    }

    pub fn with_top_padding(mut self, val: u32) -> Self {
        self.top_padding = val;
        self
    }

    pub fn with_side_padding(mut self, val: u32) -> Self {
        self.side_padding = val;
        self
    }

    pub fn with_bottom_padding(mut self, val: u32) -> Self {
        self.bottom_padding = val;
        self
    }

    pub fn with_text_size(mut self, val: u32) -> Self {
        self.text_size = val;
        self
    }

    pub fn with_front_color(mut self, val: Rgba<u8>) -> Self {
        self.front_color = val;
        self
    }

    pub fn with_background(mut self, val: Fill) -> Self {
        self.background = val;
        self
    }

    pub fn with_min_version(mut self, val: i16) -> Self {
        self.min_version = val;
        self
    }

    pub fn with_error_correction(mut self, val: ErrorCorrection) -> Self {
        self.error_correction = val;
        self
    }
}

/// A finished label canvas.
#[derive(Debug, Clone)]
pub struct RenderedLabel {
    /// QR version the encoder settled on.
    pub version: i16,
    pub canvas: RgbaImage,
}

/// Render one label: QR code pasted below the top padding, caption centered
/// in the bottom padding band.
///
/// Pure with respect to its inputs: the same label, config and font always
/// produce the same pixels.
pub fn render<T: Typeface + ?Sized>(
    label: &str,
    config: &RenderConfig,
    font: &T,
) -> Result<RenderedLabel> {
    if label.is_empty() {
        return Err(RenderError::EmptyLabel);
    }

    let matrix = qr::fit_version(label, config.min_version, config.error_correction)?;
    let layout = CanvasLayout::compute(matrix.width(), config)?;

    let code = qr::rasterize(&matrix, config.box_size, config.front_color, config.background);
    let mut canvas = compose::blank_canvas(layout.width, layout.height, config.background);
    compose::paste(&mut canvas, &code, layout.code_origin.0, layout.code_origin.1);

    text::draw_centered_text(
        &mut canvas,
        font,
        config.text_size as f32,
        layout.caption_anchor,
        label,
        config.front_color,
    );

    debug!(
        label,
        version = matrix.version(),
        width = layout.width,
        height = layout.height,
        "Label rendered"
    );

    Ok(RenderedLabel {
        version: matrix.version(),
        canvas,
    })
}
