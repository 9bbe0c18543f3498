//! Canvas geometry for a QR label.

use crate::render::RenderConfig;
use crate::{RenderError, Result};

/// Pixel geometry of one label canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    /// Edge length of the rasterized QR code.
    pub code_size: u32,
    pub width: u32,
    pub height: u32,
    /// Top-left corner where the code is pasted.
    pub code_origin: (u32, u32),
    /// Center point of the caption inside the bottom padding band.
    pub caption_anchor: (f32, f32),
}

impl CanvasLayout {
    /// Compute the layout for a symbol with `module_count` modules per side.
    ///
    /// ```text
    /// width  = N * box_size + 2 * side_padding
    /// height = N * box_size + top_padding + bottom_padding
    /// ```
    pub fn compute(module_count: u32, config: &RenderConfig) -> Result<Self> {
        if config.box_size == 0 {
            return Err(RenderError::ZeroBoxSize);
        }

        let code_size = module_count
            .checked_mul(config.box_size)
            .ok_or(RenderError::CanvasTooLarge)?;
        let width = config
            .side_padding
            .checked_mul(2)
            .and_then(|sides| sides.checked_add(code_size))
            .ok_or(RenderError::CanvasTooLarge)?;
        let height = code_size
            .checked_add(config.top_padding)
            .and_then(|h| h.checked_add(config.bottom_padding))
            .ok_or(RenderError::CanvasTooLarge)?;

        let caption_anchor = (
            config.side_padding as f32 + code_size as f32 / 2.0,
            config.top_padding as f32 + code_size as f32 + config.bottom_padding as f32 / 2.0,
        );

        Ok(Self {
            code_size,
            width,
            height,
            code_origin: (config.side_padding, config.top_padding),
            caption_anchor,
        })
    }
}
