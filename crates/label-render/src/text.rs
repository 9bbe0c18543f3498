//! Caption measurement and drawing.

use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;

/// Horizontal advance and vertical band of a laid-out line of text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextExtent {
    pub width: f32,
    /// Distance from the baseline up to the ascender line.
    pub ascent: f32,
    /// Distance from the baseline down to the descender line (negative).
    pub descent: f32,
}

impl TextExtent {
    /// Height of the ascender-to-descender band.
    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

/// Something that can measure and paint a single line of text.
///
/// `draw` takes the top-left corner of the line box; the baseline sits
/// `ascent` pixels below it.
pub trait Typeface {
    fn extent(&self, size: f32, text: &str) -> TextExtent;

    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, text: &str, color: Rgba<u8>);
}

/// An outline font loaded from a TTF/OTF/TTC file.
pub struct LabelFont {
    font: FontVec,
}

impl LabelFont {
    pub fn new(font: FontVec) -> Self {
        Self { font }
    }
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}

impl Typeface for LabelFont {
    fn extent(&self, size: f32, text: &str) -> TextExtent {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        TextExtent {
            width: measure_text_width(&self.font, scale, text),
            ascent: scaled.ascent(),
            descent: scaled.descent(),
        }
    }

    fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, text: &str, color: Rgba<u8>) {
        draw_text_mut(canvas, color, x, y, PxScale::from(size), &self.font, text);
    }
}

/// Measure the pixel advance of a string at the given font and scale.
pub fn measure_text_width<F: Font>(font: &F, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0f32;
    let mut prev_glyph: Option<ab_glyph::GlyphId> = None;

    for ch in text.chars() {
        let glyph_id = scaled.glyph_id(ch);
        if let Some(prev) = prev_glyph {
            width += scaled.kern(prev, glyph_id);
        }
        width += scaled.h_advance(glyph_id);
        prev_glyph = Some(glyph_id);
    }

    width
}

/// Draw `text` centered on `anchor` both horizontally and vertically.
///
/// Vertical centering uses the middle of the ascender/descender band, so
/// captions sit at the same height regardless of which letters they use.
pub fn draw_centered_text<T: Typeface + ?Sized>(
    canvas: &mut RgbaImage,
    font: &T,
    size: f32,
    anchor: (f32, f32),
    text: &str,
    color: Rgba<u8>,
) {
    let (x, y) = centered_origin(font.extent(size, text), anchor);
    font.draw(canvas, x, y, size, text, color);
}

/// Top-left corner of a line box of `extent` centered on `anchor`.
pub fn centered_origin(extent: TextExtent, anchor: (f32, f32)) -> (i32, i32) {
    let x = anchor.0 - extent.width / 2.0;
    let y = anchor.1 - extent.height() / 2.0;
    (x.round() as i32, y.round() as i32)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Monospace stand-in that paints each line box as a solid rectangle.
    pub struct BlockFace;

    impl BlockFace {
        pub const ADVANCE: f32 = 0.5;
        pub const ASCENT: f32 = 0.8;
        pub const DESCENT: f32 = -0.2;
    }

    impl Typeface for BlockFace {
        fn extent(&self, size: f32, text: &str) -> TextExtent {
            TextExtent {
                width: text.chars().count() as f32 * size * Self::ADVANCE,
                ascent: size * Self::ASCENT,
                descent: size * Self::DESCENT,
            }
        }

        fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, size: f32, text: &str, color: Rgba<u8>) {
            let extent = self.extent(size, text);
            let (w, h) = (extent.width.round() as i32, extent.height().round() as i32);
            for py in y.max(0)..(y + h).min(canvas.height() as i32) {
                for px in x.max(0)..(x + w).min(canvas.width() as i32) {
                    canvas.put_pixel(px as u32, py as u32, color);
                }
            }
        }
    }
}
