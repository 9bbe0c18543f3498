//! Canvas allocation and pasting.

use image::RgbaImage;
use image::imageops;

use crate::color::Fill;

/// Allocate a canvas uniformly filled with `background`.
pub fn blank_canvas(width: u32, height: u32, background: Fill) -> RgbaImage {
    RgbaImage::from_pixel(width, height, background.to_rgba())
}

/// Paste `top` onto `base` at the given position.
///
/// Pixels are replaced rather than alpha-blended, so transparent areas of
/// `top` stay transparent on the canvas. Parts falling outside `base` are
/// clipped.
pub fn paste(base: &mut RgbaImage, top: &RgbaImage, x: u32, y: u32) {
    imageops::replace(base, top, i64::from(x), i64::from(y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn blank_canvas_transparent() {
        let img = blank_canvas(4, 3, Fill::Transparent);
        assert_eq!(img.dimensions(), (4, 3));
        assert!(img.pixels().all(|p| *p == Rgba([0, 0, 0, 0])));
    }

    #[test]
    fn blank_canvas_solid() {
        let white = Rgba([255, 255, 255, 255]);
        let img = blank_canvas(2, 2, Fill::Solid(white));
        assert!(img.pixels().all(|p| *p == white));
    }

    #[test]
    fn paste_replaces_instead_of_blending() {
        let mut base = blank_canvas(4, 4, Fill::Solid(Rgba([255, 255, 255, 255])));
        let top = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        paste(&mut base, &top, 1, 1);
        assert_eq!(base.get_pixel(1, 1), &Rgba([0, 0, 0, 0]));
        assert_eq!(base.get_pixel(2, 2), &Rgba([0, 0, 0, 0]));
        assert_eq!(base.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(base.get_pixel(3, 3), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn paste_does_not_panic_on_out_of_bounds() {
        let mut base = RgbaImage::new(10, 10);
        let top = RgbaImage::from_pixel(5, 5, Rgba([9, 9, 9, 255]));
        paste(&mut base, &top, 8, 8);
        assert_eq!(base.get_pixel(9, 9), &Rgba([9, 9, 9, 255]));
    }
}
