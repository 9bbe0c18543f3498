//! QR version fitting and module rasterization.

use image::{Rgba, RgbaImage};
use qrcode::types::QrError;
use qrcode::{QrCode, Version};
use tracing::{debug, trace};

use crate::color::Fill;
use crate::level::ErrorCorrection;
use crate::{RenderError, Result};

/// Smallest QR version.
pub const MIN_VERSION: i16 = 1;

/// Largest QR version.
pub const MAX_VERSION: i16 = 40;

/// Number of modules along one side of a symbol of the given version.
pub fn module_count(version: i16) -> u32 {
    17 + 4 * version as u32
}

/// Encoded QR symbol as a square grid of dark/light modules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrMatrix {
    version: i16,
    width: u32,
    dark: Vec<bool>,
}

impl QrMatrix {
    /// QR version chosen for the payload.
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Modules per side (`17 + 4 * version`).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Whether the module at column `x`, row `y` is dark.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.dark[(y * self.width + x) as usize]
    }

    fn from_code(version: i16, code: &QrCode) -> Self {
        let dark = code
            .to_colors()
            .into_iter()
            .map(|color| color == qrcode::Color::Dark)
            .collect();
        Self {
            version,
            width: code.width() as u32,
            dark,
        }
    }
}

/// Encode `data` in the smallest version >= `min_version` that holds it.
///
/// Versions are tried upward until the payload fits the data capacity of
/// the symbol at `level`. Fails with [`RenderError::Capacity`] once version
/// 40 is exhausted; the payload is never truncated.
pub fn fit_version(data: &str, min_version: i16, level: ErrorCorrection) -> Result<QrMatrix> {
    if !(MIN_VERSION..=MAX_VERSION).contains(&min_version) {
        return Err(RenderError::InvalidVersion(min_version));
    }

    for version in min_version..=MAX_VERSION {
        match QrCode::with_version(data.as_bytes(), Version::Normal(version), level.into()) {
            Ok(code) => {
                debug!(version, %level, len = data.len(), "QR version selected");
                return Ok(QrMatrix::from_code(version, &code));
            }
            Err(QrError::DataTooLong) => {
                trace!(version, %level, "Payload does not fit, growing version");
            }
            Err(e) => return Err(RenderError::Encode(e)),
        }
    }

    Err(RenderError::Capacity {
        len: data.len(),
        min_version,
        level,
    })
}

/// Rasterize a matrix at `box_size` pixels per module with no quiet zone.
///
/// Dark modules take `front`, light modules take the background fill.
pub fn rasterize(matrix: &QrMatrix, box_size: u32, front: Rgba<u8>, back: Fill) -> RgbaImage {
    let img_size = matrix.width() * box_size;
    let mut img = RgbaImage::from_pixel(img_size, img_size, back.to_rgba());

    for y in 0..matrix.width() {
        for x in 0..matrix.width() {
            if !matrix.is_dark(x, y) {
                continue;
            }
            for dy in 0..box_size {
                for dx in 0..box_size {
                    img.put_pixel(x * box_size + dx, y * box_size + dy, front);
                }
            }
        }
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn module_count_matches_versions() {
        assert_eq!(module_count(1), 21);
        assert_eq!(module_count(2), 25);
        assert_eq!(module_count(40), 177);
    }

    #[test]
    fn short_label_fits_version_one() {
        let matrix = fit_version("A", 1, ErrorCorrection::High).unwrap();
        assert_eq!(matrix.version(), 1);
        assert_eq!(matrix.width(), 21);
    }

    #[test]
    fn min_version_is_a_lower_bound() {
        let matrix = fit_version("A", 7, ErrorCorrection::Low).unwrap();
        assert_eq!(matrix.version(), 7);
        assert_eq!(matrix.width(), module_count(7));
    }

    #[test]
    fn higher_level_forces_larger_version() {
        // Byte mode, version 1 holds 17 bytes at L but only 7 at H.
        let label = "abcdefgh";
        assert_eq!(fit_version(label, 1, ErrorCorrection::Low).unwrap().version(), 1);
        assert_eq!(fit_version(label, 1, ErrorCorrection::High).unwrap().version(), 2);
        // One byte fewer still fits version 1 at H.
        assert_eq!(fit_version("abcdefg", 1, ErrorCorrection::High).unwrap().version(), 1);
    }

    #[test]
    fn version_never_decreases_with_level() {
        let label = "https://example.com/labels/0001";
        let versions: Vec<i16> = ErrorCorrection::ALL
            .iter()
            .map(|&level| fit_version(label, 1, level).unwrap().version())
            .collect();
        assert!(versions.windows(2).all(|w| w[0] <= w[1]), "{versions:?}");
    }

    #[test]
    fn oversized_payload_is_a_capacity_error() {
        // Version 40-H holds 1273 bytes.
        let label = "x".repeat(1274);
        let err = fit_version(&label, 1, ErrorCorrection::High).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Capacity {
                len: 1274,
                min_version: 1,
                level: ErrorCorrection::High
            }
        ));
        // The same payload fits at L.
        assert!(fit_version(&label, 1, ErrorCorrection::Low).is_ok());
    }

    #[test]
    fn out_of_range_min_version_is_rejected() {
        assert!(matches!(
            fit_version("A", 0, ErrorCorrection::Low),
            Err(RenderError::InvalidVersion(0))
        ));
        assert!(matches!(
            fit_version("A", 41, ErrorCorrection::Low),
            Err(RenderError::InvalidVersion(41))
        ));
    }

    #[test]
    fn rasterize_scales_modules() {
        let matrix = fit_version("A", 1, ErrorCorrection::High).unwrap();
        let img = rasterize(&matrix, 3, BLACK, Fill::Transparent);
        assert_eq!(img.dimensions(), (63, 63));

        // Top-left finder pattern corner is dark, separator next to it is light.
        assert_eq!(img.get_pixel(0, 0), &BLACK);
        assert_eq!(img.get_pixel(2, 2), &BLACK);
        assert_eq!(img.get_pixel(7 * 3, 0), &Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn rasterize_uses_solid_background_for_light_modules() {
        let white = Rgba([255, 255, 255, 255]);
        let matrix = fit_version("A", 1, ErrorCorrection::High).unwrap();
        let img = rasterize(&matrix, 1, BLACK, Fill::Solid(white));
        for y in 0..matrix.width() {
            for x in 0..matrix.width() {
                let expected = if matrix.is_dark(x, y) { BLACK } else { white };
                assert_eq!(img.get_pixel(x, y), &expected);
            }
        }
    }
}
