//! Color parsing for foreground and background fills.

use std::str::FromStr;

use image::Rgba;

/// Fully transparent pixel used when no background is painted.
pub const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("aqua", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
    ("silver", [192, 192, 192]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("navy", [0, 0, 128]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("gold", [255, 215, 0]),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("unknown color {0:?}")]
    Unknown(String),

    #[error("invalid color component in {0:?}")]
    Component(String),

    #[error("color {0:?} is transparent, a solid color is required")]
    NotSolid(String),
}

/// A canvas fill: either a solid color or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Fill {
    Solid(Rgba<u8>),
    #[default]
    Transparent,
}

impl Fill {
    /// Pixel value written for this fill.
    pub fn to_rgba(self) -> Rgba<u8> {
        match self {
            Fill::Solid(color) => color,
            Fill::Transparent => CLEAR,
        }
    }
}

impl FromStr for Fill {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("transparent") {
            return Ok(Fill::Transparent);
        }
        parse_color(s).map(Fill::Solid)
    }
}

/// Parse a solid color.
///
/// Accepts `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb(r, g, b)`,
/// `rgba(r, g, b, a)` and common CSS color names.
pub fn parse_color(s: &str) -> Result<Rgba<u8>, ColorError> {
    let value = s.trim();
    let lower = value.to_ascii_lowercase();

    if lower == "transparent" {
        return Err(ColorError::NotSolid(s.to_string()));
    }
    if let Some(hex) = lower.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorError::Component(s.to_string()));
    }
    if let Some(args) = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
    {
        let with_alpha = lower.starts_with("rgba(");
        return parse_functional(args, with_alpha).ok_or_else(|| ColorError::Component(s.to_string()));
    }

    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|&(_, [r, g, b])| Rgba([r, g, b, 255]))
        .ok_or_else(|| ColorError::Unknown(s.to_string()))
}

fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, 255])),
        4 => Some(Rgba([nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?])),
        6 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, 255])),
        8 => Some(Rgba([byte(0)?, byte(2)?, byte(4)?, byte(6)?])),
        _ => None,
    }
}

fn parse_functional(args: &str, with_alpha: bool) -> Option<Rgba<u8>> {
    let parts: Vec<u8> = args
        .split(',')
        .map(|p| p.trim().parse::<u8>().ok())
        .collect::<Option<_>>()?;

    match (parts.as_slice(), with_alpha) {
        (&[r, g, b], false) => Some(Rgba([r, g, b, 255])),
        (&[r, g, b, a], true) => Some(Rgba([r, g, b, a])),
        _ => None,
    }
}
