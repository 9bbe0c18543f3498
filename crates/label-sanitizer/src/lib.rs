//! Label text sanitizing.
//!
//! Turns raw input lines into ASCII captions that double as file stems.
//! Extended Latin letters are transliterated to their closest plain
//! spelling; anything else outside the Latin-1 range becomes a space.

pub mod table;

use tracing::trace;

use table::PASSTHROUGH_LIMIT;

/// Transliterate a single extended character.
///
/// Returns `None` both for characters that pass through unchanged and for
/// characters without a mapping; use [`sanitize`] for full strings.
pub fn transliterate(c: char) -> Option<&'static str> {
    let cp = c as u32;
    if cp < PASSTHROUGH_LIMIT {
        return None;
    }
    table::lookup(cp)
}

/// Sanitize a raw label.
///
/// Code points below 192 are copied verbatim (control characters and
/// punctuation included), mapped letters are replaced by their ASCII
/// spelling and unmapped ones by a single space. The result is trimmed.
pub fn sanitize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());

    for c in raw.chars() {
        if (c as u32) < PASSTHROUGH_LIMIT {
            out.push(c);
            continue;
        }
        match table::lookup(c as u32) {
            Some(ascii) => out.push_str(ascii),
            None => {
                trace!(code_point = c as u32, "No transliteration, substituting space");
                out.push(' ');
            }
        }
    }

    out.trim().to_string()
}
