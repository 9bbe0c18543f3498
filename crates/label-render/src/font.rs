//! Font lookup by name or path.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use tracing::{debug, info};

use crate::text::LabelFont;

const VALID_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// Deepest directory nesting searched below a font root.
const MAX_SEARCH_DEPTH: usize = 8;

#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("font {0:?} not found in any font directory")]
    NotFound(String),

    #[error("invalid font file {} (only TTF/OTF/TTC supported)", .0.display())]
    Invalid(PathBuf),

    #[error("failed to read font {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LabelFont {
    /// Load a font by file path or by family/file name.
    ///
    /// A `name` that points at an existing file is loaded directly.
    /// Otherwise the system and user font directories are searched for a
    /// font file whose stem matches, ignoring case, spaces, `-` and `_`.
    pub fn load(name: &str) -> Result<Self, FontError> {
        let path = resolve_font_path(name)?;
        Self::from_file(&path)
    }

    /// Load the first face of a font file.
    pub fn from_file(path: &Path) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|_| FontError::Invalid(path.to_path_buf()))?;
        info!(path = %path.display(), "Font loaded");
        Ok(Self::new(font))
    }
}

/// Find the file backing a font name.
pub fn resolve_font_path(name: &str) -> Result<PathBuf, FontError> {
    let direct = Path::new(name);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let wanted = normalize_font_name(strip_font_extension(name));
    if wanted.is_empty() {
        return Err(FontError::NotFound(name.to_string()));
    }

    for dir in font_search_dirs() {
        if let Some(found) = find_in_dir(&dir, &wanted, 0) {
            debug!(name, path = %found.display(), "Resolved font name");
            return Ok(found);
        }
    }

    Err(FontError::NotFound(name.to_string()))
}

/// Directories searched for fonts, user directories first.
pub fn font_search_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Some(dir) = dirs::font_dir() {
        dirs_out.push(dir);
    }
    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home.join(".fonts"));
    }
    for dir in [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ] {
        dirs_out.push(PathBuf::from(dir));
    }
    dirs_out
}

/// Recursively search `dir` for a font file whose normalized stem is `wanted`.
///
/// Entries are visited in name order so the same name always resolves to
/// the same file.
pub fn find_in_dir(dir: &Path, wanted: &str, depth: usize) -> Option<PathBuf> {
    if depth > MAX_SEARCH_DEPTH {
        return None;
    }
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    let mut subdirs = Vec::new();
    for path in entries {
        if path.is_dir() {
            subdirs.push(path);
            continue;
        }
        if !has_font_extension(&path) {
            continue;
        }
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if normalize_font_name(stem) == wanted {
            return Some(path);
        }
    }

    subdirs
        .iter()
        .find_map(|sub| find_in_dir(sub, wanted, depth + 1))
}

/// Lowercase and drop separators so `"DejaVu Sans"` matches `DejaVuSans.ttf`.
pub fn normalize_font_name(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| VALID_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

fn strip_font_extension(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, ext)) if VALID_EXTENSIONS.contains(&ext.to_lowercase().as_str()) => stem,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("label-render-font-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn normalize_ignores_case_and_separators() {
        assert_eq!(normalize_font_name("DejaVu Sans"), "dejavusans");
        assert_eq!(normalize_font_name("Liberation_Sans-Bold"), "liberationsansbold");
        assert_eq!(normalize_font_name("Arial"), "arial");
    }

    #[test]
    fn strip_extension_only_for_fonts() {
        assert_eq!(strip_font_extension("Arial.ttf"), "Arial");
        assert_eq!(strip_font_extension("Arial.TTC"), "Arial");
        assert_eq!(strip_font_extension("Font.v2"), "Font.v2");
        assert_eq!(strip_font_extension("Arial"), "Arial");
    }

    #[test]
    fn find_in_dir_matches_nested_stems() {
        let dir = scratch_dir("nested");
        let nested = dir.join("truetype").join("msttcorefonts");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Arial.TTF"), b"not really a font").unwrap();
        std::fs::write(dir.join("arial.txt"), b"ignored").unwrap();

        let found = find_in_dir(&dir, "arial", 0).unwrap();
        assert_eq!(found, nested.join("Arial.TTF"));
        assert!(find_in_dir(&dir, "helvetica", 0).is_none());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn unknown_font_is_not_found() {
        let err = resolve_font_path("NoSuchFontFamilyXyz123").unwrap_err();
        assert!(matches!(err, FontError::NotFound(name) if name == "NoSuchFontFamilyXyz123"));
    }

    #[test]
    fn garbage_file_is_invalid() {
        let dir = scratch_dir("garbage");
        let path = dir.join("broken.ttf");
        std::fs::write(&path, b"definitely not sfnt data").unwrap();

        let err = LabelFont::load(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, FontError::Invalid(p) if p == path));

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = LabelFont::from_file(Path::new("/nonexistent/dir/font.ttf")).unwrap_err();
        assert!(matches!(err, FontError::Io { .. }));
    }
}
