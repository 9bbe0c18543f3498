//! Transliteration table for extended Latin letters.

/// Code points below this value are kept verbatim.
pub const PASSTHROUGH_LIMIT: u32 = 192;

/// Extended Latin code points and their closest plain ASCII spelling.
///
/// Sorted by code point so lookups can binary-search.
pub const TRANSLITERATIONS: &[(u32, &str)] = &[
    (192, "A"),
    (193, "A"),
    (194, "A"),
    (195, "A"),
    (196, "A"),
    (197, "A"),
    (198, "AE"),
    (199, "C"),
    (200, "E"),
    (201, "E"),
    (202, "E"),
    (203, "E"),
    (204, "I"),
    (205, "I"),
    (206, "I"),
    (207, "I"),
    (208, "D"),
    (209, "N"),
    (210, "O"),
    (211, "O"),
    (212, "O"),
    (213, "O"),
    (214, "O"),
    (216, "O"),
    (217, "U"),
    (218, "U"),
    (219, "U"),
    (220, "U"),
    (221, "Y"),
    (223, "B"),
    (224, "a"),
    (225, "a"),
    (226, "a"),
    (227, "a"),
    (228, "a"),
    (229, "a"),
    (230, "ae"),
    (231, "c"),
    (232, "e"),
    (233, "e"),
    (234, "e"),
    (235, "e"),
    (236, "i"),
    (237, "i"),
    (238, "i"),
    (239, "i"),
    (241, "n"),
    (242, "o"),
    (243, "o"),
    (244, "o"),
    (245, "o"),
    (246, "o"),
    (249, "u"),
    (250, "u"),
    (251, "u"),
    (252, "u"),
    (253, "y"),
    (255, "y"),
    (338, "OE"),
    (339, "oe"),
    (376, "Y"),
];

/// Look up the ASCII spelling for an extended code point.
pub fn lookup(code_point: u32) -> Option<&'static str> {
    TRANSLITERATIONS
        .binary_search_by_key(&code_point, |&(cp, _)| cp)
        .ok()
        .map(|idx| TRANSLITERATIONS[idx].1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_sorted_and_unique() {
        for pair in TRANSLITERATIONS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn table_only_covers_extended_code_points() {
        for &(cp, ascii) in TRANSLITERATIONS {
            assert!(cp >= PASSTHROUGH_LIMIT);
            assert!(ascii.is_ascii());
            assert!(!ascii.is_empty());
        }
    }

    #[test]
    fn lookup_finds_ligatures() {
        assert_eq!(lookup('Œ' as u32), Some("OE"));
        assert_eq!(lookup('œ' as u32), Some("oe"));
        assert_eq!(lookup('Ÿ' as u32), Some("Y"));
    }

    #[test]
    fn lookup_misses_gaps() {
        // × ð ø ÷ þ are not letters with a plain spelling
        for c in ['×', 'Þ', 'ð', '÷', 'ø', 'þ'] {
            assert_eq!(lookup(c as u32), None, "{c}");
        }
    }
}
