/// Separator between sub-tokens inside a candidate line.
pub const SUB_TOKEN_SEPARATOR: char = '|';
/// Separator used when the cleaned sub-tokens are rejoined.
pub const JOIN_SEPARATOR: &str = ";";
/// Noise character stripped out of every sub-token.
pub const NOISE_CHAR: char = '-';
/// Marker that flags a genuine data line.
pub const MARKER_CHAR: char = '*';
/// Substring that flags a header line.
pub const HEADER_MARKER: &str = "Stat";

/// Whitespace as the source exports treat it: Unicode whitespace plus the
/// ASCII separator controls `\x1c`..=`\x1f`.
pub fn is_token_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim surrounding whitespace, then remove every noise `-`.
pub fn clean_token(raw: &str) -> String {
    raw.trim_matches(is_token_whitespace).replace(NOISE_CHAR, "")
}

/// Drop the first character (not byte). Empty input stays empty.
pub fn drop_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_token_trims_then_strips_dashes() {
        assert_eq!(clean_token("  B- C "), "B C");
        assert_eq!(clean_token("--"), "");
        assert_eq!(clean_token("\t12-03-2024\r"), "12032024");
    }

    #[test]
    fn clean_token_trims_separator_controls() {
        assert_eq!(clean_token("\u{1f}AB*"), "AB*");
        assert_eq!(clean_token("\u{1c}C*\u{1e}"), "C*");
        // inner controls are kept
        assert_eq!(clean_token("a\u{1d}b"), "a\u{1d}b");
    }

    #[test]
    fn drop_first_char_is_char_aware() {
        assert_eq!(drop_first_char(""), "");
        assert_eq!(drop_first_char("x"), "");
        assert_eq!(drop_first_char("éab"), "ab");
        assert_eq!(drop_first_char(";a;b"), "a;b");
    }
}
