//! Colour value validation.
//!
//! Symbol colours are kept as their source token (a named colour or a hex
//! string) so the serializer can re-emit them untouched; this module only
//! decides whether a token is acceptable.

/// Named colours accepted by the `c`/`color` parameter, matched
/// case-insensitively.
pub const NAMED_COLOURS: &[&str] = &[
    "red", "green", "blue", "yellow", "orange", "purple", "pink", "cyan", "magenta", "lime",
    "teal", "indigo", "violet", "brown", "gray", "grey", "black", "white", "gold", "silver",
    "coral", "salmon", "crimson", "navy", "olive", "maroon", "aqua", "fuchsia", "tomato", "plum",
];

/// Check a colour token: a named colour, or `#` followed by exactly 3, 6,
/// or 8 hex digits.
pub fn is_valid_colour(value: &str) -> bool {
    let lowered = value.to_ascii_lowercase();
    if NAMED_COLOURS.contains(&lowered.as_str()) {
        return true;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit());
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colours() {
        assert!(is_valid_colour("red"));
        assert!(is_valid_colour("RED"));
        assert!(is_valid_colour("Fuchsia"));
        assert!(!is_valid_colour("blurple"));
    }

    #[test]
    fn test_hex_colours() {
        assert!(is_valid_colour("#F00"));
        assert!(is_valid_colour("#ff0000"));
        assert!(is_valid_colour("#FF000080"));
    }

    #[test]
    fn test_hex_wrong_length() {
        assert!(!is_valid_colour("#F0"));
        assert!(!is_valid_colour("#F0000"));
        assert!(!is_valid_colour("#FF0000FF00"));
        // 4-digit #RGBA is deliberately not accepted.
        assert!(!is_valid_colour("#F008"));
    }

    #[test]
    fn test_hex_bad_digits() {
        assert!(!is_valid_colour("#GGG"));
        assert!(!is_valid_colour("#12345G"));
    }

    #[test]
    fn test_bare_hex_rejected() {
        assert!(!is_valid_colour("FF0000"));
        assert!(!is_valid_colour(""));
    }
}
