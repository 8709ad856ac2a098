//! Hex color validation and normalization for categories.
//!
//! Colors are stored normalized-uppercase; anything that is absent,
//! blank, or fails the hex pattern falls back to [`DEFAULT_COLOR`].

/// Color stored when none (or an invalid one) is supplied
pub const DEFAULT_COLOR: &str = "#FFFFFF";

/// Check whether `value` is a `#RGB`, `#RRGGBB`, or `#RRGGBBAA` hex color
pub fn is_valid_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|ch| ch.is_ascii_hexdigit())
}

/// Normalize a color to its stored form.
///
/// Returns [`DEFAULT_COLOR`] when the input is absent, blank, or not a
/// valid hex color; otherwise the input uppercased. Pure and total,
/// idempotent over its own output.
pub fn normalize_color(value: Option<&str>) -> String {
    match value {
        Some(raw) if !raw.trim().is_empty() && is_valid_hex_color(raw.trim()) => {
            raw.trim().to_ascii_uppercase()
        }
        _ => DEFAULT_COLOR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_three_six_and_eight_digit_forms() {
        assert!(is_valid_hex_color("#abc"));
        assert!(is_valid_hex_color("#A1B2C3"));
        assert!(is_valid_hex_color("#A1B2C3D4"));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(!is_valid_hex_color("abc"));
        assert!(!is_valid_hex_color("#ab"));
        assert!(!is_valid_hex_color("#abcd"));
        assert!(!is_valid_hex_color("#ggg"));
        assert!(!is_valid_hex_color("#"));
        assert!(!is_valid_hex_color(""));
    }

    #[test]
    fn normalize_uppercases_valid_input() {
        assert_eq!(normalize_color(Some("#abc")), "#ABC");
        assert_eq!(normalize_color(Some("#ff0000")), "#FF0000");
        assert_eq!(normalize_color(Some("  #ff0000  ")), "#FF0000");
    }

    #[test]
    fn normalize_defaults_absent_blank_and_invalid() {
        assert_eq!(normalize_color(None), DEFAULT_COLOR);
        assert_eq!(normalize_color(Some("")), DEFAULT_COLOR);
        assert_eq!(normalize_color(Some("   ")), DEFAULT_COLOR);
        assert_eq!(normalize_color(Some("not-a-color")), DEFAULT_COLOR);
    }

    #[test]
    fn normalize_is_idempotent() {
        for input in ["#abc", "#ff0000", "nope", "", "#A1B2C3D4"] {
            let once = normalize_color(Some(input));
            let twice = normalize_color(Some(&once));
            assert_eq!(once, twice);
        }
    }
}
