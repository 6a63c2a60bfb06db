//! Pure transforms over whatever the user typed.

use crate::domain::{DEFAULT_QTY, PHONE_MAX_CHARS};

/// Trims surrounding whitespace, then keeps at most `max_chars` characters.
pub fn sanitize_text(raw: &str, max_chars: usize) -> String {
    raw.trim().chars().take(max_chars).collect()
}

fn is_phone_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '(' | ')' | '-' | '.') || c.is_whitespace()
}

/// Keeps digits, `+()-.` and whitespace, capped at 32 characters.
///
/// Trailing whitespace exposed by the cap is trimmed too, so the transform is
/// idempotent.
pub fn normalize_phone(raw: &str) -> String {
    let filtered: String = raw.chars().filter(|c| is_phone_char(*c)).collect();
    let capped: String = filtered.trim().chars().take(PHONE_MAX_CHARS).collect();
    capped.trim_end().to_string()
}

/// Blank or non-numeric input falls back to 1. Zero and negatives map to 0,
/// which validation rejects.
pub fn parse_quantity(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(n) if n > 0 => u32::try_from(n).unwrap_or(0),
        Ok(_) => 0,
        Err(_) => DEFAULT_QTY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_trimmed_then_capped() {
        assert_eq!(sanitize_text("  A very long name... ", 5), "A ver");
        assert_eq!(sanitize_text("  Dana  ", 120), "Dana");
        assert_eq!(sanitize_text("", 10), "");
        assert_eq!(sanitize_text("   ", 10), "");
    }

    #[test]
    fn text_cap_counts_characters_not_bytes() {
        assert_eq!(sanitize_text("ÉÉÉÉ", 2), "ÉÉ");
    }

    #[test]
    fn phone_keeps_digits_and_punctuation() {
        assert_eq!(normalize_phone("1 (234) 567-8900 ext.5"), "1 (234) 567-8900 .5");
        assert_eq!(normalize_phone("+44 20.7946.0018"), "+44 20.7946.0018");
        assert_eq!(normalize_phone("call me"), "");
    }

    #[test]
    fn phone_is_capped_at_32() {
        let long = "1".repeat(40);
        assert_eq!(normalize_phone(&long).chars().count(), 32);
    }

    #[test]
    fn phone_normalization_is_idempotent() {
        let samples = [
            "1 (234) 567-8900 ext.5",
            "  +1 555 0100 x",
            "123456789012345678901234567890 1234",
            "tel: 555.0100 ",
            "",
        ];
        for sample in samples {
            let once = normalize_phone(sample);
            assert_eq!(normalize_phone(&once), once, "input: {sample:?}");
        }
    }

    #[test]
    fn quantity_coerces_permissively() {
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("lots"), 1);
        assert_eq!(parse_quantity(" 3 "), 3);
        assert_eq!(parse_quantity("0"), 0);
        assert_eq!(parse_quantity("-2"), 0);
    }
}
