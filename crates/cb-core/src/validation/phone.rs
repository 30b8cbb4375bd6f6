use once_cell::sync::Lazy;
use regex::Regex;

/// Optional `+`, a non-zero leading digit, then 1 to 14 more ASCII digits.
static PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9][0-9]{1,14}$").expect("static regex"));

pub fn is_valid_phone(phone: &str) -> bool {
    PHONE.is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_e164_like_numbers() {
        assert!(is_valid_phone("+2348012345678"));
        assert!(is_valid_phone("2348012345678"));
        assert!(is_valid_phone("12"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(!is_valid_phone(""));
        assert!(!is_valid_phone("+0123"));
        assert!(!is_valid_phone("08012345678"));
        assert!(!is_valid_phone("1"));
        assert!(!is_valid_phone("+1 555 0100"));
        assert!(!is_valid_phone("+1234567890123456"));
    }

    #[test]
    fn rejects_non_ascii_digits() {
        assert!(!is_valid_phone("+1\u{663}\u{663}\u{663}"));
        assert!(!is_valid_phone("1\u{967}\u{968}"));
    }
}
