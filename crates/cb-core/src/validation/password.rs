use once_cell::sync::Lazy;
use regex::Regex;

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("static regex"));
static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("static regex"));
static SPECIAL_CHAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#).expect("static regex")
});

const MIN_PASSWORD_LEN: usize = 8;

/// The four password rules, evaluated independently so the form can show
/// a live checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordCriteria {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl PasswordCriteria {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: password.chars().count() >= MIN_PASSWORD_LEN,
            has_uppercase: UPPERCASE.is_match(password),
            has_number: NUMBER.is_match(password),
            has_special_char: SPECIAL_CHAR.is_match(password),
        }
    }

    /// Number of satisfied rules, 0..=4.
    pub fn strength(&self) -> u8 {
        [
            self.has_min_length,
            self.has_uppercase,
            self.has_number,
            self.has_special_char,
        ]
        .iter()
        .filter(|met| **met)
        .count() as u8
    }

    pub fn is_satisfied(&self) -> bool {
        self.strength() == 4
    }
}
