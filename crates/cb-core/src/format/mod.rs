//! Number formatting for balances and prices.
//!
//! Output matches the en-US grouped style: comma thousands separators and at
//! most three fraction digits, with trailing zeros dropped.

const MAX_FRACTION_DIGITS: usize = 3;

/// Format `value` as `1,234.5`.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(grouped(0.0), "0");
        assert_eq!(grouped(999.0), "999");
        assert_eq!(grouped(1585.0), "1,585");
        assert_eq!(grouped(25_000_000.0), "25,000,000");
        assert_eq!(grouped(103_560.47), "103,560.47");
    }

    #[test]
    fn keeps_at_most_three_fraction_digits() {
        assert_eq!(grouped(0.27), "0.27");
        assert_eq!(grouped(1.23456), "1.235");
        assert_eq!(grouped(2.0001), "2");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(grouped(-1234.5), "-1,234.5");
        assert_eq!(grouped(-0.0001), "0");
    }

    #[test]
    fn non_finite_renders_zero() {
        assert_eq!(grouped(f64::NAN), "0");
        assert_eq!(grouped(f64::INFINITY), "0");
    }
}
