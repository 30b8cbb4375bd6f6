//! Onboarding flag as stored in client-local storage.
//!
//! The flag is one-way: once `"true"` is written nothing in the client
//! writes it back.

/// Storage key holding the flag.
pub const ONBOARDING_COMPLETE_KEY: &str = "onboardingComplete";

/// Stored value marking onboarding as complete.
pub const ONBOARDING_COMPLETE_VALUE: &str = "true";

/// Interpret a stored value. Absent or anything other than `"true"` is
/// not complete.
pub fn is_complete(stored: Option<&str>) -> bool {
    stored == Some(ONBOARDING_COMPLETE_VALUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_true_counts_as_complete() {
        assert!(is_complete(Some("true")));
        assert!(!is_complete(None));
        assert!(!is_complete(Some("TRUE")));
        assert!(!is_complete(Some("1")));
        assert!(!is_complete(Some("")));
    }
}
