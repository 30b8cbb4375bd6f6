//! Client-side pre-flight validation.
//!
//! Validation runs before any gateway call. A [`ValidationError`] is shown
//! inline and never reaches the identity service.

mod password;
mod phone;

pub use password::PasswordCriteria;
pub use phone::is_valid_phone;

use crate::identity::SignUpRequest;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please ensure your password meets all security requirements")]
    WeakPassword(PasswordCriteria),

    #[error("Please enter a valid phone number")]
    InvalidPhone,
}

/// Check a sign-up request: password strength first, then phone format.
pub fn validate_sign_up(request: &SignUpRequest) -> Result<(), ValidationError> {
    let criteria = PasswordCriteria::evaluate(request.password.expose());
    if !criteria.is_satisfied() {
        return Err(ValidationError::WeakPassword(criteria));
    }
    if !is_valid_phone(&request.phone) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(())
}
