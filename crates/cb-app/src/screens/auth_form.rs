use cb_core::identity::{Credentials, SignUpRequest};
use cb_core::validation::{validate_sign_up, PasswordCriteria};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

/// What a submit turns into.
#[derive(Debug)]
pub enum AuthSubmission {
    SignIn(Credentials),
    SignUp(SignUpRequest),
}

/// Login / sign-up form state.
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    mode: AuthMode,
    pub email: String,
    password: String,
    pub full_name: String,
    pub phone: String,
    show_password: bool,
    criteria: PasswordCriteria,
    submitting: bool,
    error: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        };
        self.error = None;
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Welcome Back",
            AuthMode::SignUp => "Create Account",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match (self.mode, self.submitting) {
            (AuthMode::Login, false) => "Sign In",
            (AuthMode::Login, true) => "Signing In...",
            (AuthMode::SignUp, false) => "Create Account",
            (AuthMode::SignUp, true) => "Creating Account...",
        }
    }

    pub fn toggle_prompt(&self) -> &'static str {
        match self.mode {
            AuthMode::Login => "Don't have an account? Sign Up",
            AuthMode::SignUp => "Already have an account? Sign In",
        }
    }

    /// Criteria are re-evaluated on every keystroke.
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
        self.criteria = PasswordCriteria::evaluate(&self.password);
    }

    pub fn password_len(&self) -> usize {
        self.password.chars().count()
    }

    /// Password as shown in the field.
    pub fn password_display(&self) -> String {
        if self.show_password {
            self.password.clone()
        } else {
            "•".repeat(self.password_len())
        }
    }

    pub fn toggle_show_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn criteria(&self) -> PasswordCriteria {
        self.criteria
    }

    pub fn strength(&self) -> u8 {
        self.criteria.strength()
    }

    /// Criteria checklist, shown in sign-up mode only.
    pub fn criteria_checklist(&self) -> Vec<(&'static str, bool)> {
        if self.mode == AuthMode::Login {
            return Vec::new();
        }
        vec![
            ("At least 8 characters", self.criteria.has_min_length),
            ("At least one uppercase letter", self.criteria.has_uppercase),
            ("At least one number", self.criteria.has_number),
            ("At least one special character", self.criteria.has_special_char),
        ]
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Begin a submit. Local validation failures are stored as the inline
    /// error and `None` is returned; nothing should be sent in that case.
    pub fn begin_submit(&mut self) -> Option<AuthSubmission> {
        if self.submitting {
            return None;
        }
        self.error = None;

        let submission = match self.mode {
            AuthMode::Login => {
                AuthSubmission::SignIn(Credentials::new(self.email.trim(), self.password.clone()))
            }
            AuthMode::SignUp => {
                let request = SignUpRequest::new(
                    self.email.trim(),
                    self.password.clone(),
                    self.full_name.trim(),
                    self.phone.trim(),
                );
                if let Err(err) = validate_sign_up(&request) {
                    self.error = Some(err.to_string());
                    return None;
                }
                AuthSubmission::SignUp(request)
            }
        };
        self.submitting = true;
        Some(submission)
    }

    /// End a submit, recording the failure message if there was one.
    pub fn finish_submit(&mut self, error: Option<String>) {
        self.submitting = false;
        self.error = error;
    }
}
