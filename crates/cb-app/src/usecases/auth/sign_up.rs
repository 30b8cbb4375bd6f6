use std::sync::Arc;

use cb_core::identity::{Identity, SignUpRequest};
use cb_core::ports::IdentityGatewayPort;
use cb_core::validation::validate_sign_up;
use tracing::{info, info_span, warn, Instrument};

use super::AuthError;

/// Create an account.
///
/// The request is validated locally first; a request that fails validation
/// never reaches the gateway.
pub struct SignUp {
    gateway: Arc<dyn IdentityGatewayPort>,
}

impl SignUp {
    pub fn new(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self { gateway }
    }

    pub fn from_ports(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self::new(gateway)
    }

    pub async fn execute(&self, request: &SignUpRequest) -> Result<Identity, AuthError> {
        let span = info_span!("usecase.auth.sign_up", email = %request.email);
        async {
            if let Err(err) = validate_sign_up(request) {
                info!(error = %err, "sign up rejected by local validation");
                return Err(err.into());
            }

            match self.gateway.sign_up(request).await {
                Ok(identity) => {
                    info!(user_id = %identity.id, "account created");
                    Ok(identity)
                }
                Err(err) => {
                    warn!(error = %err, "sign up rejected");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::auth::test_support::MockGateway;
    use cb_core::ValidationError;

    #[tokio::test]
    async fn test_weak_password_makes_no_gateway_call() {
        let mut gateway = MockGateway::new();
        gateway.expect_sign_up().times(0);

        let use_case = SignUp::new(Arc::new(gateway));
        let err = use_case
            .execute(&SignUpRequest::new("a@b.co", "abc", "Ada", "+2348012345678"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AuthError::Validation(ValidationError::WeakPassword(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_phone_makes_no_gateway_call() {
        let mut gateway = MockGateway::new();
        gateway.expect_sign_up().times(0);

        let use_case = SignUp::new(Arc::new(gateway));
        let err = use_case
            .execute(&SignUpRequest::new("a@b.co", "Str0ng!pass", "Ada", "0801"))
            .await
            .unwrap_err();

        assert_eq!(err, AuthError::Validation(ValidationError::InvalidPhone));
        assert_eq!(err.display_message(), "Please enter a valid phone number");
    }

    #[tokio::test]
    async fn test_valid_request_is_forwarded_once() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_sign_up()
            .withf(|r| r.display_name == "Ada" && r.phone == "+2348012345678")
            .times(1)
            .returning(|r| Ok(Identity::new("u-9", r.email.clone()).with_display_name("Ada")));

        let use_case = SignUp::from_ports(Arc::new(gateway));
        let identity = use_case
            .execute(&SignUpRequest::new(
                "a@b.co",
                "Str0ng!pass",
                "Ada",
                "+2348012345678",
            ))
            .await
            .unwrap();

        assert_eq!(identity.display_name.as_deref(), Some("Ada"));
    }
}
