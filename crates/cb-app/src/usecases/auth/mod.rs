//! Authentication use cases.

mod current_identity;
mod sign_in;
mod sign_out;
mod sign_up;

pub use current_identity::GetCurrentIdentity;
pub use sign_in::SignIn;
pub use sign_out::SignOut;
pub use sign_up::SignUp;

use cb_core::ports::GatewayError;
use cb_core::ValidationError;

/// Errors surfaced by the authentication flow.
///
/// Both variants are displayed inline; neither is inspected for control flow.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl AuthError {
    pub fn display_message(&self) -> String {
        match self {
            AuthError::Validation(err) => err.to_string(),
            AuthError::Gateway(err) => err.display_message(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use cb_core::identity::{Credentials, Identity, SignUpRequest};
    use cb_core::ports::{GatewayError, IdentityGatewayPort};
    use cb_core::session::SessionSubscription;

    mockall::mock! {
        pub Gateway {}

        #[async_trait]
        impl IdentityGatewayPort for Gateway {
            async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, GatewayError>;
            async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError>;
            async fn sign_out(&self) -> Result<(), GatewayError>;
            async fn current_identity(&self) -> Result<Option<Identity>, GatewayError>;
            fn subscribe_session_changes(&self) -> SessionSubscription;
        }
    }
}
