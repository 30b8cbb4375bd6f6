use std::sync::Arc;

use cb_core::identity::{Credentials, Identity};
use cb_core::ports::IdentityGatewayPort;
use tracing::{info, info_span, warn, Instrument};

use super::AuthError;

/// Sign in with email and password.
pub struct SignIn {
    gateway: Arc<dyn IdentityGatewayPort>,
}

impl SignIn {
    pub fn new(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self { gateway }
    }

    pub fn from_ports(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self::new(gateway)
    }

    pub async fn execute(&self, credentials: &Credentials) -> Result<Identity, AuthError> {
        let span = info_span!("usecase.auth.sign_in", email = %credentials.email);
        async {
            match self.gateway.sign_in(credentials).await {
                Ok(identity) => {
                    info!(user_id = %identity.id, "signed in");
                    Ok(identity)
                }
                Err(err) => {
                    warn!(error = %err, "sign in rejected");
                    Err(err.into())
                }
            }
        }
        .instrument(span)
        .await
    }
}
