use std::sync::Arc;

use cb_core::ports::IdentityGatewayPort;
use tracing::{info, info_span, warn, Instrument};

use super::AuthError;

/// End the current session.
pub struct SignOut {
    gateway: Arc<dyn IdentityGatewayPort>,
}

impl SignOut {
    pub fn new(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self { gateway }
    }

    pub fn from_ports(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self::new(gateway)
    }

    pub async fn execute(&self) -> Result<(), AuthError> {
        async {
            self.gateway.sign_out().await.map_err(|err| {
                warn!(error = %err, "sign out failed");
                AuthError::from(err)
            })?;
            info!("signed out");
            Ok(())
        }
        .instrument(info_span!("usecase.auth.sign_out"))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::auth::test_support::MockGateway;
    use cb_core::ports::GatewayError;

    #[tokio::test]
    async fn test_execute_propagates_failure() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_sign_out()
            .times(1)
            .returning(|| Err(GatewayError::Unavailable("timeout".into())));

        let use_case = SignOut::new(Arc::new(gateway));
        assert!(matches!(
            use_case.execute().await,
            Err(AuthError::Gateway(GatewayError::Unavailable(_)))
        ));
    }
}
