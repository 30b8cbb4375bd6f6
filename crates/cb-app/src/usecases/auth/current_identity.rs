use std::sync::Arc;

use cb_core::identity::Identity;
use cb_core::ports::{GatewayError, IdentityGatewayPort};
use cb_core::session::SessionSubscription;
use tracing::{debug, info_span, Instrument};

/// Look up the signed-in identity and observe session transitions.
pub struct GetCurrentIdentity {
    gateway: Arc<dyn IdentityGatewayPort>,
}

impl GetCurrentIdentity {
    pub fn new(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self { gateway }
    }

    pub fn from_ports(gateway: Arc<dyn IdentityGatewayPort>) -> Self {
        Self::new(gateway)
    }

    /// `Ok(None)` when nobody is signed in.
    pub async fn execute(&self) -> Result<Option<Identity>, GatewayError> {
        let span = info_span!("usecase.auth.current_identity");
        async {
            let identity = self.gateway.current_identity().await?;
            debug!(signed_in = identity.is_some(), "current identity resolved");
            Ok(identity)
        }
        .instrument(span)
        .await
    }

    pub fn subscribe(&self) -> SessionSubscription {
        self.gateway.subscribe_session_changes()
    }
}
