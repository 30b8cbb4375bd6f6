//! Identity gateway port.
//!
//! Wraps the backend's authentication capability: four request/response
//! calls plus a session-change stream. Implementations add no validation of
//! their own.

use async_trait::async_trait;

use crate::identity::{Credentials, Identity, SignUpRequest};
use crate::ports::errors::GatewayError;
use crate::session::SessionSubscription;

#[async_trait]
pub trait IdentityGatewayPort: Send + Sync {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, GatewayError>;

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError>;

    async fn sign_out(&self) -> Result<(), GatewayError>;

    /// `Ok(None)` when nobody is signed in.
    async fn current_identity(&self) -> Result<Option<Identity>, GatewayError>;

    /// Register for session transitions.
    ///
    /// Delivery order relative to the result of an in-flight `sign_in` /
    /// `sign_out` is unspecified.
    fn subscribe_session_changes(&self) -> SessionSubscription;
}

#[cfg(test)]
mockall::mock! {
    pub IdentityGateway {}

    #[async_trait]
    impl IdentityGatewayPort for IdentityGateway {
        async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, GatewayError>;
        async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError>;
        async fn sign_out(&self) -> Result<(), GatewayError>;
        async fn current_identity(&self) -> Result<Option<Identity>, GatewayError>;
        fn subscribe_session_changes(&self) -> SessionSubscription;
    }
}
