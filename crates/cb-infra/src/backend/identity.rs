use std::sync::Arc;

use async_trait::async_trait;
use cb_core::identity::{Credentials, Identity, SignUpRequest};
use cb_core::ports::{GatewayError, IdentityGatewayPort};
use cb_core::session::{SessionListeners, SessionSubscription};
use reqwest::{Method, StatusCode};
use tracing::{debug, info, info_span, warn, Instrument};

use super::client::{decode, service_error, BackendClient};
use super::dto::{
    PasswordGrant, RefreshGrant, SignUpBody, SignUpMetadata, TokenResponse, UserDto,
};
use super::session::{SessionStore, StoredSession};

/// Identity gateway over the `auth/v1` endpoints.
///
/// Publishes `Some(identity)` when a session is opened and `None` when it is
/// closed or can no longer be refreshed.
pub struct RestIdentityGateway {
    client: BackendClient,
    sessions: Arc<SessionStore>,
    listeners: SessionListeners,
}

impl RestIdentityGateway {
    pub fn new(client: BackendClient, sessions: Arc<SessionStore>) -> Self {
        Self {
            client,
            sessions,
            listeners: SessionListeners::new(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.listener_count()
    }

    async fn open_session(&self, tokens: TokenResponse) -> Result<Identity, GatewayError> {
        let identity = Identity::from(tokens.user);
        self.sessions
            .save(StoredSession {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                user: identity.clone(),
            })
            .await?;
        self.listeners.notify(Some(identity.clone()));
        Ok(identity)
    }

    async fn close_session(&self) -> Result<(), GatewayError> {
        self.sessions.clear().await?;
        self.listeners.notify(None);
        Ok(())
    }

    /// Exchange the refresh token. `Ok(None)` means the session is gone.
    async fn refresh(&self, session: &StoredSession) -> Result<Option<Identity>, GatewayError> {
        let request = self
            .client
            .request(Method::POST, "/auth/v1/token?grant_type=refresh_token")
            .json(&RefreshGrant {
                refresh_token: &session.refresh_token,
            });
        let response = self.client.send_raw(request).await?;

        let status = response.status();
        if status.is_client_error() {
            let err = service_error(response).await;
            warn!(error = %err, "session refresh rejected, signing out locally");
            self.close_session().await?;
            return Ok(None);
        }
        if !status.is_success() {
            return Err(service_error(response).await);
        }

        let tokens: TokenResponse = decode(response).await?;
        let identity = Identity::from(tokens.user);
        self.sessions
            .save(StoredSession {
                access_token: tokens.access_token,
                refresh_token: tokens.refresh_token,
                user: identity.clone(),
            })
            .await?;
        debug!(user_id = %identity.id, "session refreshed");
        Ok(Some(identity))
    }
}

#[async_trait]
impl IdentityGatewayPort for RestIdentityGateway {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, GatewayError> {
        let span = info_span!("infra.backend.sign_up");
        async {
            let body = SignUpBody {
                email: &request.email,
                password: request.password.expose(),
                data: SignUpMetadata {
                    full_name: &request.display_name,
                    phone_number: &request.phone,
                },
            };
            let response = self
                .client
                .send(self.client.request(Method::POST, "/auth/v1/signup").json(&body))
                .await?;

            // With email confirmation enabled the body is the bare user and
            // no session is issued.
            let value: serde_json::Value = decode(response).await?;
            if value.get("access_token").is_some() {
                let tokens: TokenResponse = serde_json::from_value(value).map_err(|e| {
                    GatewayError::Service(format!("unexpected response from server: {e}"))
                })?;
                return self.open_session(tokens).await;
            }

            let user_value = value.get("user").cloned().unwrap_or(value);
            let user: UserDto = serde_json::from_value(user_value).map_err(|e| {
                GatewayError::Service(format!("unexpected response from server: {e}"))
            })?;
            let identity = Identity::from(user);
            info!(user_id = %identity.id, "account created, awaiting confirmation");
            Ok(identity)
        }
        .instrument(span)
        .await
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError> {
        let span = info_span!("infra.backend.sign_in");
        async {
            let request = self
                .client
                .request(Method::POST, "/auth/v1/token?grant_type=password")
                .json(&PasswordGrant {
                    email: &credentials.email,
                    password: credentials.password.expose(),
                });
            let response = self.client.send(request).await?;
            let tokens: TokenResponse = decode(response).await?;
            self.open_session(tokens).await
        }
        .instrument(span)
        .await
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        let span = info_span!("infra.backend.sign_out");
        async {
            let Some(session) = self.sessions.load().await? else {
                return self.close_session().await;
            };

            let request = self
                .client
                .request(Method::POST, "/auth/v1/logout")
                .bearer_auth(&session.access_token);
            let response = self.client.send_raw(request).await?;

            // An already-invalid token means the remote session is gone too.
            let status = response.status();
            if !status.is_success() && status != StatusCode::UNAUTHORIZED {
                return Err(service_error(response).await);
            }
            self.close_session().await
        }
        .instrument(span)
        .await
    }

    async fn current_identity(&self) -> Result<Option<Identity>, GatewayError> {
        let span = info_span!("infra.backend.current_identity");
        async {
            let Some(session) = self.sessions.load().await? else {
                return Ok(None);
            };

            let request = self
                .client
                .request(Method::GET, "/auth/v1/user")
                .bearer_auth(&session.access_token);
            let response = self.client.send_raw(request).await?;

            match response.status() {
                status if status.is_success() => {
                    let user: UserDto = decode(response).await?;
                    Ok(Some(Identity::from(user)))
                }
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => self.refresh(&session).await,
                _ => Err(service_error(response).await),
            }
        }
        .instrument(span)
        .await
    }

    fn subscribe_session_changes(&self) -> SessionSubscription {
        self.listeners.subscribe()
    }
}
