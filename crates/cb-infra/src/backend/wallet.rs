use std::sync::Arc;

use async_trait::async_trait;
use cb_core::dashboard::WalletSummary;
use cb_core::ids::UserId;
use cb_core::ports::{GatewayError, WalletSummaryPort};
use reqwest::Method;
use tracing::{debug, info_span, Instrument};

use super::client::{decode, BackendClient};
use super::session::SessionStore;

/// Reads the `wallets` table through the row API.
pub struct RestWalletRepository {
    client: BackendClient,
    sessions: Arc<SessionStore>,
}

impl RestWalletRepository {
    pub fn new(client: BackendClient, sessions: Arc<SessionStore>) -> Self {
        Self { client, sessions }
    }
}

#[async_trait]
impl WalletSummaryPort for RestWalletRepository {
    async fn fetch_summary(&self, user_id: &UserId) -> Result<Option<WalletSummary>, GatewayError> {
        let span = info_span!("infra.backend.fetch_wallet", user_id = %user_id);
        async {
            let token = match self.sessions.access_token().await? {
                Some(token) => token,
                None => self.client.anon_key().to_string(),
            };
            let request = self
                .client
                .request(Method::GET, "/rest/v1/wallets")
                .query(&[
                    ("user_id", format!("eq.{}", user_id.as_str())),
                    ("select", "*".to_string()),
                ])
                .bearer_auth(token);
            let response = self.client.send(request).await?;
            let rows: Vec<WalletSummary> = decode(response).await?;
            debug!(rows = rows.len(), "wallet rows received");
            Ok(rows.into_iter().next())
        }
        .instrument(span)
        .await
    }
}
