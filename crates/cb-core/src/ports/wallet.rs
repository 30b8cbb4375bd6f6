use async_trait::async_trait;

use crate::dashboard::WalletSummary;
use crate::ids::UserId;
use crate::ports::errors::GatewayError;

/// Read access to the per-user wallet row.
#[async_trait]
pub trait WalletSummaryPort: Send + Sync {
    /// `Ok(None)` when the user has no wallet row.
    async fn fetch_summary(&self, user_id: &UserId) -> Result<Option<WalletSummary>, GatewayError>;
}
