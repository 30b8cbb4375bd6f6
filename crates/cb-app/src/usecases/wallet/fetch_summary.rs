use std::sync::Arc;

use cb_core::dashboard::WalletSummary;
use cb_core::ids::UserId;
use cb_core::ports::{GatewayError, WalletSummaryPort};
use tracing::{debug, info_span, Instrument};

/// Fetch the wallet row for a user.
pub struct FetchWalletSummary {
    wallets: Arc<dyn WalletSummaryPort>,
}

impl FetchWalletSummary {
    pub fn new(wallets: Arc<dyn WalletSummaryPort>) -> Self {
        Self { wallets }
    }

    pub fn from_ports(wallets: Arc<dyn WalletSummaryPort>) -> Self {
        Self::new(wallets)
    }

    pub async fn execute(&self, user_id: &UserId) -> Result<Option<WalletSummary>, GatewayError> {
        let span = info_span!("usecase.wallet.fetch_summary", user_id = %user_id);
        async {
            let summary = self.wallets.fetch_summary(user_id).await?;
            debug!(found = summary.is_some(), "wallet summary fetched");
            Ok(summary)
        }
        .instrument(span)
        .await
    }
}
