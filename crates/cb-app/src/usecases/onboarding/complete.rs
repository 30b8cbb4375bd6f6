use std::sync::Arc;

use cb_core::onboarding::{ONBOARDING_COMPLETE_KEY, ONBOARDING_COMPLETE_VALUE};
use cb_core::ports::{LocalStoragePort, StorageError};
use tracing::info;

/// Durably mark onboarding as complete. Safe to call repeatedly.
pub struct CompleteOnboarding {
    storage: Arc<dyn LocalStoragePort>,
}

impl CompleteOnboarding {
    pub fn new(storage: Arc<dyn LocalStoragePort>) -> Self {
        Self { storage }
    }

    pub fn from_ports(storage: Arc<dyn LocalStoragePort>) -> Self {
        Self::new(storage)
    }

    pub async fn execute(&self) -> Result<(), StorageError> {
        self.storage
            .set_item(ONBOARDING_COMPLETE_KEY, ONBOARDING_COMPLETE_VALUE)
            .await?;
        info!("onboarding marked complete");
        Ok(())
    }
}
