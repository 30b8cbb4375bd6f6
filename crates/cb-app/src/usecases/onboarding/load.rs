use std::sync::Arc;

use cb_core::onboarding::{self, ONBOARDING_COMPLETE_KEY};
use cb_core::ports::LocalStoragePort;
use tracing::warn;

/// Read the persisted onboarding flag.
pub struct LoadOnboardingFlag {
    storage: Arc<dyn LocalStoragePort>,
}

impl LoadOnboardingFlag {
    pub fn new(storage: Arc<dyn LocalStoragePort>) -> Self {
        Self { storage }
    }

    pub fn from_ports(storage: Arc<dyn LocalStoragePort>) -> Self {
        Self::new(storage)
    }

    /// An unreadable store reads as "not complete"; onboarding is shown again
    /// rather than blocking startup.
    pub async fn execute(&self) -> bool {
        match self.storage.get_item(ONBOARDING_COMPLETE_KEY).await {
            Ok(value) => onboarding::is_complete(value.as_deref()),
            Err(err) => {
                warn!(error = %err, "failed to read onboarding flag, assuming incomplete");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::onboarding::test_support::{reading, MockLocalStorage};
    use cb_core::ports::StorageError;

    #[tokio::test]
    async fn test_missing_flag_reads_as_incomplete() {
        let storage = reading(ONBOARDING_COMPLETE_KEY, None);
        let use_case = LoadOnboardingFlag::new(Arc::new(storage));
        assert!(!use_case.execute().await);
    }

    #[tokio::test]
    async fn test_true_flag_reads_as_complete() {
        let storage = reading(ONBOARDING_COMPLETE_KEY, Some("true"));
        let use_case = LoadOnboardingFlag::from_ports(Arc::new(storage));
        assert!(use_case.execute().await);
    }

    #[tokio::test]
    async fn test_other_values_read_as_incomplete() {
        let storage = reading(ONBOARDING_COMPLETE_KEY, Some("yes"));
        assert!(!LoadOnboardingFlag::new(Arc::new(storage)).execute().await);
    }

    #[tokio::test]
    async fn test_read_failure_reads_as_incomplete() {
        let mut storage = MockLocalStorage::new();
        storage
            .expect_get_item()
            .returning(|_| Err(StorageError::Io("disk unplugged".into())));
        assert!(!LoadOnboardingFlag::new(Arc::new(storage)).execute().await);
    }
}
