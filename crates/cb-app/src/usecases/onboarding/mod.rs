//! Onboarding flag use cases.

mod complete;
mod load;

pub use complete::CompleteOnboarding;
pub use load::LoadOnboardingFlag;

#[cfg(test)]
pub(crate) mod test_support {
    use async_trait::async_trait;
    use cb_core::ports::{LocalStoragePort, StorageError};

    mockall::mock! {
        pub LocalStorage {}

        #[async_trait]
        impl LocalStoragePort for LocalStorage {
            async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
            async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
            async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
        }
    }

    /// Storage whose `get_item` answers `value` for `key`.
    pub fn reading(key: &'static str, value: Option<&'static str>) -> MockLocalStorage {
        let mut storage = MockLocalStorage::new();
        storage
            .expect_get_item()
            .withf(move |k| k == key)
            .returning(move |_| Ok(value.map(str::to_string)));
        storage
    }
}
