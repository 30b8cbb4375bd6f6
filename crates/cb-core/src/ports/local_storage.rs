//! Durable client-local key-value storage.

use async_trait::async_trait;

use crate::ports::errors::StorageError;

/// String-keyed, string-valued store that survives restarts.
#[async_trait]
pub trait LocalStoragePort: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrites any existing value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
