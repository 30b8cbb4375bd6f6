//! File-backed local storage.
//!
//! All keys live in one JSON object on disk. Every write goes to a sibling
//! temp file, is synced, then renamed over the target, so readers see either
//! the old or the new map and never a partial one.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use cb_core::ports::{LocalStoragePort, StorageError};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, warn};

pub const DEFAULT_STORAGE_FILE: &str = "local_storage.json";

type Items = BTreeMap<String, String>;

pub struct FileLocalStorage {
    path: PathBuf,
    /// Serializes reads and read-modify-write cycles.
    lock: Mutex<()>,
}

impl FileLocalStorage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_STORAGE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(format!("create {}: {e}", parent.display())))?;
        }
        Ok(())
    }

    async fn read_items(&self) -> Result<Items, StorageError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Items::new()),
            Err(e) => {
                return Err(StorageError::Io(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };

        if content.trim().is_empty() {
            return Ok(Items::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| StorageError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    /// Current map for a write. A corrupt file is replaced rather than
    /// blocking every later write.
    async fn read_items_for_update(&self) -> Result<Items, StorageError> {
        match self.read_items().await {
            Err(StorageError::Corrupt(reason)) => {
                warn!(%reason, "local storage unreadable, starting from an empty map");
                Ok(Items::new())
            }
            other => other,
        }
    }

    async fn write_items(&self, items: &Items) -> Result<(), StorageError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StorageError::Corrupt(format!("serialize: {e}")))?;

        let tmp_path = self.path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp_path)
            .await
            .map_err(|e| StorageError::Io(format!("create {}: {e}", tmp_path.display())))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| StorageError::Io(format!("write {}: {e}", tmp_path.display())))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::Io(format!("sync {}: {e}", tmp_path.display())))?;
        drop(file);

        fs::rename(&tmp_path, &self.path).await.map_err(|e| {
            StorageError::Io(format!(
                "rename {} -> {}: {e}",
                tmp_path.display(),
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), keys = items.len(), "local storage written");
        Ok(())
    }
}

#[async_trait]
impl LocalStoragePort for FileLocalStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_items().await?.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items_for_update().await?;
        if items.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        items.insert(key.to_string(), value.to_string());
        self.write_items(&items).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_items_for_update().await?;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write_items(&items).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_item_returns_none_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::new(temp_dir.path().join("missing.json"));

        assert_eq!(storage.get_item("onboardingComplete").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_survive_a_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/storage.json");

        FileLocalStorage::new(path.clone())
            .set_item("onboardingComplete", "true")
            .await
            .unwrap();

        let reopened = FileLocalStorage::new(path);
        assert_eq!(
            reopened.get_item("onboardingComplete").await.unwrap(),
            Some("true".to_string())
        );
    }

    #[tokio::test]
    async fn test_keys_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileLocalStorage::with_defaults(temp_dir.path().to_path_buf());

        storage.set_item("a", "1").await.unwrap();
        storage.set_item("b", "2").await.unwrap();
        storage.remove_item("a").await.unwrap();

        assert_eq!(storage.get_item("a").await.unwrap(), None);
        assert_eq!(storage.get_item("b").await.unwrap(), Some("2".to_string()));
        assert!(storage.path().ends_with(DEFAULT_STORAGE_FILE));
    }

    #[tokio::test]
    async fn test_remove_missing_key_does_not_create_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let storage = FileLocalStorage::new(path.clone());

        storage.remove_item("nothing").await.unwrap();

        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "  \n").unwrap();

        let storage = FileLocalStorage::new(path);
        assert_eq!(storage.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileLocalStorage::new(path);
        assert!(matches!(
            storage.get_item("k").await,
            Err(StorageError::Corrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_write_replaces_truncated_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, r#"{"onboardingComplete": "tr"#).unwrap();

        let storage = FileLocalStorage::new(path.clone());
        storage.set_item("onboardingComplete", "true").await.unwrap();
        storage
            .set_item("cryptobill.auth.session", r#"{"access_token":"a"}"#)
            .await
            .unwrap();

        let reopened = FileLocalStorage::new(path);
        assert_eq!(
            reopened.get_item("onboardingComplete").await.unwrap(),
            Some("true".to_string())
        );
        assert!(reopened
            .get_item("cryptobill.auth.session")
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_remove_recovers_from_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{not json").unwrap();

        let storage = FileLocalStorage::new(path.clone());
        storage.remove_item("cryptobill.auth.session").await.unwrap();
        storage.set_item("k", "v").await.unwrap();

        assert_eq!(storage.get_item("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn test_write_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        let storage = FileLocalStorage::new(path.clone());

        storage.set_item("k", "v").await.unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_reads_never_miss_a_persisted_key_during_writes() {
        let temp_dir = TempDir::new().unwrap();
        let storage = std::sync::Arc::new(FileLocalStorage::new(
            temp_dir.path().join("storage.json"),
        ));
        storage.set_item("onboardingComplete", "true").await.unwrap();

        let writer = {
            let storage = storage.clone();
            tokio::spawn(async move {
                for i in 0..200 {
                    storage.set_item("counter", &i.to_string()).await.unwrap();
                }
            })
        };

        for _ in 0..500 {
            assert_eq!(
                storage.get_item("onboardingComplete").await.unwrap(),
                Some("true".to_string())
            );
        }
        writer.await.unwrap();
    }
}
