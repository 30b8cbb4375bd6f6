//! Persisted backend session.

use std::sync::Arc;

use cb_core::identity::Identity;
use cb_core::ports::{GatewayError, LocalStoragePort, StorageError};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::warn;

/// Local-storage key holding the serialized session.
pub const SESSION_STORAGE_KEY: &str = "cryptobill.auth.session";

#[derive(Clone, Serialize, Deserialize)]
pub(crate) struct StoredSession {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Identity,
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("user", &self.user.id)
            .finish_non_exhaustive()
    }
}

/// Session cache backed by local storage, shared by the identity gateway
/// and the wallet repository.
pub struct SessionStore {
    storage: Arc<dyn LocalStoragePort>,
    cached: Mutex<Option<Option<StoredSession>>>,
}

fn storage_error(err: StorageError) -> GatewayError {
    GatewayError::Unavailable(format!("local session store: {err}"))
}

impl SessionStore {
    pub fn new(storage: Arc<dyn LocalStoragePort>) -> Self {
        Self {
            storage,
            cached: Mutex::new(None),
        }
    }

    pub(crate) async fn load(&self) -> Result<Option<StoredSession>, GatewayError> {
        let mut cached = self.cached.lock().await;
        if let Some(session) = cached.as_ref() {
            return Ok(session.clone());
        }

        let raw = self
            .storage
            .get_item(SESSION_STORAGE_KEY)
            .await
            .map_err(storage_error)?;
        let session = match raw {
            None => None,
            Some(raw) => match serde_json::from_str::<StoredSession>(&raw) {
                Ok(session) => Some(session),
                Err(err) => {
                    warn!(error = %err, "discarding unreadable stored session");
                    self.storage
                        .remove_item(SESSION_STORAGE_KEY)
                        .await
                        .map_err(storage_error)?;
                    None
                }
            },
        };
        *cached = Some(session.clone());
        Ok(session)
    }

    pub(crate) async fn save(&self, session: StoredSession) -> Result<(), GatewayError> {
        let mut cached = self.cached.lock().await;
        let json = serde_json::to_string(&session)
            .map_err(|e| GatewayError::Unavailable(format!("serialize session: {e}")))?;
        self.storage
            .set_item(SESSION_STORAGE_KEY, &json)
            .await
            .map_err(storage_error)?;
        *cached = Some(Some(session));
        Ok(())
    }

    pub(crate) async fn clear(&self) -> Result<(), GatewayError> {
        let mut cached = self.cached.lock().await;
        self.storage
            .remove_item(SESSION_STORAGE_KEY)
            .await
            .map_err(storage_error)?;
        *cached = Some(None);
        Ok(())
    }

    /// Bearer token for row access: the session token, or the anon key when
    /// signed out.
    pub(crate) async fn access_token(&self) -> Result<Option<String>, GatewayError> {
        Ok(self.load().await?.map(|session| session.access_token))
    }
}
