use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use cb_core::dashboard::{DashboardTab, WalletSummary};
use cb_core::identity::Identity;
use tokio::sync::watch;
use tracing::{debug, error, info, info_span, Instrument};

use crate::usecases::auth::AuthError;
use crate::usecases::{FetchWalletSummary, SignOut};

/// Wallet fetch status as seen by the tab views.
///
/// `summary == None` with `loading == false` means "no data"; views render
/// zeros for it.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletLoad {
    pub loading: bool,
    pub summary: Option<WalletSummary>,
}

impl WalletLoad {
    fn in_flight() -> Self {
        Self {
            loading: true,
            summary: None,
        }
    }
}

/// Lives while the gate resolves to the dashboard.
///
/// Mounting issues exactly one wallet fetch. Tab changes never refetch. The
/// shell never navigates; sign-out is observed by the gate.
pub struct DashboardShell {
    identity: Identity,
    selected_tab: Mutex<DashboardTab>,
    wallet: Arc<watch::Sender<WalletLoad>>,
    mounted: Arc<AtomicBool>,
    sign_out: Arc<SignOut>,
}

impl DashboardShell {
    /// Mount for `identity` and start the wallet fetch.
    ///
    /// Must be called from within a tokio runtime.
    pub fn mount(
        identity: Identity,
        initial_tab: DashboardTab,
        fetch_wallet: Arc<FetchWalletSummary>,
        sign_out: Arc<SignOut>,
    ) -> Arc<Self> {
        let (wallet, _) = watch::channel(WalletLoad::in_flight());
        let shell = Arc::new(Self {
            identity,
            selected_tab: Mutex::new(initial_tab),
            wallet: Arc::new(wallet),
            mounted: Arc::new(AtomicBool::new(true)),
            sign_out,
        });

        let wallet = shell.wallet.clone();
        let mounted = shell.mounted.clone();
        let user_id = shell.identity.id.clone();
        let span = info_span!("dashboard.wallet_fetch", user_id = %user_id);
        tokio::spawn(
            async move {
                let result = fetch_wallet.execute(&user_id).await;
                if !mounted.load(Ordering::Acquire) {
                    debug!("dashboard unmounted before wallet fetch finished, discarding result");
                    return;
                }
                let summary = match result {
                    Ok(summary) => summary,
                    Err(err) => {
                        error!(error = %err, "failed to fetch wallet summary");
                        None
                    }
                };
                wallet.send_replace(WalletLoad {
                    loading: false,
                    summary,
                });
            }
            .instrument(span),
        );

        info!(user_id = %shell.identity.id, tab = %initial_tab, "dashboard mounted");
        shell
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn selected_tab(&self) -> DashboardTab {
        *self
            .selected_tab
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn select_tab(&self, tab: DashboardTab) {
        let mut selected = self
            .selected_tab
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = *selected;
        if previous != tab {
            debug!(from = %previous, to = %tab, "tab selected");
            *selected = tab;
        }
    }

    pub fn wallet(&self) -> WalletLoad {
        self.wallet.borrow().clone()
    }

    pub fn subscribe_wallet(&self) -> watch::Receiver<WalletLoad> {
        self.wallet.subscribe()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Late fetch results are discarded after this.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            info!(user_id = %self.identity.id, "dashboard unmounted");
        }
    }

    /// Ask the backend to end the session. Routing is left to the gate.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.sign_out.execute().await
    }
}

impl Drop for DashboardShell {
    fn drop(&mut self) {
        self.unmount();
    }
}
