use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex as StdMutex};

use cb_core::dashboard::DashboardTab;
use cb_core::identity::{Credentials, SignUpRequest};
use cb_core::ports::{IdentityGatewayPort, LocalStoragePort, WalletSummaryPort};
use cb_core::session::{
    GateSnapshot, IdentityState, NavigationDecision, PublishedChange, Route, SessionSequence,
    SessionSubscription,
};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, info_span, warn, Instrument};

use super::GateError;
use crate::dashboard::DashboardShell;
use crate::usecases::{
    CompleteOnboarding, FetchWalletSummary, GetCurrentIdentity, LoadOnboardingFlag, SignIn,
    SignOut, SignUp,
};

/// Ports the gate is built from.
#[derive(Clone)]
pub struct GatePorts {
    pub gateway: Arc<dyn IdentityGatewayPort>,
    pub wallets: Arc<dyn WalletSummaryPort>,
    pub storage: Arc<dyn LocalStoragePort>,
}

struct GateState {
    snapshot: GateSnapshot,
    /// Publication counter of the gateway's session notifications. An
    /// awaited result is stale once anything was published after its
    /// operation began.
    published: Option<SessionSequence>,
    /// Newest notification already folded into `snapshot`.
    applied_sequence: u64,
    dashboard: Option<Arc<DashboardShell>>,
}

struct GateInner {
    state: Mutex<GateState>,
    decisions: watch::Sender<NavigationDecision>,
    load_onboarding: LoadOnboardingFlag,
    complete_onboarding: CompleteOnboarding,
    current_identity: GetCurrentIdentity,
    sign_in: SignIn,
    sign_up: SignUp,
    sign_out: Arc<SignOut>,
    fetch_wallet: Arc<FetchWalletSummary>,
}

/// Decides between loading, onboarding, auth and dashboard.
///
/// Construct with [`SessionGate::new`], then call [`SessionGate::start`]
/// once. The decision stays `Loading` until the first identity resolution.
pub struct SessionGate {
    inner: Arc<GateInner>,
    started: AtomicBool,
    listener: StdMutex<Option<JoinHandle<()>>>,
}

impl SessionGate {
    pub fn new(ports: GatePorts) -> Self {
        let (decisions, _) = watch::channel(NavigationDecision::Loading);
        let inner = GateInner {
            state: Mutex::new(GateState {
                snapshot: GateSnapshot::new(false, IdentityState::Pending, Route::Root),
                published: None,
                applied_sequence: 0,
                dashboard: None,
            }),
            decisions,
            load_onboarding: LoadOnboardingFlag::from_ports(ports.storage.clone()),
            complete_onboarding: CompleteOnboarding::from_ports(ports.storage),
            current_identity: GetCurrentIdentity::from_ports(ports.gateway.clone()),
            sign_in: SignIn::from_ports(ports.gateway.clone()),
            sign_up: SignUp::from_ports(ports.gateway.clone()),
            sign_out: Arc::new(SignOut::from_ports(ports.gateway)),
            fetch_wallet: Arc::new(FetchWalletSummary::from_ports(ports.wallets)),
        };

        Self {
            inner: Arc::new(inner),
            started: AtomicBool::new(false),
            listener: StdMutex::new(None),
        }
    }

    /// Load the onboarding flag, subscribe to session changes and resolve
    /// the current identity.
    ///
    /// The subscription is registered before the lookup is issued so no
    /// transition can fall between the two.
    pub async fn start(&self) -> Result<NavigationDecision, GateError> {
        let span = info_span!("gate.start");
        async {
            if self.started.swap(true, Ordering::AcqRel) {
                return Err(GateError::AlreadyStarted);
            }
            let subscription = self.inner.current_identity.subscribe();
            self.inner.state.lock().await.published = Some(subscription.sequence());

            let onboarding_complete = self.inner.load_onboarding.execute().await;
            {
                let mut state = self.inner.state.lock().await;
                state.snapshot.onboarding_complete = onboarding_complete;
                self.inner.reevaluate(&mut state);
            }
            debug!(onboarding_complete, "onboarding flag loaded");

            let task = tokio::spawn(
                GateInner::listen(self.inner.clone(), subscription)
                    .instrument(info_span!("gate.session_listener")),
            );
            *self.lock_listener() = Some(task);

            let epoch = self.inner.published_sequence().await;
            let identity = match self.inner.current_identity.execute().await {
                Ok(identity) => identity,
                Err(err) => {
                    warn!(error = %err, "startup identity lookup failed, continuing signed out");
                    None
                }
            };

            Ok(self
                .inner
                .reconcile(epoch, IdentityState::from(identity), "startup")
                .await)
        }
        .instrument(span)
        .await
    }

    /// Current resolved decision. Never a redirect.
    pub fn decision(&self) -> NavigationDecision {
        self.inner.decisions.borrow().clone()
    }

    pub fn subscribe_decisions(&self) -> watch::Receiver<NavigationDecision> {
        self.inner.decisions.subscribe()
    }

    pub async fn snapshot(&self) -> GateSnapshot {
        self.inner.state.lock().await.snapshot.clone()
    }

    pub async fn route(&self) -> Route {
        self.inner.state.lock().await.snapshot.route.clone()
    }

    /// The mounted dashboard, if the gate currently shows it.
    pub async fn dashboard(&self) -> Option<Arc<DashboardShell>> {
        self.inner.state.lock().await.dashboard.clone()
    }

    /// Request a path. Redirects rewrite the stored route.
    pub async fn navigate(&self, path: &str) -> NavigationDecision {
        let route = Route::parse(path);
        let mut state = self.inner.state.lock().await;
        debug!(requested = %route, "navigation requested");
        state.snapshot.route = route;
        self.inner.reevaluate(&mut state)
    }

    /// Switch dashboard tabs. Only valid while the dashboard is shown.
    pub async fn select_tab(&self, tab: DashboardTab) -> Result<NavigationDecision, GateError> {
        let mut state = self.inner.state.lock().await;
        if state.dashboard.is_none() {
            return Err(GateError::NotOnDashboard);
        }
        state.snapshot.route = Route::Dashboard(tab);
        Ok(self.inner.reevaluate(&mut state))
    }

    /// Persist the onboarding flag and re-evaluate. Idempotent.
    pub async fn complete_onboarding(&self) -> Result<NavigationDecision, GateError> {
        let span = info_span!("gate.complete_onboarding");
        async {
            self.inner.complete_onboarding.execute().await?;
            let mut state = self.inner.state.lock().await;
            state.snapshot.onboarding_complete = true;
            Ok(self.inner.reevaluate(&mut state))
        }
        .instrument(span)
        .await
    }

    /// Sign in. On failure the identity is left as it was.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<NavigationDecision, GateError> {
        let epoch = self.inner.published_sequence().await;
        let identity = self.inner.sign_in.execute(credentials).await?;
        Ok(self
            .inner
            .reconcile(epoch, IdentityState::Authenticated(identity), "sign_in")
            .await)
    }

    /// Create an account. Validation failures never reach the gateway.
    ///
    /// The backend may create the account without opening a session (email
    /// confirmation), so the resulting identity is confirmed with a lookup.
    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<NavigationDecision, GateError> {
        let epoch = self.inner.published_sequence().await;
        let created = self.inner.sign_up.execute(request).await?;

        match self.inner.current_identity.execute().await {
            Ok(session) => {
                if session.is_none() {
                    info!(user_id = %created.id, "account created without a session");
                }
                Ok(self
                    .inner
                    .reconcile(epoch, IdentityState::from(session), "sign_up")
                    .await)
            }
            Err(err) => {
                warn!(error = %err, "could not confirm session after sign up");
                Ok(self.decision())
            }
        }
    }

    /// Sign out through the dashboard shell.
    ///
    /// On failure the user stays on the dashboard with the identity unchanged.
    pub async fn sign_out(&self) -> Result<NavigationDecision, GateError> {
        let shell = self.dashboard().await.ok_or(GateError::NotOnDashboard)?;
        let epoch = self.inner.published_sequence().await;
        shell.sign_out().await?;
        Ok(self
            .inner
            .reconcile(epoch, IdentityState::Anonymous, "sign_out")
            .await)
    }

    /// Stop listening for session changes and unmount the dashboard.
    ///
    /// The subscription is released before this returns.
    pub async fn shutdown(&self) {
        let handle = self.lock_listener().take();
        if let Some(handle) = handle {
            handle.abort();
            // Cancellation drops the listener future and with it the
            // subscription.
            let _ = handle.await;
        }
        if let Some(shell) = self.inner.state.lock().await.dashboard.take() {
            shell.unmount();
        }
        info!("session gate shut down");
    }

    fn lock_listener(&self) -> std::sync::MutexGuard<'_, Option<JoinHandle<()>>> {
        self.listener
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for SessionGate {
    fn drop(&mut self) {
        if let Some(handle) = self.lock_listener().take() {
            handle.abort();
        }
    }
}

impl GateInner {
    async fn listen(inner: Arc<GateInner>, mut subscription: SessionSubscription) {
        while let Some(published) = subscription.recv_published().await {
            inner.apply_session_change(published).await;
        }
        debug!("session change stream closed");
    }

    async fn apply_session_change(&self, published: PublishedChange) {
        let mut state = self.state.lock().await;
        if published.sequence <= state.applied_sequence {
            debug!(sequence = published.sequence, "session change already applied");
            return;
        }
        debug!(
            signed_in = published.change.is_some(),
            sequence = published.sequence,
            "session change received"
        );
        state.applied_sequence = published.sequence;
        self.apply_identity(&mut state, IdentityState::from(published.change));
    }

    /// Publication number to compare an awaited result against.
    async fn published_sequence(&self) -> u64 {
        let state = self.state.lock().await;
        state.published.as_ref().map_or(0, SessionSequence::current)
    }

    /// Apply an awaited result unless the gateway published a session change
    /// after the operation began. In that case the newest published change
    /// wins, even if its delivery is still queued.
    async fn reconcile(
        &self,
        started_at: u64,
        identity: IdentityState,
        source: &'static str,
    ) -> NavigationDecision {
        let mut state = self.state.lock().await;
        let latest = state.published.as_ref().and_then(SessionSequence::latest);
        match latest {
            Some(published) if published.sequence > started_at => {
                debug!(
                    source,
                    sequence = published.sequence,
                    "session changed while request was in flight, using published identity"
                );
                if published.sequence > state.applied_sequence {
                    state.applied_sequence = published.sequence;
                    self.apply_identity(&mut state, IdentityState::from(published.change))
                } else {
                    self.reevaluate(&mut state)
                }
            }
            _ => self.apply_identity(&mut state, identity),
        }
    }

    fn apply_identity(&self, state: &mut GateState, identity: IdentityState) -> NavigationDecision {
        if state.snapshot.identity != identity {
            info!(
                was_pending = state.snapshot.identity.is_pending(),
                signed_in = identity.identity().is_some(),
                "identity changed"
            );
            state.snapshot.identity = identity;
        }
        self.reevaluate(state)
    }

    fn reevaluate(&self, state: &mut GateState) -> NavigationDecision {
        let (route, decision) = state.snapshot.resolve_final();
        if route != state.snapshot.route {
            debug!(from = %state.snapshot.route, to = %route, "redirected");
            state.snapshot.route = route;
        }

        self.sync_dashboard(state, &decision);

        self.decisions.send_if_modified(|current| {
            if *current == decision {
                return false;
            }
            info!(from = ?current, to = ?decision, "navigation decision changed");
            *current = decision.clone();
            true
        });
        decision
    }

    fn sync_dashboard(&self, state: &mut GateState, decision: &NavigationDecision) {
        let NavigationDecision::ShowDashboard(tab) = decision else {
            if let Some(shell) = state.dashboard.take() {
                shell.unmount();
            }
            return;
        };

        let Some(identity) = state.snapshot.identity.identity().cloned() else {
            return;
        };

        let same_user = state
            .dashboard
            .as_ref()
            .is_some_and(|shell| shell.identity().id == identity.id);
        if same_user {
            if let Some(shell) = &state.dashboard {
                shell.select_tab(*tab);
            }
            return;
        }

        if let Some(previous) = state.dashboard.take() {
            previous.unmount();
        }
        state.dashboard = Some(DashboardShell::mount(
            identity,
            *tab,
            self.fetch_wallet.clone(),
            self.sign_out.clone(),
        ));
    }
}
