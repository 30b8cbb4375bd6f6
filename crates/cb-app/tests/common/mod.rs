#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cb_app::{GatePorts, SessionGate};
use cb_core::dashboard::WalletSummary;
use cb_core::identity::{Credentials, Identity, SignUpRequest};
use cb_core::ids::UserId;
use cb_core::onboarding::ONBOARDING_COMPLETE_KEY;
use cb_core::ports::{GatewayError, IdentityGatewayPort, LocalStoragePort, WalletSummaryPort};
use cb_core::session::{SessionListeners, SessionSubscription};
use cb_infra::storage::InMemoryLocalStorage;
use tokio::sync::Notify;

/// When the fake publishes a session change relative to returning the
/// awaited result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyMode {
    BeforeReturn,
    AfterReturn,
    Never,
}

pub struct FakeGateway {
    pub listeners: SessionListeners,
    accounts: Mutex<HashMap<String, (String, Identity)>>,
    current: Mutex<Option<Identity>>,
    pub notify_mode: Mutex<NotifyMode>,
    pub lookup_error: Mutex<Option<GatewayError>>,
    pub sign_out_error: Mutex<Option<GatewayError>>,
    pub session_on_sign_up: Mutex<bool>,
    pub lookup_gate: Mutex<Option<Arc<Notify>>>,
    pub lookup_started: Notify,
    suspend_calls: AtomicBool,
    calls: Mutex<Vec<&'static str>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            listeners: SessionListeners::new(),
            accounts: Mutex::new(HashMap::new()),
            current: Mutex::new(None),
            notify_mode: Mutex::new(NotifyMode::BeforeReturn),
            lookup_error: Mutex::new(None),
            sign_out_error: Mutex::new(None),
            session_on_sign_up: Mutex::new(true),
            lookup_gate: Mutex::new(None),
            lookup_started: Notify::new(),
            suspend_calls: AtomicBool::new(false),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn with_account(self: Arc<Self>, identity: Identity, password: &str) -> Arc<Self> {
        self.accounts.lock().unwrap().insert(
            identity.email.clone(),
            (password.to_string(), identity),
        );
        self
    }

    pub fn with_session(self: Arc<Self>, identity: Identity) -> Arc<Self> {
        *self.current.lock().unwrap() = Some(identity);
        self
    }

    pub fn set_notify_mode(&self, mode: NotifyMode) {
        *self.notify_mode.lock().unwrap() = mode;
    }

    /// Make every call yield to the scheduler once before doing its work,
    /// the way a network round trip would.
    pub fn suspend_calls(&self) {
        self.suspend_calls.store(true, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    /// Session invalidated elsewhere (expired refresh token, remote logout).
    pub fn revoke_session(&self) {
        *self.current.lock().unwrap() = None;
        self.listeners.notify(None);
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    async fn round_trip(&self) {
        if self.suspend_calls.load(Ordering::SeqCst) {
            tokio::task::yield_now().await;
        }
    }

    fn publish(&self, change: Option<Identity>) {
        match *self.notify_mode.lock().unwrap() {
            NotifyMode::BeforeReturn => {
                self.listeners.notify(change);
            }
            NotifyMode::AfterReturn => {
                let listeners = self.listeners.clone();
                tokio::spawn(async move {
                    tokio::task::yield_now().await;
                    listeners.notify(change);
                });
            }
            NotifyMode::Never => {}
        }
    }
}

#[async_trait]
impl IdentityGatewayPort for FakeGateway {
    async fn sign_up(&self, request: &SignUpRequest) -> Result<Identity, GatewayError> {
        self.record("sign_up");
        self.round_trip().await;
        let identity = Identity::new(format!("u-{}", request.email), request.email.clone())
            .with_display_name(request.display_name.clone())
            .with_phone(request.phone.clone());
        self.accounts.lock().unwrap().insert(
            request.email.clone(),
            (request.password.expose().to_string(), identity.clone()),
        );
        if *self.session_on_sign_up.lock().unwrap() {
            *self.current.lock().unwrap() = Some(identity.clone());
            self.publish(Some(identity.clone()));
        }
        Ok(identity)
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<Identity, GatewayError> {
        self.record("sign_in");
        self.round_trip().await;
        let account = self
            .accounts
            .lock()
            .unwrap()
            .get(&credentials.email)
            .cloned();
        match account {
            Some((password, identity)) if password == credentials.password.expose() => {
                *self.current.lock().unwrap() = Some(identity.clone());
                self.publish(Some(identity.clone()));
                Ok(identity)
            }
            _ => Err(GatewayError::service("Invalid login credentials")),
        }
    }

    async fn sign_out(&self) -> Result<(), GatewayError> {
        self.record("sign_out");
        self.round_trip().await;
        if let Some(err) = self.sign_out_error.lock().unwrap().clone() {
            return Err(err);
        }
        *self.current.lock().unwrap() = None;
        self.publish(None);
        Ok(())
    }

    async fn current_identity(&self) -> Result<Option<Identity>, GatewayError> {
        self.record("current_identity");
        self.round_trip().await;
        self.lookup_started.notify_one();
        let gate = self.lookup_gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(err) = self.lookup_error.lock().unwrap().clone() {
            return Err(err);
        }
        Ok(self.current.lock().unwrap().clone())
    }

    fn subscribe_session_changes(&self) -> SessionSubscription {
        self.listeners.subscribe()
    }
}

pub struct FakeWallets {
    pub calls: AtomicUsize,
    pub result: Mutex<Result<Option<WalletSummary>, GatewayError>>,
}

impl FakeWallets {
    pub fn returning(result: Result<Option<WalletSummary>, GatewayError>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            result: Mutex::new(result),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WalletSummaryPort for FakeWallets {
    async fn fetch_summary(&self, _user_id: &UserId) -> Result<Option<WalletSummary>, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.lock().unwrap().clone()
    }
}

pub fn ada() -> Identity {
    Identity::new("u-ada", "ada@example.com").with_display_name("Ada Lovelace")
}

pub const ADA_PASSWORD: &str = "Analytic4l!";

pub async fn onboarded_storage() -> Arc<InMemoryLocalStorage> {
    let storage = Arc::new(InMemoryLocalStorage::new());
    storage
        .set_item(ONBOARDING_COMPLETE_KEY, "true")
        .await
        .unwrap();
    storage
}

pub fn build_gate(
    gateway: Arc<FakeGateway>,
    wallets: Arc<FakeWallets>,
    storage: Arc<InMemoryLocalStorage>,
) -> SessionGate {
    SessionGate::new(GatePorts {
        gateway,
        wallets,
        storage,
    })
}
