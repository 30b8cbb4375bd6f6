//! Session gating domain.
//!
//! This module defines the pure navigation decision that picks which
//! top-level screen is shown, and the subscription registry used by identity
//! gateways to publish session changes.

mod decision;
mod identity_state;
mod route;
mod subscription;

pub use decision::{GateSnapshot, NavigationDecision, Screen, MAX_REDIRECTS};
pub use identity_state::IdentityState;
pub use route::Route;
pub use subscription::{
    PublishedChange, SessionChange, SessionListeners, SessionSequence, SessionSubscription,
};
