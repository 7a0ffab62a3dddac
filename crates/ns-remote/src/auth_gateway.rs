use crate::{AuthResult, AuthState};

use async_trait::async_trait;
use ns_core::Identity;
use tokio::sync::watch;

/// Managed identity service: register/login/logout plus a state stream.
///
/// `subscribe` returns a watch receiver holding the current state; it
/// observes every subsequent change in delivery order, with rapid flapping
/// collapsing to the latest state. Dropping the receiver releases the
/// subscription.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn register(&self, email: &str, password: &str) -> AuthResult<Identity>;

    async fn login(&self, email: &str, password: &str) -> AuthResult<Identity>;

    async fn logout(&self);

    fn subscribe(&self) -> watch::Receiver<AuthState>;
}
