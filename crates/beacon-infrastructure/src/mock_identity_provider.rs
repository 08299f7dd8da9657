//! Mock identity provider.
//!
//! Simulates an access-proxy login: the identity shows up after a fixed
//! delay, and logging out clears it only until the same delay has passed
//! again. Logout therefore behaves like a re-login, which is all a demo
//! dashboard needs.

use async_trait::async_trait;
use beacon_core::config::IdentityConfig;
use beacon_core::identity::{
    FixedIdentitySource, IdentityProvider, IdentitySnapshot, IdentitySource,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Timer-driven [`IdentityProvider`].
///
/// State lives in a `watch` channel so observers can await transitions.
/// `initialize` and `logout` spawn Tokio tasks and must be called from
/// within a runtime. Pending timers are never cancelled.
pub struct MockIdentityProvider {
    source: Arc<dyn IdentitySource>,
    delay: Duration,
    state: Arc<watch::Sender<IdentitySnapshot>>,
}

impl MockIdentityProvider {
    pub fn new(source: Arc<dyn IdentitySource>, delay: Duration) -> Self {
        let (state, _) = watch::channel(IdentitySnapshot::loading());
        Self {
            source,
            delay,
            state: Arc::new(state),
        }
    }

    /// Provider serving the identity described by `config`.
    pub fn from_config(config: &IdentityConfig) -> Self {
        Self::new(
            Arc::new(FixedIdentitySource::new(config.identity())),
            config.delay(),
        )
    }

    /// Fetches the identity once the delay has elapsed and publishes the result.
    fn schedule_fetch(&self) {
        let source = self.source.clone();
        let state = self.state.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            let snapshot = match source.fetch_identity().await {
                Ok(identity) => {
                    tracing::info!("[Identity] Authenticated as {}", identity.email);
                    IdentitySnapshot::authenticated(identity)
                }
                Err(e) => {
                    tracing::error!("[Identity] Mock auth error: {}", e);
                    IdentitySnapshot::failed(e.to_string())
                }
            };
            state.send_replace(snapshot);
        });
    }
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::from_config(&IdentityConfig::default())
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    fn snapshot(&self) -> IdentitySnapshot {
        self.state.borrow().clone()
    }

    fn initialize(&self) {
        self.schedule_fetch();
    }

    fn logout(&self) {
        tracing::info!("[Identity] Mock logout - would redirect in production");
        self.state.send_replace(IdentitySnapshot::logged_out());
        self.schedule_fetch();
    }

    async fn wait_until_settled(&self) -> IdentitySnapshot {
        let mut receiver = self.state.subscribe();
        // `wait_for` checks the current value before waiting. The provider
        // owns the sender, so the channel cannot close while `self` is
        // borrowed.
        match receiver.wait_for(|snapshot| !snapshot.is_loading()).await {
            Ok(snapshot) => snapshot.clone(),
            Err(_) => self.snapshot(),
        }
    }
}
