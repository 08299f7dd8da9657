//! Sign-in and sign-out flows over an [`IdentityProvider`].

use beacon_core::error::{BeaconError, Result};
use beacon_core::identity::{Identity, IdentityProvider, IdentitySnapshot};
use std::sync::Arc;

pub struct IdentityUseCase {
    provider: Arc<dyn IdentityProvider>,
}

impl IdentityUseCase {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    pub fn current(&self) -> IdentitySnapshot {
        self.provider.snapshot()
    }

    /// Waits until the provider leaves its loading states.
    pub async fn settled(&self) -> IdentitySnapshot {
        self.provider.wait_until_settled().await
    }

    fn into_identity(snapshot: IdentitySnapshot) -> Result<Identity> {
        match (snapshot.user, snapshot.error) {
            (Some(user), _) => Ok(user),
            (None, Some(error)) => Err(BeaconError::internal(error)),
            (None, None) => Err(BeaconError::internal("identity provider settled without a user")),
        }
    }

    /// Starts the provider and returns the identity once it is available.
    pub async fn sign_in(&self) -> Result<Identity> {
        self.provider.initialize();
        Self::into_identity(self.settled().await)
    }

    /// Logs out and waits for the provider to restore a session.
    ///
    /// Returns the logged-out state followed by the restored one.
    pub async fn sign_out(&self) -> Vec<IdentitySnapshot> {
        self.provider.logout();
        let mut observed = vec![self.provider.snapshot()];

        if observed[0].is_loading() {
            observed.push(self.provider.wait_until_settled().await);
        }

        tracing::info!("[Identity] Session restored after {} transition(s)", observed.len() - 1);
        observed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use beacon_core::identity::IdentityState;
    use std::sync::Mutex;

    /// Provider whose transitions are driven by the test.
    struct ManualProvider {
        state: Mutex<IdentitySnapshot>,
        pending: Mutex<Vec<IdentitySnapshot>>,
    }

    impl ManualProvider {
        fn new(pending: Vec<IdentitySnapshot>) -> Arc<Self> {
            Arc::new(Self {
                state: Mutex::new(IdentitySnapshot::loading()),
                pending: Mutex::new(pending),
            })
        }
    }

    #[async_trait]
    impl IdentityProvider for ManualProvider {
        fn snapshot(&self) -> IdentitySnapshot {
            self.state.lock().unwrap().clone()
        }

        fn initialize(&self) {}

        fn logout(&self) {
            *self.state.lock().unwrap() = IdentitySnapshot::logged_out();
        }

        async fn wait_until_settled(&self) -> IdentitySnapshot {
            let mut state = self.state.lock().unwrap();
            while state.is_loading() {
                *state = self.pending.lock().unwrap().remove(0);
            }
            state.clone()
        }
    }

    #[tokio::test]
    async fn test_sign_in_returns_identity() {
        let provider = ManualProvider::new(vec![IdentitySnapshot::authenticated(Identity::demo())]);
        let usecase = IdentityUseCase::new(provider);

        let identity = usecase.sign_in().await.unwrap();
        assert_eq!(identity, Identity::demo());
    }

    #[tokio::test]
    async fn test_sign_in_surfaces_stored_error() {
        let provider = ManualProvider::new(vec![IdentitySnapshot::failed("proxy offline")]);
        let usecase = IdentityUseCase::new(provider);

        let err = usecase.sign_in().await.unwrap_err();
        assert!(err.to_string().contains("proxy offline"));
    }

    #[tokio::test]
    async fn test_sign_out_records_transitions() {
        let provider = ManualProvider::new(vec![IdentitySnapshot::authenticated(Identity::demo())]);
        let usecase = IdentityUseCase::new(provider);

        let observed = usecase.sign_out().await;
        let states: Vec<IdentityState> = observed.iter().map(|s| s.state).collect();
        assert_eq!(
            states,
            vec![IdentityState::LoggedOutTransient, IdentityState::Authenticated]
        );
    }

    #[tokio::test]
    async fn test_settled_returns_state_published_before_waiting() {
        let provider = ManualProvider::new(Vec::new());
        *provider.state.lock().unwrap() = IdentitySnapshot::authenticated(Identity::demo());
        let usecase = IdentityUseCase::new(provider);

        let snapshot = usecase.settled().await;
        assert_eq!(snapshot.state, IdentityState::Authenticated);
    }
}
