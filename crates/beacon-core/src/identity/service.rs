//! Identity service traits.
//!
//! `IdentitySource` is where an identity comes from; `IdentityProvider` wraps
//! a source in the loading/authenticated lifecycle a UI observes.

use super::model::{Identity, IdentitySnapshot};
use crate::error::Result;
use async_trait::async_trait;

/// Fetches the current user's identity.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    async fn fetch_identity(&self) -> Result<Identity>;
}

/// Source that always yields the same identity.
///
/// # Example
///
/// ```
/// use beacon_core::identity::{FixedIdentitySource, Identity};
///
/// let source = FixedIdentitySource::default();
/// assert_eq!(source.identity(), &Identity::demo());
/// ```
#[derive(Debug, Clone)]
pub struct FixedIdentitySource {
    identity: Identity,
}

impl FixedIdentitySource {
    pub fn new(identity: Identity) -> Self {
        Self { identity }
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }
}

impl Default for FixedIdentitySource {
    fn default() -> Self {
        Self::new(Identity::demo())
    }
}

#[async_trait]
impl IdentitySource for FixedIdentitySource {
    async fn fetch_identity(&self) -> Result<Identity> {
        Ok(self.identity.clone())
    }
}

/// Observable identity lifecycle.
///
/// `initialize` and `logout` return immediately; the state transitions they
/// trigger happen on timers. Implementations do not cancel pending timers, so
/// overlapping calls resolve in whatever order their timers fire.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns the current state.
    fn snapshot(&self) -> IdentitySnapshot;

    /// Starts the initial identity fetch.
    fn initialize(&self);

    /// Clears the identity and schedules its restoration.
    fn logout(&self);

    /// Resolves once the state is neither loading nor logged out.
    ///
    /// Returns at once if the current state already qualifies, so a
    /// transition published before the call is never missed.
    async fn wait_until_settled(&self) -> IdentitySnapshot;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fixed_source_yields_identity() {
        let source = FixedIdentitySource::default();
        let identity = source.fetch_identity().await.unwrap();
        assert_eq!(identity.email, "demo@admin.local");
    }
}
