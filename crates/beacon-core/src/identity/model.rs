//! Identity domain model.
//!
//! Mirrors the identity document an access proxy hands to the dashboard: an
//! email plus optional display name and user id, with room for whatever else
//! the proxy attaches.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const DEMO_EMAIL: &str = "demo@admin.local";
pub const DEMO_NAME: &str = "Demo Administrator";
pub const DEMO_USER_UUID: &str = "demo-user-12345";

/// An authenticated dashboard user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_uuid: Option<String>,
    /// Additional claims, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Identity {
    /// The single identity served by the demo harness.
    pub fn demo() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            name: Some(DEMO_NAME.to_string()),
            user_uuid: Some(DEMO_USER_UUID.to_string()),
            extra: Map::new(),
        }
    }
}

/// Lifecycle of the identity provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityState {
    /// Waiting for the initial identity fetch.
    Loading,
    /// An identity is present.
    Authenticated,
    /// Logged out; the identity is restored once the logout timer fires.
    LoggedOutTransient,
    /// The identity fetch failed and the error message was stored.
    Failed,
}

/// Point-in-time view of the provider, as a UI would render it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentitySnapshot {
    pub state: IdentityState,
    pub user: Option<Identity>,
    pub error: Option<String>,
}

impl IdentitySnapshot {
    pub fn loading() -> Self {
        Self {
            state: IdentityState::Loading,
            user: None,
            error: None,
        }
    }

    pub fn authenticated(user: Identity) -> Self {
        Self {
            state: IdentityState::Authenticated,
            user: Some(user),
            error: None,
        }
    }

    pub fn logged_out() -> Self {
        Self {
            state: IdentityState::LoggedOutTransient,
            user: None,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            state: IdentityState::Failed,
            user: None,
            error: Some(message.into()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(
            self.state,
            IdentityState::Loading | IdentityState::LoggedOutTransient
        )
    }
}

impl Default for IdentitySnapshot {
    fn default() -> Self {
        Self::loading()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_demo_identity_wire_shape() {
        let value = serde_json::to_value(Identity::demo()).unwrap();
        assert_eq!(
            value,
            json!({
                "email": "demo@admin.local",
                "name": "Demo Administrator",
                "user_uuid": "demo-user-12345",
            })
        );
    }

    #[test]
    fn test_extra_claims_are_flattened() {
        let identity: Identity = serde_json::from_value(json!({
            "email": "ops@example.com",
            "country": "NL",
        }))
        .unwrap();
        assert_eq!(identity.name, None);
        assert_eq!(identity.extra.get("country"), Some(&json!("NL")));
    }

    #[test]
    fn test_loading_states() {
        assert!(IdentitySnapshot::loading().is_loading());
        assert!(IdentitySnapshot::logged_out().is_loading());
        assert!(!IdentitySnapshot::authenticated(Identity::demo()).is_loading());
        assert!(!IdentitySnapshot::failed("boom").is_loading());
    }
}
