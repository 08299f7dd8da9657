//! Configuration model.
//!
//! Every key has a default, so an empty or partial `config.toml` is valid.
//!
//! ```toml
//! [mock_api]
//! seed = 42
//! latency_min_ms = 0
//! latency_max_ms = 0
//!
//! [identity]
//! delay_ms = 500
//! email = "demo@admin.local"
//! ```

use crate::error::{BeaconError, Result};
use crate::identity::Identity;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RootConfig {
    pub mock_api: MockApiConfig,
    pub identity: IdentityConfig,
}

impl RootConfig {
    pub fn validate(&self) -> Result<()> {
        self.mock_api.validate()
    }
}

/// Settings for the synthetic dataset and the mock router.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MockApiConfig {
    /// Fixed seed for reproducible datasets; random when absent
    pub seed: Option<u64>,
    pub notifications_min: usize,
    pub notifications_max: usize,
    pub contact_messages_min: usize,
    pub contact_messages_max: usize,
    /// Artificial response latency, inclusive range
    pub latency_min_ms: u64,
    pub latency_max_ms: u64,
    /// Upper bound on the `days` segment of activity endpoints
    pub max_activity_days: u32,
}

impl Default for MockApiConfig {
    fn default() -> Self {
        Self {
            seed: None,
            notifications_min: 28,
            notifications_max: 97,
            contact_messages_min: 13,
            contact_messages_max: 53,
            latency_min_ms: 300,
            latency_max_ms: 500,
            max_activity_days: 365,
        }
    }
}

impl MockApiConfig {
    /// Same settings without artificial latency.
    pub fn without_latency(mut self) -> Self {
        self.latency_min_ms = 0;
        self.latency_max_ms = 0;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.notifications_min > self.notifications_max {
            return Err(BeaconError::config(format!(
                "notifications_min ({}) exceeds notifications_max ({})",
                self.notifications_min, self.notifications_max
            )));
        }
        if self.contact_messages_min > self.contact_messages_max {
            return Err(BeaconError::config(format!(
                "contact_messages_min ({}) exceeds contact_messages_max ({})",
                self.contact_messages_min, self.contact_messages_max
            )));
        }
        if self.latency_min_ms > self.latency_max_ms {
            return Err(BeaconError::config(format!(
                "latency_min_ms ({}) exceeds latency_max_ms ({})",
                self.latency_min_ms, self.latency_max_ms
            )));
        }
        Ok(())
    }
}

/// Settings for the mock identity provider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct IdentityConfig {
    /// Delay before the identity appears, both at startup and after logout
    pub delay_ms: u64,
    pub email: String,
    pub name: Option<String>,
    pub user_uuid: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        let demo = Identity::demo();
        Self {
            delay_ms: 500,
            email: demo.email,
            name: demo.name,
            user_uuid: demo.user_uuid,
        }
    }
}

impl IdentityConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    pub fn identity(&self) -> Identity {
        Identity {
            email: self.email.clone(),
            name: self.name.clone(),
            user_uuid: self.user_uuid.clone(),
            extra: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: RootConfig = toml::from_str(
            r#"
            [mock_api]
            seed = 7
            latency_max_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.mock_api.seed, Some(7));
        assert_eq!(config.mock_api.latency_min_ms, 300);
        assert_eq!(config.mock_api.latency_max_ms, 50);
        assert_eq!(config.mock_api.notifications_max, 97);
        assert_eq!(config.identity, IdentityConfig::default());
        assert!(config.validate().unwrap_err().is_config());
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(RootConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = RootConfig::default();
        config.mock_api = config.mock_api.with_seed(99).without_latency();
        let text = toml::to_string(&config).unwrap();
        let parsed: RootConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_identity_from_config() {
        let config = IdentityConfig {
            email: "ops@example.com".to_string(),
            name: None,
            ..IdentityConfig::default()
        };
        let identity = config.identity();
        assert_eq!(identity.email, "ops@example.com");
        assert_eq!(identity.name, None);
        assert_eq!(identity.user_uuid.as_deref(), Some("demo-user-12345"));
    }
}
