//! Wires the mock backend together from configuration.

use anyhow::{Context, Result};
use beacon_application::{DashboardService, IdentityUseCase};
use beacon_core::config::RootConfig;
use beacon_core::http::HttpClient;
use beacon_infrastructure::{
    ConfigService, InterceptingClient, MockApiRouter, MockIdentityProvider, ReqwestClient,
};
use std::path::PathBuf;
use std::sync::Arc;

/// Global flags that adjust the loaded configuration.
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub seed: Option<u64>,
    pub no_latency: bool,
}

impl Overrides {
    pub fn config_service(&self) -> Result<ConfigService> {
        match &self.config_path {
            Some(path) => Ok(ConfigService::new(path.clone())),
            None => ConfigService::default_location().context("Failed to locate config file"),
        }
    }

    /// Loads the config file and applies command-line overrides on top.
    pub fn load_config(&self) -> Result<RootConfig> {
        let service = self.config_service()?;
        let mut config = service
            .get_config()
            .with_context(|| format!("Failed to load {}", service.path().display()))?;

        if let Some(seed) = self.seed {
            config.mock_api = config.mock_api.with_seed(seed);
        }
        if self.no_latency {
            config.mock_api = config.mock_api.without_latency();
        }
        tracing::debug!("[Config] Loaded from {}", service.path().display());
        Ok(config)
    }
}

pub struct App {
    pub client: Arc<dyn HttpClient>,
    pub dashboard: DashboardService,
    pub identity: IdentityUseCase,
}

impl App {
    pub fn bootstrap(overrides: &Overrides) -> Result<Self> {
        let config = overrides.load_config()?;

        let router = Arc::new(MockApiRouter::new(config.mock_api.clone())?);

        let client: Arc<dyn HttpClient> = Arc::new(InterceptingClient::new(
            router,
            Arc::new(ReqwestClient::new()),
        ));
        let provider = Arc::new(MockIdentityProvider::from_config(&config.identity));

        Ok(Self {
            dashboard: DashboardService::new(client.clone()),
            identity: IdentityUseCase::new(provider),
            client,
        })
    }
}
