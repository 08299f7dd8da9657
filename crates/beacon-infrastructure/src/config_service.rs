//! Configuration service implementation.
//!
//! Loads `RootConfig` from a TOML file. A missing file is not an error: the
//! defaults describe the stock demo.

use crate::paths::BeaconPaths;
use beacon_core::config::RootConfig;
use beacon_core::error::{BeaconError, Result};
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

/// Loads and caches the root configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a service reading the platform config file.
    pub fn default_location() -> Result<Self> {
        let path = BeaconPaths::config_file().map_err(|e| BeaconError::config(e.to_string()))?;
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        // Check if already cached
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = Self::load_from(&self.path)?;

        // Cache it
        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    /// Writes `config` to the file, creating parent directories as needed.
    pub fn save(&self, config: &RootConfig) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, toml::to_string_pretty(config)?)?;
        tracing::info!("[Config] Saved configuration to {:?}", self.path);
        self.invalidate_cache();
        Ok(())
    }

    /// Reads and validates a config file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<RootConfig> {
        if !path.exists() {
            tracing::debug!("[Config] {:?} not found, using defaults", path);
            return Ok(RootConfig::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config: RootConfig = toml::from_str(&text)?;
        config.validate()?;
        tracing::debug!("[Config] Loaded configuration from {:?}", path);
        Ok(config)
    }
}
