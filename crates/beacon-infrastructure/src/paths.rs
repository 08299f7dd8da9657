//! Path management for beacon configuration files.
//!
//! ```text
//! ~/.config/beacon/       # Config directory (XDG on Linux, platform default elsewhere)
//! └── config.toml         # Mock API and identity settings
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

pub struct BeaconPaths;

impl BeaconPaths {
    const APP_DIR: &'static str = "beacon";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the beacon configuration directory (e.g. `~/.config/beacon/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(Self::APP_DIR))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_lives_in_app_dir() {
        if let Ok(path) = BeaconPaths::config_file() {
            assert!(path.ends_with("beacon/config.toml"));
        }
    }
}
