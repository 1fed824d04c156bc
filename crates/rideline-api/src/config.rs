//! # API Configuration
//!
//! Where the client finds the backend.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RIDELINE_API_URL=http://10.0.0.5:5000                              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/rideline/api.toml (Linux)                                │
//! │     ~/Library/Application Support/com.rideline.app/api.toml (macOS)    │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:5000, 30s request timeout                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # api.toml
//! base_url = "http://localhost:5000"
//! timeout_secs = 30
//! ```

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Default backend address, the development server.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend base URL; endpoint paths are joined onto this.
    pub base_url: String,

    /// Per-request timeout. Without one, a request that never settles
    /// leaves a spinner stuck forever.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Loads configuration with the env → file → default priority.
    pub fn load() -> Self {
        let mut config = match Self::config_file() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to load api.toml, using defaults");
                ApiConfig::default()
            }),
            _ => ApiConfig::default(),
        };

        if let Ok(url) = std::env::var("RIDELINE_API_URL") {
            debug!(%url, "Base URL overridden from environment");
            config.base_url = url;
        }

        config
    }

    /// Parses a config file.
    pub fn from_file(path: &PathBuf) -> ApiResult<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| ApiError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&raw).map_err(|e| ApiError::Config(format!("{}: {e}", path.display())))
    }

    /// Platform path of `api.toml`, if a config directory exists.
    pub fn config_file() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("api.toml"))
    }
}

/// Platform directories for Rideline files (config + persisted session).
pub fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "rideline", "rideline")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ApiConfig {
            base_url: "http://10.0.0.5:5000".into(),
            timeout_secs: 10,
        };
        let raw = toml::to_string(&config).unwrap();
        let parsed: ApiConfig = toml::from_str(&raw).unwrap();
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.timeout_secs, 10);
    }
}
