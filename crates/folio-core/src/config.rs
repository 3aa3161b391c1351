use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;

/// Top-level configuration for the Folio assistant.
///
/// Loaded from `~/.folio/config.toml` by default. Each section corresponds
/// to one concern: `[general]` for logging, `[backend]` for the remote API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

impl FolioConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FolioConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Remote backend configuration.
///
/// The backend is an enhancement: every call through it has a local
/// fallback, so a wrong URL degrades the experience without breaking it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Whether to attempt remote calls at all. When false, every reply
    /// comes from the local engine.
    pub enabled: bool,
    /// Base URL of the deployed backend.
    pub base_url: String,
    /// Path of the chat endpoint.
    pub chat_path: String,
    /// Path of the contact endpoint.
    pub contact_path: String,
    /// Path of the health endpoint.
    pub health_path: String,
    /// Hard request timeout in seconds. Expiry triggers local fallback.
    pub timeout_secs: u64,
    /// Number of trailing history turns sent with each chat request.
    pub history_turns: usize,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "https://web-production-f618.up.railway.app".to_string(),
            chat_path: "/api/chat".to_string(),
            contact_path: "/api/contact".to_string(),
            health_path: "/api/health".to_string(),
            timeout_secs: 10,
            history_turns: 20,
        }
    }
}

impl BackendConfig {
    /// Full URL of the chat endpoint.
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url, self.chat_path)
    }

    /// Full URL of the contact endpoint.
    pub fn contact_url(&self) -> String {
        format!("{}{}", self.base_url, self.contact_path)
    }

    /// Full URL of the health endpoint.
    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, self.health_path)
    }
}
