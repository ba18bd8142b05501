//! Embernote configuration management

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main embernote configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbernoteConfig {
    /// HTTP gateway configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Identity resolution configuration
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

/// HTTP gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Allowed CORS origins (empty = allow any)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8787,
            cors_origins: Vec::new(),
        }
    }
}

/// How the gateway resolves the owner identity of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityMode {
    /// Every request maps to the configured static owner (single-user dev mode)
    #[default]
    Static,
    /// Owner id is read from a trusted reverse-proxy header
    Header,
}

/// Identity resolution configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Resolution mode
    #[serde(default)]
    pub mode: IdentityMode,

    /// Owner id used in `static` mode
    pub static_owner: String,

    /// Header carrying the owner id in `header` mode
    pub header_name: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            mode: IdentityMode::Static,
            static_owner: "dev-user-001".to_string(),
            header_name: "x-owner-id".to_string(),
        }
    }
}

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base directory for all embernote state
    pub base_dir: PathBuf,
}

impl StorageConfig {
    /// Directory holding per-owner note stores
    pub fn notes_dir(&self) -> PathBuf {
        self.base_dir.join("notes")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let base = dirs_next::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".embernote");
        Self { base_dir: base }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EmbernoteConfig::default();
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.port, 8787);
        assert!(config.gateway.cors_origins.is_empty());
        assert_eq!(config.identity.mode, IdentityMode::Static);
        assert_eq!(config.identity.static_owner, "dev-user-001");
        assert!(config.storage.base_dir.ends_with(".embernote"));
    }

    #[test]
    fn test_notes_dir_under_base() {
        let storage = StorageConfig {
            base_dir: PathBuf::from("/tmp/embernote-test"),
        };
        assert_eq!(storage.notes_dir(), PathBuf::from("/tmp/embernote-test/notes"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EmbernoteConfig::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: EmbernoteConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.gateway.port, config.gateway.port);
        assert_eq!(parsed.identity.static_owner, config.identity.static_owner);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml = r#"
            [gateway]
            host = "0.0.0.0"
            port = 9000

            [identity]
            mode = "header"
            static_owner = "dev-user-001"
            header_name = "x-forwarded-user"
        "#;
        let config: EmbernoteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.gateway.host, "0.0.0.0");
        assert_eq!(config.gateway.port, 9000);
        assert_eq!(config.identity.mode, IdentityMode::Header);
        assert_eq!(config.identity.header_name, "x-forwarded-user");
        // Storage section omitted entirely
        assert!(config.storage.base_dir.ends_with(".embernote"));
    }
}
