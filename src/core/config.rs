use super::history::TrailingWindow;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, net::SocketAddr, path::PathBuf};
use tracing::debug;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_listen_addr")]
    pub listen_addr: SocketAddr,
}

impl ServerConfig {
    fn default_listen_addr() -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], 8080))
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: Self::default_listen_addr(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProviderConfig {
    #[serde(default = "ProviderConfig::default_base_url")]
    pub base_url: String,
    /// Currency the rates are quoted against. The provider's own default (EUR) when unset.
    pub base_currency: Option<String>,
    #[serde(default = "ProviderConfig::default_retries")]
    pub retries: usize,
    #[serde(default = "ProviderConfig::default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl ProviderConfig {
    fn default_base_url() -> String {
        "https://api.exchangeratesapi.io".to_string()
    }

    fn default_retries() -> usize {
        3
    }

    fn default_retry_delay_ms() -> u64 {
        500
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: Self::default_base_url(),
            base_currency: None,
            retries: Self::default_retries(),
            retry_delay_ms: Self::default_retry_delay_ms(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default = "AppConfig::default_window_days")]
    pub window_days: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server: ServerConfig::default(),
            provider: ProviderConfig::default(),
            window_days: Self::default_window_days(),
        }
    }
}

impl AppConfig {
    fn default_window_days() -> u32 {
        TrailingWindow::DEFAULT_DAYS
    }

    /// Loads the config from the default location, or the defaults when no file exists there.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config file at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("io", "fxadvisor", "fxadvisor")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_deserialization() {
        let yaml_str = r#"
server:
  listen_addr: "127.0.0.1:3000"
provider:
  base_url: "http://example.com/rates"
  base_currency: "USD"
  retries: 1
  retry_delay_ms: 10
window_days: 14
"#;

        let config: AppConfig = serde_yaml::from_str(yaml_str).expect("Failed to deserialize");
        assert_eq!(
            config.server.listen_addr,
            "127.0.0.1:3000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.provider.base_url, "http://example.com/rates");
        assert_eq!(config.provider.base_currency.as_deref(), Some("USD"));
        assert_eq!(config.provider.retries, 1);
        assert_eq!(config.provider.retry_delay_ms, 10);
        assert_eq!(config.window_days, 14);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let yaml_str = r#"
provider:
  base_url: "http://localhost:9000"
"#;
        let config: AppConfig = serde_yaml::from_str(yaml_str).unwrap();
        assert_eq!(config.provider.base_url, "http://localhost:9000");
        assert!(config.provider.base_currency.is_none());
        assert_eq!(config.provider.retries, 3);
        assert_eq!(config.provider.retry_delay_ms, 500);
        assert_eq!(config.server, ServerConfig::default());
        assert_eq!(config.window_days, 7);

        let empty: AppConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(empty, AppConfig::default());
    }

    #[test]
    fn test_load_from_missing_path_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::load_from_path(dir.path().join("missing.yaml"));
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to read config file")
        );
    }
}
