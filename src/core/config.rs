//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, a `.env` file, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Default Alpha Vantage query endpoint.
pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Default per-call timeout for provider requests, in seconds.
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External data provider configuration.
    pub provider: ProviderConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for the Alpha Vantage provider.
///
/// Handed to the provider client and the dispatch gateway at construction,
/// so tests can inject their own key and endpoint.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Alpha Vantage API key. `None` makes every tool call fail before
    /// any network traffic.
    pub api_key: Option<String>,

    /// Query endpoint all tools are sent to.
    pub base_url: String,

    /// Upper bound for a single provider call.
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_PROVIDER_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS),
        }
    }
}

impl ProviderConfig {
    /// Provider config pointing at a custom endpoint (used by tests and
    /// self-hosted proxies).
    pub fn new(api_key: Option<String>, base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            api_key,
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "alpha-vantage-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            provider: ProviderConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Server settings are prefixed with `MCP_` (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_PROVIDER_TIMEOUT_SECS`, ...). The API key keeps
    /// the provider's conventional name, `ALPHA_VANTAGE_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        config.transport = TransportConfig::from_env();

        match std::env::var("ALPHA_VANTAGE_API_KEY") {
            Ok(key) if !key.trim().is_empty() => {
                config.provider.api_key = Some(key.trim().to_string());
                info!("Alpha Vantage API key loaded from environment");
            }
            _ => {
                warn!(
                    "ALPHA_VANTAGE_API_KEY not set - every tool call will be rejected. \
                     Get a free key at https://www.alphavantage.co/support/#api-key"
                );
            }
        }

        if let Ok(base_url) = std::env::var("MCP_PROVIDER_BASE_URL") {
            info!("Provider endpoint overridden: {}", base_url);
            config.provider.base_url = base_url;
        }

        if let Ok(secs) = std::env::var("MCP_PROVIDER_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(secs) if secs > 0 => config.provider.timeout = Duration::from_secs(secs),
                _ => warn!(
                    "Ignoring invalid MCP_PROVIDER_TIMEOUT_SECS={:?}, using {}s",
                    secs, DEFAULT_PROVIDER_TIMEOUT_SECS
                ),
            }
        }

        config
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ALPHA_VANTAGE_API_KEY", "test_key_12345");
        }
        let config = Config::from_env();
        assert_eq!(config.provider.api_key.as_deref(), Some("test_key_12345"));
        unsafe {
            std::env::remove_var("ALPHA_VANTAGE_API_KEY");
        }
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ALPHA_VANTAGE_API_KEY", "   ");
        }
        let config = Config::from_env();
        assert!(config.provider.api_key.is_none());
        unsafe {
            std::env::remove_var("ALPHA_VANTAGE_API_KEY");
        }
    }

    #[test]
    fn test_timeout_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_PROVIDER_TIMEOUT_SECS", "3");
        }
        let config = Config::from_env();
        assert_eq!(config.provider.timeout, Duration::from_secs(3));

        unsafe {
            std::env::set_var("MCP_PROVIDER_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert_eq!(
            config.provider.timeout,
            Duration::from_secs(DEFAULT_PROVIDER_TIMEOUT_SECS)
        );
        unsafe {
            std::env::remove_var("MCP_PROVIDER_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let provider = ProviderConfig::new(
            Some("super_secret_key".to_string()),
            DEFAULT_PROVIDER_BASE_URL,
            Duration::from_secs(10),
        );
        let debug_str = format!("{:?}", provider);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.provider.api_key.is_none());
        assert_eq!(config.provider.base_url, DEFAULT_PROVIDER_BASE_URL);
        assert_eq!(config.provider.timeout, Duration::from_secs(10));
    }
}
