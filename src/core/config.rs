//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::client::Environment;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Adyen platform credentials and environment.
    pub adyen: AdyenConfig,
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

/// Configuration for the Adyen platform connection.
#[derive(Clone, Serialize, Deserialize)]
pub struct AdyenConfig {
    /// API key used on every outbound call (`x-api-key` header).
    pub api_key: Option<String>,

    /// Target environment (test or live).
    pub environment: Environment,

    /// Account-specific URL prefix for live Checkout endpoints.
    pub live_endpoint_prefix: Option<String>,

    /// Fallback merchant account for Checkout tools that were not given
    /// one per call.
    pub merchant_account: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for AdyenConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdyenConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("environment", &self.environment)
            .field("live_endpoint_prefix", &self.live_endpoint_prefix)
            .field("merchant_account", &self.merchant_account)
            .finish()
    }
}

impl Default for AdyenConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            environment: Environment::Test,
            live_endpoint_prefix: None,
            merchant_account: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "adyen-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            adyen: AdyenConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`); Adyen settings use the `ADYEN_` prefix the vendor
    /// documents (`ADYEN_API_KEY`, `ADYEN_ENVIRONMENT`,
    /// `ADYEN_LIVE_ENDPOINT_URL_PREFIX`, `ADYEN_MERCHANT_ACCOUNT`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(api_key) = std::env::var("ADYEN_API_KEY") {
            config.adyen.api_key = Some(api_key);
            info!("Adyen API key loaded from environment");
        } else {
            warn!("ADYEN_API_KEY not set - the server cannot start without it");
        }

        if let Ok(environment) = std::env::var("ADYEN_ENVIRONMENT") {
            config.adyen.environment = Environment::parse(&environment);
            info!("Adyen environment: {:?}", config.adyen.environment);
        }

        if let Ok(prefix) = std::env::var("ADYEN_LIVE_ENDPOINT_URL_PREFIX") {
            config.adyen.live_endpoint_prefix = Some(prefix);
        }

        if let Ok(merchant_account) = std::env::var("ADYEN_MERCHANT_ACCOUNT") {
            config.adyen.merchant_account = Some(merchant_account);
        } else {
            warn!(
                "ADYEN_MERCHANT_ACCOUNT not set - Checkout tools will require \
                 a merchantAccount argument on every call"
            );
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("ADYEN_API_KEY", "AQEyhmfxK_test_key");
            std::env::set_var("ADYEN_ENVIRONMENT", "live");
            std::env::set_var("ADYEN_MERCHANT_ACCOUNT", "TestMerchant");
        }
        let config = Config::from_env();
        assert_eq!(config.adyen.api_key.as_deref(), Some("AQEyhmfxK_test_key"));
        assert_eq!(config.adyen.environment, Environment::Live);
        assert_eq!(
            config.adyen.merchant_account.as_deref(),
            Some("TestMerchant")
        );
        unsafe {
            std::env::remove_var("ADYEN_API_KEY");
            std::env::remove_var("ADYEN_ENVIRONMENT");
            std::env::remove_var("ADYEN_MERCHANT_ACCOUNT");
        }
    }

    #[test]
    fn test_environment_defaults_to_test() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("ADYEN_ENVIRONMENT");
        }
        let config = Config::from_env();
        assert_eq!(config.adyen.environment, Environment::Test);
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let config = AdyenConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }
}
