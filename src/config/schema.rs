//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the scanner.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the wallet scanner.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ScannerConfig {
    /// Block-explorer API settings.
    pub explorer: ExplorerConfig,

    /// Scan loop settings (pacing, quota, output).
    pub scan: ScanConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Block-explorer API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// Balance-query endpoint URL.
    pub api_url: String,

    /// Name of the environment variable holding the API key.
    pub api_key_env: String,

    /// HTTP request timeout in seconds.
    pub request_timeout_secs: u64,

    /// Chain ID sent as `chainid` to multichain endpoints.
    /// Left out of the query when unset.
    pub chain_id: Option<u64>,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub use_system_proxy: bool,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.etherscan.io/api".to_string(),
            api_key_env: "ETHERSCAN_API_KEY".to_string(),
            request_timeout_secs: 10,
            chain_id: None,
            use_system_proxy: true,
        }
    }
}

/// Scan loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Append-only log of addresses found with a balance.
    pub output_file: String,

    /// Pause between requests in milliseconds (doubled after a transient error).
    pub request_delay_ms: u64,

    /// Maximum attempts per run.
    pub daily_call_limit: u64,

    /// Stop after this many transient errors in a row. Unbounded when unset.
    pub max_consecutive_transient: Option<u32>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output_file: "found_wallets.txt".to_string(),
            request_delay_ms: 200,
            daily_call_limit: 100_000,
            max_consecutive_transient: None,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScannerConfig::default();
        assert_eq!(config.explorer.api_url, "https://api.etherscan.io/api");
        assert_eq!(config.explorer.api_key_env, "ETHERSCAN_API_KEY");
        assert_eq!(config.scan.output_file, "found_wallets.txt");
        assert_eq!(config.scan.request_delay_ms, 200);
        assert_eq!(config.scan.daily_call_limit, 100_000);
        assert!(config.scan.max_consecutive_transient.is_none());
        assert!(!config.observability.metrics_enabled);
        assert!(config.explorer.use_system_proxy);
    }

    #[test]
    fn test_explorer_section() {
        let config: ScannerConfig = toml::from_str(
            r#"
            [explorer]
            chain_id = 11155111
            use_system_proxy = false
            "#,
        )
        .unwrap();
        assert_eq!(config.explorer.chain_id, Some(11155111));
        assert!(!config.explorer.use_system_proxy);
        assert_eq!(config.explorer.api_key_env, "ETHERSCAN_API_KEY");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ScannerConfig = toml::from_str(
            r#"
            [scan]
            daily_call_limit = 50
            "#,
        )
        .unwrap();
        assert_eq!(config.scan.daily_call_limit, 50);
        assert_eq!(config.scan.request_delay_ms, 200);
        assert_eq!(config.explorer.request_timeout_secs, 10);
    }
}
