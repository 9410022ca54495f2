//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (quota > 0, timeout > 0)
//! - Check the endpoint URL and metrics address parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ScannerConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use crate::config::schema::ScannerConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &ScannerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match url::Url::parse(&config.explorer.api_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "explorer.api_url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "explorer.api_url",
            format!("invalid URL '{}': {}", config.explorer.api_url, e),
        )),
    }

    if config.explorer.api_key_env.trim().is_empty() {
        errors.push(ValidationError::new("explorer.api_key_env", "must not be empty"));
    }

    if config.explorer.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "explorer.request_timeout_secs",
            "must be greater than 0",
        ));
    }

    if config.scan.output_file.trim().is_empty() {
        errors.push(ValidationError::new("scan.output_file", "must not be empty"));
    }

    if config.scan.daily_call_limit == 0 {
        errors.push(ValidationError::new(
            "scan.daily_call_limit",
            "must be greater than 0",
        ));
    }

    if config.scan.max_consecutive_transient == Some(0) {
        errors.push(ValidationError::new(
            "scan.max_consecutive_transient",
            "must be greater than 0 when set",
        ));
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::new(
            "observability.log_level",
            format!("unknown level '{}'", config.observability.log_level),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("invalid socket address '{}'", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&ScannerConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ScannerConfig::default();
        config.explorer.api_url = "not a url".to_string();
        config.scan.daily_call_limit = 0;
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].field, "explorer.api_url");
        assert_eq!(errors[1].field, "scan.daily_call_limit");
        assert_eq!(errors[2].field, "observability.log_level");
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = ScannerConfig::default();
        config.explorer.api_url = "ftp://api.etherscan.io/api".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(errors[0].message.contains("ftp"));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = ScannerConfig::default();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "observability.metrics_address");
    }

    #[test]
    fn test_zero_transient_cap_rejected() {
        let mut config = ScannerConfig::default();
        config.scan.max_consecutive_transient = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
