//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ScannerConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    /// The API key environment variable is unset or blank.
    #[error("Environment variable {0} is not set")]
    MissingApiKey(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ScannerConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: ScannerConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Read the explorer API key from the configured environment variable.
///
/// Blank values count as missing.
pub fn api_key_from_env(var: &str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key.trim().to_string()),
        _ => Err(ConfigError::MissingApiKey(var.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [explorer]
            request_timeout_secs = 3

            [scan]
            output_file = "hits.txt"
            request_delay_ms = 500
            "#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.explorer.request_timeout_secs, 3);
        assert_eq!(config.scan.output_file, "hits.txt");
        assert_eq!(config.scan.request_delay_ms, 500);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_load_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan]\ndaily_call_limit = 0").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("scan.daily_call_limit"));
    }

    #[test]
    fn test_load_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scan\nnope").unwrap();
        assert!(matches!(
            load_config(file.path()).unwrap_err(),
            ConfigError::Parse(_)
        ));
    }

    #[test]
    fn test_api_key_missing() {
        let err = api_key_from_env("WALLET_SCANNER_TEST_UNSET_KEY").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable WALLET_SCANNER_TEST_UNSET_KEY is not set"
        );
    }

    #[test]
    fn test_api_key_blank_is_missing() {
        std::env::set_var("WALLET_SCANNER_TEST_BLANK_KEY", "   ");
        assert!(api_key_from_env("WALLET_SCANNER_TEST_BLANK_KEY").is_err());

        std::env::set_var("WALLET_SCANNER_TEST_SET_KEY", " abc123 ");
        assert_eq!(api_key_from_env("WALLET_SCANNER_TEST_SET_KEY").unwrap(), "abc123");
    }
}
