//! Startup checks that run before the scan loop exists.
//!
//! # Responsibilities
//! - Resolve the explorer API key from the environment
//! - Build the explorer client from validated configuration
//!
//! # Design Decisions
//! - Fail fast: a missing key stops the process before any query
//! - Every startup failure maps to the configuration exit status

use thiserror::Error;

use crate::blockchain::{EtherscanClient, ScanError};
use crate::config::{api_key_from_env, ConfigError, ExplorerConfig};

/// Exit status for configuration problems (missing key, bad config).
pub const EXIT_CONFIG: u8 = 2;

/// Errors that stop the process before scanning starts.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("{0}")]
    MissingApiKey(#[source] ConfigError),

    #[error("Failed to create explorer client: {0}")]
    Client(#[from] ScanError),
}

impl StartupError {
    pub fn exit_status(&self) -> u8 {
        EXIT_CONFIG
    }
}

/// Read the API key named by `config.api_key_env` and build the client.
pub fn prepare_client(config: &ExplorerConfig) -> Result<EtherscanClient, StartupError> {
    let api_key = api_key_from_env(&config.api_key_env).map_err(StartupError::MissingApiKey)?;
    tracing::info!("Etherscan API key detected.");

    Ok(EtherscanClient::new(config, api_key)?)
}
