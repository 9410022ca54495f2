//! Chain-specific types and error definitions.

use alloy::primitives::U256;
use thiserror::Error;

/// Errors that can occur while setting up blockchain access.
#[derive(Debug, Error)]
pub enum ScanError {
    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Explorer endpoint URL is malformed.
    #[error("Invalid explorer URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),
}

/// Result type for blockchain operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Why a balance query could not produce an amount this time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransientKind {
    /// Timeout, DNS, refused connection or non-2xx status.
    Network,
    /// Body was not the expected JSON.
    Decode,
    /// Success response whose `result` is not an integer.
    InvalidBalance,
    /// Explorer reported a rate limit.
    RateLimited,
    /// Any other failure-shaped response.
    Api,
}

impl TransientKind {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransientKind::Network => "network",
            TransientKind::Decode => "decode",
            TransientKind::InvalidBalance => "invalid_balance",
            TransientKind::RateLimited => "rate_limited",
            TransientKind::Api => "api",
        }
    }
}

impl std::fmt::Display for TransientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified outcome of one balance query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceQueryResult {
    /// Balance in wei.
    Amount(U256),
    /// Recoverable failure; the caller skips the address and backs off.
    Transient(TransientKind),
    /// Credentials are missing or rejected; scanning cannot continue.
    FatalAuth(String),
}

impl BalanceQueryResult {
    /// Label used for the `outcome` metric dimension.
    pub fn outcome_label(&self) -> &'static str {
        match self {
            BalanceQueryResult::Amount(_) => "amount",
            BalanceQueryResult::Transient(kind) => kind.as_str(),
            BalanceQueryResult::FatalAuth(_) => "fatal_auth",
        }
    }
}
