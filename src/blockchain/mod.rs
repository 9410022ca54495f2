//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! OS entropy
//!     → wallet.rs (private key, address derivation)
//!     → explorer.rs (balance query, response classification)
//!     → units.rs (wei → ether)
//! ```
//!
//! # Security Constraints
//! - API key ONLY from environment variables
//! - Never log private keys or the API key
//! - All HTTP calls have a configurable timeout

pub mod explorer;
pub mod types;
pub mod units;
pub mod wallet;

pub use explorer::{BalanceChecker, EtherscanClient};
pub use types::{BalanceQueryResult, ScanError, TransientKind};
pub use units::{to_ether, Ether};
pub use wallet::{KeyPair, KeySource, RandomKeys};
