//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → CLI overrides (main.rs)
//!     → ScannerConfig (validated, immutable for the run)
//!
//! Environment:
//!     ETHERSCAN_API_KEY → loader::api_key_from_env (read once at startup)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults so the scanner runs without a config file
//! - Validation separates syntactic (serde) from semantic checks
//! - Secrets come only from the environment, never from the file

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{api_key_from_env, load_config, ConfigError};
pub use schema::{ExplorerConfig, ObservabilityConfig, ScanConfig, ScannerConfig};
pub use validation::{validate_config, ValidationError};
