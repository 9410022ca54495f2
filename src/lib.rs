//! Ethereum wallet balance scanner library.

pub mod blockchain;
pub mod config;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod scanner;

pub use config::ScannerConfig;
pub use lifecycle::Shutdown;
pub use scanner::{Scanner, StopReason};
