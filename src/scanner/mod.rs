//! Scan orchestration.
//!
//! # Data Flow
//! ```text
//! KeySource → Scanner::run → BalanceChecker
//!                  │
//!                  ├── Amount > 0 → MatchLog (append-only file)
//!                  └── StopReason → Scanner::finish → ScanSummary
//! ```
//!
//! # Design Decisions
//! - Counters live in `ScanState`, owned by the scanner, never global
//! - One attempt is counted per generated key, whatever the query outcome
//! - Terminal states are returned, not raised; main maps them to exit codes

pub mod record;
pub mod runner;
pub mod state;

pub use record::{MatchLog, MatchRecord};
pub use runner::Scanner;
pub use state::{ScanState, ScanSummary, StopReason};
