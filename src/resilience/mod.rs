//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Balance query outcome:
//!     → pacing.rs (base delay, or doubled after a transient error)
//!     → optional stop after N transient errors in a row
//! ```
//!
//! # Design Decisions
//! - Timeouts live on the HTTP client (explorer.request_timeout_secs)
//! - Failed addresses are never retried; the loop moves on to a new key

pub mod pacing;

pub use pacing::Pacing;
