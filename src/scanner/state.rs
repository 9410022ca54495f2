//! Scan counters and terminal states.

use std::process::ExitCode;
use std::time::Duration;

use tokio::time::Instant;

/// Why the scan loop stopped.
///
/// No variant covers unexpected errors: no loop step can fail that way,
/// and a panic unwinds past the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// `daily_call_limit` attempts were made.
    QuotaExhausted,
    /// The explorer rejected (or never got) an API key.
    FatalStopped(String),
    /// Ctrl+C or SIGTERM.
    UserInterrupted,
    /// `max_consecutive_transient` errors in a row.
    TransientLimit,
}

impl StopReason {
    /// Process exit status for this terminal state.
    pub fn exit_status(&self) -> u8 {
        match self {
            StopReason::FatalStopped(_) => 1,
            _ => 0,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn describe(&self) -> String {
        match self {
            StopReason::QuotaExhausted => "daily API limit reached".to_string(),
            StopReason::FatalStopped(msg) => format!("fatal API key error: {}", msg),
            StopReason::UserInterrupted => "stopped by user".to_string(),
            StopReason::TransientLimit => "too many consecutive transient errors".to_string(),
        }
    }
}

/// Process-local counters for one run.
#[derive(Debug, Clone)]
pub struct ScanState {
    pub calls_made: u64,
    pub matches_found: u64,
    pub started_at: Instant,
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            calls_made: 0,
            matches_found: 0,
            started_at: Instant::now(),
        }
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// End-of-run report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    pub reason: StopReason,
    /// Attempts counted this run.
    pub attempts: u64,
    /// Matches seen this run, persisted or not.
    pub matches_found: u64,
    /// Lines in the output log (all runs); 0 when the file is absent.
    pub logged_matches: usize,
    pub elapsed: Duration,
}

impl ScanSummary {
    pub fn log(&self, output_file: &str) {
        tracing::info!(reason = %self.reason.describe(), "Program finished");
        tracing::info!(
            attempts = self.attempts,
            elapsed_secs = self.elapsed.as_secs_f64(),
            "Total addresses checked (API attempts): {}",
            self.attempts
        );
        tracing::info!(
            found_this_run = self.matches_found,
            "Found wallets with balance > 0, written to '{}': {}",
            output_file,
            self.logged_matches
        );
    }
}
