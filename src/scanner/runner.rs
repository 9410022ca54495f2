//! The scan loop.
//!
//! # Per Iteration
//! ```text
//! quota check → generate key (count attempt) → query balance
//!     Transient  → log, pause 2x delay, next
//!     FatalAuth  → stop
//!     Amount(v)  → v > 0 ? append match : (nothing) → pause delay → next
//! ```
//!
//! Shutdown is observed at iteration boundaries, during pauses and
//! while a query is in flight.

use std::time::Duration;

use alloy::primitives::U256;
use tokio::time::sleep;

use crate::blockchain::{to_ether, BalanceChecker, BalanceQueryResult, Ether, KeyPair, KeySource};
use crate::config::ScanConfig;
use crate::lifecycle::ShutdownListener;
use crate::observability::metrics;
use crate::resilience::Pacing;
use crate::scanner::record::{MatchLog, MatchRecord};
use crate::scanner::state::{ScanState, ScanSummary, StopReason};

/// Sequential key-generate-and-query loop.
pub struct Scanner<C, K> {
    checker: C,
    keys: K,
    log: MatchLog,
    pacing: Pacing,
    daily_call_limit: u64,
    state: ScanState,
    shutdown: ShutdownListener,
}

impl<C, K> Scanner<C, K>
where
    C: BalanceChecker,
    K: KeySource,
{
    pub fn new(config: &ScanConfig, checker: C, keys: K, shutdown: ShutdownListener) -> Self {
        Self {
            checker,
            keys,
            log: MatchLog::new(&config.output_file),
            pacing: Pacing::new(
                Duration::from_millis(config.request_delay_ms),
                config.max_consecutive_transient,
            ),
            daily_call_limit: config.daily_call_limit,
            state: ScanState::new(),
            shutdown,
        }
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn match_log(&self) -> &MatchLog {
        &self.log
    }

    /// Run until a terminal state is reached.
    pub async fn run(&mut self) -> StopReason {
        loop {
            if self.shutdown.is_triggered() {
                tracing::warn!("Program stopped by user");
                return StopReason::UserInterrupted;
            }

            if self.state.calls_made >= self.daily_call_limit {
                tracing::warn!(
                    limit = self.daily_call_limit,
                    "Daily API limit reached; further checks are not possible today"
                );
                return StopReason::QuotaExhausted;
            }

            let pair = self.keys.next_key();
            self.state.calls_made += 1;
            metrics::record_attempt();

            let result = tokio::select! {
                result = self.checker.check_balance(pair.address()) => result,
                _ = self.shutdown.triggered() => {
                    tracing::warn!("Program stopped by user");
                    return StopReason::UserInterrupted;
                }
            };
            metrics::record_query(result.outcome_label());

            let delay = match result {
                BalanceQueryResult::Transient(kind) => {
                    self.progress(&pair, &format!("Skipping ({} error, potentially temporary)", kind));
                    let delay = self.pacing.after_transient();
                    if self.pacing.transient_limit_reached() {
                        tracing::error!(
                            consecutive = self.pacing.consecutive_transient(),
                            "Too many consecutive transient errors, stopping"
                        );
                        return StopReason::TransientLimit;
                    }
                    delay
                }
                BalanceQueryResult::FatalAuth(reason) => {
                    self.progress(&pair, "CRITICAL ERROR: Invalid/missing API key. Stopping.");
                    return StopReason::FatalStopped(reason);
                }
                BalanceQueryResult::Amount(wei) => {
                    let balance = to_ether(wei);
                    self.progress(&pair, &format!("Balance: {} ETH", balance));
                    if wei > U256::ZERO {
                        self.record_match(&pair, balance);
                    }
                    self.pacing.after_success()
                }
            };

            if self.pause(delay).await {
                tracing::warn!("Program stopped by user");
                return StopReason::UserInterrupted;
            }
        }
    }

    /// Build the end-of-run report for `reason`.
    pub fn finish(&self, reason: StopReason) -> ScanSummary {
        let logged_matches = match self.log.count_lines() {
            Ok(count) => count.unwrap_or(0),
            Err(e) => {
                tracing::warn!(
                    path = %self.log.path().display(),
                    error = %e,
                    "Could not count found wallets"
                );
                0
            }
        };

        ScanSummary {
            reason,
            attempts: self.state.calls_made,
            matches_found: self.state.matches_found,
            logged_matches,
            elapsed: self.state.started_at.elapsed(),
        }
    }

    fn progress(&self, pair: &KeyPair, outcome: &str) {
        tracing::info!(
            "[{:>6}/{}] Checking address: {} -> {}",
            self.state.calls_made,
            self.daily_call_limit,
            pair.address_checksummed(),
            outcome
        );
    }

    fn record_match(&mut self, pair: &KeyPair, balance: Ether) {
        self.state.matches_found += 1;
        metrics::record_match();

        tracing::warn!(
            address = %pair.address_checksummed(),
            balance = %balance,
            "!!! WALLET WITH BALANCE FOUND !!!"
        );

        let record = MatchRecord::new(pair, balance);
        match self.log.append(&record) {
            Ok(()) => tracing::info!(
                path = %self.log.path().display(),
                "Information saved"
            ),
            Err(e) => {
                metrics::record_persist_failure();
                tracing::error!(
                    path = %self.log.path().display(),
                    error = %e,
                    "Error writing match to file"
                );
            }
        }
    }

    /// Sleep for `delay`; returns true if shutdown fired meanwhile.
    async fn pause(&mut self, delay: Duration) -> bool {
        tokio::select! {
            _ = sleep(delay) => false,
            _ = self.shutdown.triggered() => true,
        }
    }
}
