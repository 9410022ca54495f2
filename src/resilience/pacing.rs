//! Request pacing with a fixed transient-error penalty.

use std::time::Duration;

/// Multiplier applied to the base delay after a transient error.
pub const TRANSIENT_DELAY_FACTOR: u32 = 2;

/// Pause schedule for the scan loop.
///
/// No exponential growth and no jitter: every success waits `base`,
/// every transient failure waits `base * 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    base: Duration,
    max_consecutive_transient: Option<u32>,
    consecutive_transient: u32,
}

impl Pacing {
    pub fn new(base: Duration, max_consecutive_transient: Option<u32>) -> Self {
        Self {
            base,
            max_consecutive_transient,
            consecutive_transient: 0,
        }
    }

    /// Delay after a successful query. Resets the transient streak.
    pub fn after_success(&mut self) -> Duration {
        self.consecutive_transient = 0;
        self.base
    }

    /// Delay after a transient failure.
    pub fn after_transient(&mut self) -> Duration {
        self.consecutive_transient = self.consecutive_transient.saturating_add(1);
        self.base.saturating_mul(TRANSIENT_DELAY_FACTOR)
    }

    /// True once the configured streak limit is reached.
    pub fn transient_limit_reached(&self) -> bool {
        self.max_consecutive_transient
            .is_some_and(|max| self.consecutive_transient >= max)
    }

    pub fn consecutive_transient(&self) -> u32 {
        self.consecutive_transient
    }

    pub fn base(&self) -> Duration {
        self.base
    }
}
