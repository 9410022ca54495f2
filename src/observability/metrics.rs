//! Metrics collection and exposition.
//!
//! # Metrics
//! - `scanner_attempts_total` (counter): addresses generated and counted
//! - `scanner_balance_queries_total` (counter): query outcomes by `outcome`
//! - `scanner_matches_total` (counter): addresses found with a balance
//! - `scanner_persist_failures_total` (counter): failed match log appends
//!
//! Recording is a no-op until a recorder is installed, so library code
//! and tests call these freely.

use std::net::SocketAddr;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its HTTP scrape endpoint.
///
/// Must run inside a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_attempt() {
    metrics::counter!("scanner_attempts_total").increment(1);
}

pub fn record_query(outcome: &'static str) {
    metrics::counter!("scanner_balance_queries_total", "outcome" => outcome).increment(1);
}

pub fn record_match() {
    metrics::counter!("scanner_matches_total").increment(1);
}

pub fn record_persist_failure() {
    metrics::counter!("scanner_persist_failures_total").increment(1);
}
