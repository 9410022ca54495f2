//! Block-explorer balance client with response classification.
//!
//! # Responsibilities
//! - Issue one `account/balance` GET per address
//! - Classify the outcome as amount, transient failure or fatal auth error
//! - Emit a diagnostic for every non-success classification
//!
//! Retrying is the caller's business; nothing here loops.

use std::future::Future;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use serde_json::Value;

use crate::blockchain::types::{BalanceQueryResult, ScanError, ScanResult, TransientKind};
use crate::config::ExplorerConfig;

const INVALID_API_KEY: &str = "Invalid API Key";
const RATE_LIMIT_MARKERS: [&str; 2] = ["rate limit", "limit exceeded"];

/// Anything that can report an address balance.
pub trait BalanceChecker {
    fn check_balance(&self, address: Address) -> impl Future<Output = BalanceQueryResult>;
}

/// Raw explorer reply, read loosely so odd shapes still classify.
#[derive(Debug)]
struct ExplorerResponse {
    status: Option<String>,
    message: Option<String>,
    /// `None` when the key is absent; `Some(Value::Null)` when it is `null`.
    result: Option<Value>,
}

impl ExplorerResponse {
    /// `None` unless the body is a JSON object.
    fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut obj) = value else {
            return None;
        };
        Some(Self {
            status: obj.get("status").and_then(scalar_text),
            message: obj.get("message").and_then(scalar_text),
            result: obj.remove("result"),
        })
    }

    fn result_text(&self) -> String {
        match &self.result {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status.as_deref() == Some("1") && self.message.as_deref() == Some("OK")
    }
}

/// Strings as-is, numbers in decimal; anything else is unreadable.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Etherscan-compatible balance client.
#[derive(Clone)]
pub struct EtherscanClient {
    http: reqwest::Client,
    endpoint: url::Url,
    api_key: String,
    chain_id: Option<u64>,
}

impl EtherscanClient {
    /// Create a client for the configured endpoint.
    ///
    /// An empty `api_key` is accepted here; every query then fails with
    /// [`BalanceQueryResult::FatalAuth`] without touching the network.
    pub fn new(config: &ExplorerConfig, api_key: impl Into<String>) -> ScanResult<Self> {
        let endpoint = url::Url::parse(&config.api_url).map_err(|e| ScanError::InvalidUrl {
            url: config.api_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.request_timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let http = builder
            .build()
            .map_err(|e| ScanError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            api_key: api_key.into(),
            chain_id: config.chain_id,
        })
    }

    /// The balance-query endpoint.
    pub fn endpoint(&self) -> &url::Url {
        &self.endpoint
    }

    async fn fetch(&self, address: &str) -> Result<String, reqwest::Error> {
        let mut request = self.http.get(self.endpoint.clone()).query(&[
            ("module", "account"),
            ("action", "balance"),
            ("address", address),
            ("tag", "latest"),
            ("apikey", self.api_key.as_str()),
        ]);
        if let Some(chain_id) = self.chain_id {
            request = request.query(&[("chainid", chain_id)]);
        }

        request.send().await?.error_for_status()?.text().await
    }
}

impl BalanceChecker for EtherscanClient {
    async fn check_balance(&self, address: Address) -> BalanceQueryResult {
        if self.api_key.trim().is_empty() {
            tracing::error!("Explorer API key not set");
            return BalanceQueryResult::FatalAuth("API key not set".to_string());
        }

        let address = address.to_checksum(None);
        match self.fetch(&address).await {
            Ok(body) => classify_body(&address, &body),
            Err(e) => {
                tracing::warn!(address = %address, error = %e, "Balance request failed");
                BalanceQueryResult::Transient(TransientKind::Network)
            }
        }
    }
}

impl std::fmt::Debug for EtherscanClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EtherscanClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// Classify an explorer response body for `address`.
pub fn classify_body(address: &str, body: &str) -> BalanceQueryResult {
    let response = match serde_json::from_str::<Value>(body) {
        Ok(value) => ExplorerResponse::from_value(value),
        Err(e) => {
            tracing::warn!(address = %address, error = %e, "Failed to parse explorer response");
            return BalanceQueryResult::Transient(TransientKind::Decode);
        }
    };
    let Some(response) = response else {
        tracing::warn!(address = %address, "Explorer response is not a JSON object");
        return BalanceQueryResult::Transient(TransientKind::Decode);
    };

    let result = response.result_text();

    if response.is_ok() {
        // Absent result reads as zero; `null` does not.
        let digits = match &response.result {
            None => "0",
            Some(Value::Null) => "",
            Some(_) => result.trim(),
        };
        return match U256::from_str_radix(digits, 10) {
            Ok(wei) if !digits.is_empty() => BalanceQueryResult::Amount(wei),
            _ => {
                tracing::warn!(address = %address, result = %result, "Balance is not an integer");
                BalanceQueryResult::Transient(TransientKind::InvalidBalance)
            }
        };
    }

    if response.message.as_deref() == Some("NOTOK") && result.contains(INVALID_API_KEY) {
        tracing::error!(result = %result, "Explorer rejected the API key");
        return BalanceQueryResult::FatalAuth(result);
    }

    let lowered = result.to_lowercase();
    if RATE_LIMIT_MARKERS.iter().any(|m| lowered.contains(m)) {
        tracing::warn!(address = %address, result = %result, "Explorer rate limit hit");
        return BalanceQueryResult::Transient(TransientKind::RateLimited);
    }

    let detail = if result.is_empty() { "Unknown API error" } else { result.as_str() };
    tracing::warn!(address = %address, result = %detail, "Explorer API error");
    BalanceQueryResult::Transient(TransientKind::Api)
}
