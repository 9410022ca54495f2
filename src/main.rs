//! Ethereum wallet balance scanner.
//!
//! Generates random key pairs, asks a block explorer for each address's
//! balance and appends any funded address to an append-only log.
//!
//! ```text
//!   config (TOML + CLI) ──┐
//!   ETHERSCAN_API_KEY ────┼─▶ Scanner::run ──▶ ScanSummary ──▶ exit code
//!   Ctrl+C / SIGTERM ─────┘        │
//!                                  ├─▶ EtherscanClient (reqwest)
//!                                  └─▶ found_wallets.txt
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use wallet_scanner::blockchain::RandomKeys;
use wallet_scanner::config::{self, ConfigError, ScannerConfig};
use wallet_scanner::lifecycle::{
    prepare_client, spawn_signal_listener, Shutdown, StartupError, EXIT_CONFIG,
};
use wallet_scanner::observability::{logging, metrics};
use wallet_scanner::Scanner;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Match log path.
    #[arg(short, long)]
    output: Option<String>,

    /// Pause between requests in milliseconds.
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Maximum attempts for this run.
    #[arg(long)]
    limit: Option<u64>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    log_level: Option<String>,
}

impl Args {
    fn resolve_config(&self) -> Result<ScannerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => config::load_config(path)?,
            None => ScannerConfig::default(),
        };

        if let Some(output) = &self.output {
            config.scan.output_file = output.clone();
        }
        if let Some(delay_ms) = self.delay_ms {
            config.scan.request_delay_ms = delay_ms;
        }
        if let Some(limit) = self.limit {
            config.scan.daily_call_limit = limit;
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }

        config::validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let config = match args.resolve_config() {
        Ok(c) => c,
        Err(e) => {
            logging::init("info");
            tracing::error!("Failed to load config: {}", e);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    logging::init(&config.observability.log_level);
    tracing::info!("Starting Ethereum wallet balance scanner...");

    let client = match prepare_client(&config.explorer) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("{}", e);
            if matches!(e, StartupError::MissingApiKey(_)) {
                tracing::error!("Get a free API key from https://etherscan.io/myaccount and set it.");
                tracing::error!(
                    "Example: export {}='YOUR_KEY_HERE'",
                    config.explorer.api_key_env
                );
                tracing::error!("Program stopped due to missing API key.");
            }
            return ExitCode::from(e.exit_status());
        }
    };

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse::<SocketAddr>() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let delay_secs = config.scan.request_delay_ms as f64 / 1000.0;
    tracing::info!(
        endpoint = %client.endpoint(),
        output_file = %config.scan.output_file,
        "Wallets with balance > 0 will be saved to '{}'",
        config.scan.output_file
    );
    if config.scan.request_delay_ms > 0 {
        tracing::info!(
            "Configured request delay: {} sec ({} requests/sec)",
            delay_secs,
            1.0 / delay_secs
        );
    } else {
        tracing::info!("Configured request delay: 0 sec (unpaced)");
    }
    tracing::info!("Daily API call limit: {}", config.scan.daily_call_limit);
    tracing::info!("Press Ctrl+C to stop.");

    let shutdown = Arc::new(Shutdown::new());
    let listener = shutdown.subscribe();
    let signals = spawn_signal_listener(shutdown.clone());

    let mut scanner = Scanner::new(&config.scan, client, RandomKeys, listener);
    let reason = scanner.run().await;
    signals.abort();

    let summary = scanner.finish(reason);
    summary.log(&config.scan.output_file);

    summary.reason.exit_code()
}
