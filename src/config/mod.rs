//! Configuration Module - TOML Host Configuration
//!
//! Loads and validates configuration from `optifolio.toml`. The
//! library never reads configuration implicitly: the host loads it,
//! builds its SDK adapter from the endpoint tables, and wires the
//! poller with the per-network heartbeats.

pub mod loader;

use std::time::Duration;

use serde::Deserialize;

use crate::domain::network::Network;

/// Top-level library configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,
    /// SDK endpoints, one table per deployed network. Validation
    /// rejects an empty list.
    #[serde(default)]
    pub sdk: Vec<SdkEndpointConfig>,
    /// Polling heartbeats.
    #[serde(default)]
    pub polling: PollingConfig,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Endpoints for one network's SDK deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct SdkEndpointConfig {
    /// Network this table configures.
    pub network: Network,
    /// Subgraph endpoint serving history queries.
    pub subgraph_url: String,
    /// RPC endpoint for current on-chain state.
    pub rpc_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

/// Per-network polling heartbeats for page-level fetches.
///
/// Defaults track each network's block cadence; sub-10s polling of
/// subgraph-backed data is wasted work.
#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    #[serde(default = "default_arbitrum_heartbeat")]
    pub arbitrum_heartbeat_secs: u64,
    #[serde(default = "default_optimism_heartbeat")]
    pub optimism_heartbeat_secs: u64,
}

impl PollingConfig {
    /// Portfolio page polling interval for `network`.
    pub fn heartbeat(&self, network: Network) -> Duration {
        match network {
            Network::Arbitrum => Duration::from_secs(self.arbitrum_heartbeat_secs),
            Network::Optimism => Duration::from_secs(self.optimism_heartbeat_secs),
        }
    }
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            arbitrum_heartbeat_secs: default_arbitrum_heartbeat(),
            optimism_heartbeat_secs: default_optimism_heartbeat(),
        }
    }
}

// Default value functions for serde

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_arbitrum_heartbeat() -> u64 {
    10
}

fn default_optimism_heartbeat() -> u64 {
    12
}
