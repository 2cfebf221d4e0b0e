//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `optifolio.toml`, validating all parameters, and
//! providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AppConfig =
        toml::from_str(&content).with_context(|| "Failed to parse optifolio.toml")?;

    validate_config(&config)?;

    info!(
        networks = config.sdk.len(),
        log_level = %config.log.level,
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate all configuration parameters.
fn validate_config(config: &AppConfig) -> Result<()> {
    anyhow::ensure!(
        !config.sdk.is_empty(),
        "At least one [[sdk]] endpoint table must be configured"
    );

    for (i, endpoint) in config.sdk.iter().enumerate() {
        anyhow::ensure!(
            !endpoint.subgraph_url.is_empty(),
            "SDK endpoint {} ({}) has empty subgraph_url",
            i,
            endpoint.network
        );
        anyhow::ensure!(
            !endpoint.rpc_url.is_empty(),
            "SDK endpoint {} ({}) has empty rpc_url",
            i,
            endpoint.network
        );
        anyhow::ensure!(
            endpoint.timeout_seconds > 0,
            "SDK endpoint {} ({}) has zero timeout",
            i,
            endpoint.network
        );
    }

    let duplicated = config
        .sdk
        .iter()
        .enumerate()
        .any(|(i, a)| config.sdk[..i].iter().any(|b| a.network == b.network));
    anyhow::ensure!(!duplicated, "Duplicate [[sdk]] table for one network");

    anyhow::ensure!(
        config.polling.arbitrum_heartbeat_secs > 0
            && config.polling.optimism_heartbeat_secs > 0,
        "Polling heartbeats must be positive"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::Network;

    #[test]
    fn test_load_nonexistent_file() {
        let result = load_config("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [[sdk]]
            network = "arbitrum"
            subgraph_url = "https://subgraph.example/arbitrum"
            rpc_url = "https://rpc.example/arbitrum"
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.sdk[0].network, Network::Arbitrum);
        assert_eq!(config.sdk[0].timeout_seconds, 30);
        assert_eq!(config.log.level, "info");
        assert_eq!(config.polling.arbitrum_heartbeat_secs, 10);
    }

    #[test]
    fn test_empty_sdk_tables_rejected() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_duplicate_network_rejected() {
        let config: AppConfig = toml::from_str(
            r#"
            [[sdk]]
            network = "optimism"
            subgraph_url = "a"
            rpc_url = "b"

            [[sdk]]
            network = "optimism"
            subgraph_url = "c"
            rpc_url = "d"
            "#,
        )
        .unwrap();
        assert!(validate_config(&config).is_err());
    }
}
