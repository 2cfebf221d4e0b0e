//! Crate Error Type
//!
//! Single root error for the aggregation library. Two classes only:
//! configuration errors (`UnsupportedChain`, `Config`) are fatal and
//! never retried; SDK errors are propagated unchanged through the
//! aggregators and retried by the polling layer on its next heartbeat.
//! There are no partial-failure variants: a cycle either yields a full
//! aggregate or fails whole.

use thiserror::Error;

use crate::ports::options_sdk::SdkError;

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A chain id outside the supported deployments.
    #[error("chain id {0} is not supported")]
    UnsupportedChain(u64),

    /// Failure surfaced by the options SDK, wrapped unchanged.
    #[error("sdk request failed: {0}")]
    Sdk(#[from] SdkError),

    /// Invalid host configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}
