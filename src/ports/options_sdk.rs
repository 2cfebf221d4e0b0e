//! Options SDK Port - Protocol Data Interface
//!
//! Defines the trait for reading market, history, liquidity and
//! position data from the external blockchain SDK. Every call is keyed
//! by [`Network`] so the library never holds ambient chain state; the
//! host wires one implementation per process and hands it to the
//! aggregators behind an `Arc`.
//!
//! All numeric fields cross this boundary as raw 18-decimal
//! [`FixedPoint`] values and are converted to `f64` by the domain
//! layer before any arithmetic.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::fixed::FixedPoint;
use crate::domain::network::Network;
use crate::domain::period::SnapshotPeriod;

/// Errors surfaced by SDK calls.
///
/// Propagated unchanged through the aggregators: a failing call fails
/// the whole aggregation cycle and the polling layer retries on the
/// next heartbeat. Nothing here is retried inline.
#[derive(Debug, Error)]
pub enum SdkError {
    /// The market reference resolved to nothing on this network.
    #[error("market not found: {0}")]
    MarketNotFound(String),

    /// Any upstream failure: RPC timeout, subgraph error, revert.
    #[error("upstream request failed: {0}")]
    Upstream(String),
}

/// Current on-chain state of one options market.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Market contract address.
    pub address: String,
    /// Symbolic market name, e.g. "ETH-USDC".
    pub name: String,
    /// Block the snapshot was taken at.
    pub block_number: u64,
    /// Timestamp of that block (Unix seconds).
    pub block_timestamp: u64,
    /// Current spot price of the underlying (fixed-point).
    pub spot_price: FixedPoint,
    /// Total open option contracts in the market (fixed-point).
    pub open_interest: FixedPoint,
}

/// Raw OHLC candle for one snapshot bucket (fixed-point prices).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CandleSnapshot {
    /// Bucket start (Unix seconds).
    pub start_timestamp: u64,
    /// Bucket end (Unix seconds); open buckets end in the future.
    pub end_timestamp: u64,
    pub open: FixedPoint,
    pub high: FixedPoint,
    pub low: FixedPoint,
    pub close: FixedPoint,
}

/// Cumulative trading-volume sample.
///
/// `total_notional_volume` is a lifetime running total, so a window's
/// net volume is last minus first, not a sum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VolumeSnapshot {
    /// Sample timestamp (Unix seconds).
    pub timestamp: u64,
    /// Lifetime cumulative notional volume (fixed-point).
    pub total_notional_volume: FixedPoint,
    /// Fees accrued to the vault during this bucket (fixed-point).
    pub vault_fees: FixedPoint,
}

/// Liquidity state of a market's vault.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LiquiditySnapshot {
    /// Total value locked (fixed-point).
    pub tvl: FixedPoint,
    /// Liquidity available for new positions (fixed-point).
    pub free_liquidity: FixedPoint,
    /// Liquidity backing open positions (fixed-point).
    pub used_liquidity: FixedPoint,
}

/// An open option position owned by some address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenPosition {
    /// Protocol-assigned position id.
    pub id: u64,
    /// Market the position is open in.
    pub market_address: String,
    /// Owner wallet address.
    pub owner: String,
    /// Call or put.
    pub is_call: bool,
    /// Long or short.
    pub is_long: bool,
    /// Contracts held (fixed-point).
    pub size: FixedPoint,
    /// Strike price (fixed-point).
    pub strike_price: FixedPoint,
    /// Expiry (Unix seconds). Display order is ascending expiry.
    pub expiry_timestamp: u64,
}

impl OpenPosition {
    /// Expiry as a UTC datetime for display formatting.
    pub fn expiry_datetime(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.expiry_timestamp as i64, 0).unwrap_or_default()
    }

    /// Whether the option has expired relative to `block_timestamp`.
    pub fn is_expired(&self, block_timestamp: u64) -> bool {
        self.expiry_timestamp <= block_timestamp
    }
}

/// Query window for the history calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryParams {
    /// Inclusive window start (Unix seconds); the end is "now".
    pub start_timestamp: u64,
    /// Requested bucket granularity; `None` lets the SDK pick the
    /// finest granularity it has for the window.
    pub period: Option<SnapshotPeriod>,
}

/// Trait for the external options-protocol SDK.
///
/// Implementors issue the underlying subgraph/RPC requests. History
/// sequences must be returned in chronological order; the aggregators
/// rely on first/last positioning for their reductions.
#[async_trait]
pub trait OptionsSdk: Send + Sync + 'static {
    /// List all known markets on `network`.
    async fn list_markets(&self, network: Network) -> Result<Vec<MarketSnapshot>, SdkError>;

    /// Resolve a market by contract address or symbolic name.
    ///
    /// Fails with [`SdkError::MarketNotFound`] when the reference does
    /// not exist on this network.
    async fn market(&self, network: Network, market_ref: &str)
    -> Result<MarketSnapshot, SdkError>;

    /// Spot-price candles for `[params.start_timestamp, now]`.
    async fn spot_price_history(
        &self,
        network: Network,
        market_address: &str,
        params: HistoryParams,
    ) -> Result<Vec<CandleSnapshot>, SdkError>;

    /// Cumulative volume samples for `[params.start_timestamp, now]`.
    async fn trading_volume_history(
        &self,
        network: Network,
        market_address: &str,
        params: HistoryParams,
    ) -> Result<Vec<VolumeSnapshot>, SdkError>;

    /// Current liquidity snapshot for one market.
    async fn liquidity(
        &self,
        network: Network,
        market_address: &str,
    ) -> Result<LiquiditySnapshot, SdkError>;

    /// All open option positions owned by `owner`.
    async fn open_positions(
        &self,
        network: Network,
        owner: &str,
    ) -> Result<Vec<OpenPosition>, SdkError>;
}
