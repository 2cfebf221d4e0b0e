//! Spot-Price History Use Case - Chart Candle Fetching
//!
//! Fetches the candle history for one market over a display window and
//! converts every fixed-point price at the boundary. The live-price
//! patch that keeps the open candle current between fetches is the
//! pure [`patch_latest_candle`] re-exported here; callers re-run it on
//! every market update with no I/O.

use std::sync::Arc;

use tracing::{debug, instrument};

pub use crate::domain::candle::patch_latest_candle;
use crate::domain::candle::SpotPriceCandle;
use crate::domain::network::Network;
use crate::domain::period::{ChartPeriod, SnapshotPeriod};
use crate::error::Result;
use crate::ports::options_sdk::{HistoryParams, OptionsSdk};

/// Fetches display-ready spot-price candles for a single market.
pub struct SpotPriceHistory<S: OptionsSdk> {
    sdk: Arc<S>,
}

impl<S: OptionsSdk> SpotPriceHistory<S> {
    pub fn new(sdk: Arc<S>) -> Self {
        Self { sdk }
    }

    /// Fetch candles for `market_ref` covering the requested window.
    ///
    /// The window start is anchored to the market's latest block
    /// timestamp, not wall-clock time, so a lagging chain never
    /// produces an empty leading gap. A missing market propagates
    /// unchanged; so does any upstream failure.
    #[instrument(skip(self), fields(network = %network, market = market_ref))]
    pub async fn fetch(
        &self,
        network: Network,
        market_ref: &str,
        period: ChartPeriod,
        candle_duration: Option<SnapshotPeriod>,
    ) -> Result<Vec<SpotPriceCandle>> {
        let market = self.sdk.market(network, market_ref).await?;
        let start_timestamp = period.start_timestamp(market.block_timestamp);

        let snapshots = self
            .sdk
            .spot_price_history(
                network,
                &market.address,
                HistoryParams {
                    start_timestamp,
                    period: candle_duration,
                },
            )
            .await?;

        debug!(
            candles = snapshots.len(),
            start_timestamp, "Fetched spot price history"
        );

        Ok(snapshots.iter().map(SpotPriceCandle::from_snapshot).collect())
    }
}
