//! Portfolio Use Case - Page Aggregation
//!
//! Assembles the portfolio page in one shot: every known market with
//! its trailing-day price change, trailing-month volume and fees, open
//! interest and TVL, plus the owner's open positions sorted by expiry.
//!
//! All fetches in a cycle are fanned out before any is awaited and
//! joined with all-or-nothing semantics: the first failure aborts the
//! whole cycle and no partial aggregate ever escapes. The polling
//! adapter re-runs the computation wholesale each heartbeat.

use std::sync::Arc;

use futures_util::future::try_join_all;
use tracing::{debug, instrument};

use crate::domain::candle::SpotPriceCandle;
use crate::domain::network::Network;
use crate::domain::period::{SECONDS_IN_DAY, SECONDS_IN_MONTH, SnapshotPeriod};
use crate::domain::summary::{self, PortfolioPageData};
use crate::error::Result;
use crate::ports::options_sdk::{HistoryParams, OpenPosition, OptionsSdk, SdkError};

/// Aggregates the portfolio page for one network and owner.
pub struct PortfolioAggregator<S: OptionsSdk> {
    sdk: Arc<S>,
}

impl<S: OptionsSdk> PortfolioAggregator<S> {
    pub fn new(sdk: Arc<S>) -> Self {
        Self { sdk }
    }

    /// Fetch the full portfolio page for `owner` on `network`.
    ///
    /// `owner == None` (no wallet connected) yields an empty position
    /// list without touching the positions endpoint. Zero markets
    /// short-circuit to the empty aggregate with no per-market I/O.
    #[instrument(skip(self), fields(network = %network, owner = owner.unwrap_or("-")))]
    pub async fn fetch(&self, network: Network, owner: Option<&str>) -> Result<PortfolioPageData> {
        let (markets, open_positions) = tokio::try_join!(
            self.sdk.list_markets(network),
            self.fetch_positions(network, owner),
        )?;

        if markets.is_empty() {
            debug!("No markets listed, returning empty portfolio");
            return Ok(PortfolioPageData::default());
        }

        // Every history window is measured against the same anchor:
        // the block timestamp the market list was served at.
        let now = markets[0].block_timestamp;

        let histories = try_join_all(markets.iter().map(|market| async move {
            tokio::try_join!(
                self.sdk.spot_price_history(
                    network,
                    &market.address,
                    HistoryParams {
                        start_timestamp: now.saturating_sub(SECONDS_IN_DAY),
                        period: Some(SnapshotPeriod::EightHours),
                    },
                ),
                self.sdk.trading_volume_history(
                    network,
                    &market.address,
                    HistoryParams {
                        start_timestamp: now.saturating_sub(SECONDS_IN_MONTH),
                        period: Some(SnapshotPeriod::OneDay),
                    },
                ),
                self.sdk.liquidity(network, &market.address),
            )
        }))
        .await?;

        let market_data = markets
            .iter()
            .zip(&histories)
            .map(|(market, (spot_history, volume_history, liquidity))| {
                let spot_history: Vec<SpotPriceCandle> = spot_history
                    .iter()
                    .map(SpotPriceCandle::from_snapshot)
                    .collect();
                summary::derive_market_summary(market, &spot_history, volume_history, liquidity)
            })
            .collect();

        debug!(
            markets = markets.len(),
            positions = open_positions.len(),
            "Portfolio page assembled"
        );

        Ok(PortfolioPageData {
            market_data,
            open_positions: summary::sort_positions_by_expiry(open_positions),
        })
    }

    async fn fetch_positions(
        &self,
        network: Network,
        owner: Option<&str>,
    ) -> std::result::Result<Vec<OpenPosition>, SdkError> {
        match owner {
            Some(owner) => self.sdk.open_positions(network, owner).await,
            None => Ok(Vec::new()),
        }
    }
}
