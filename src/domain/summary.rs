//! Portfolio summary reductions.
//!
//! Pure arithmetic over already-converted history sequences. Every
//! reduction is total: an empty window produces zero, never a panic or
//! a division by zero. Sequences are assumed chronologically ordered,
//! which the SDK port guarantees.

use serde::{Deserialize, Serialize};

use crate::domain::candle::SpotPriceCandle;
use crate::ports::options_sdk::{
    LiquiditySnapshot, MarketSnapshot, OpenPosition, VolumeSnapshot,
};

/// Per-market summary row on the portfolio page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMarketData {
    /// The market snapshot the row was derived from.
    pub market: MarketSnapshot,
    /// Current spot price of the underlying.
    pub spot_price: f64,
    /// Fractional change against the trailing-day baseline.
    pub spot_price_24h_change: f64,
    /// Net notional volume over the trailing month.
    pub total_notional_volume_30d: f64,
    /// Vault fees accrued over the trailing month.
    pub total_fees_30d: f64,
    /// Open interest in quote terms (contracts × spot).
    pub open_interest: f64,
    /// Total value locked in the market's vault.
    pub tvl: f64,
}

/// Aggregate returned to the portfolio page.
///
/// `Default` is the empty aggregate handed out when no markets exist.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioPageData {
    pub market_data: Vec<PortfolioMarketData>,
    /// Open positions sorted ascending by expiry.
    pub open_positions: Vec<OpenPosition>,
}

/// Fractional price change against the earliest trailing-day candle.
///
/// Zero when the window is empty or the baseline close is zero; a zero
/// baseline has no meaningful percentage change.
pub fn spot_price_24h_change(spot_price: f64, history: &[SpotPriceCandle]) -> f64 {
    let baseline = history.first().map_or(0.0, |c| c.close);
    if baseline == 0.0 {
        0.0
    } else {
        (spot_price - baseline) / baseline
    }
}

/// Net notional volume across a window of cumulative samples.
///
/// The samples carry lifetime running totals, so the window's volume
/// is last minus first. Zero for empty and single-sample windows.
pub fn total_notional_volume(history: &[VolumeSnapshot]) -> f64 {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) => {
            last.total_notional_volume.to_f64() - first.total_notional_volume.to_f64()
        }
        _ => 0.0,
    }
}

/// Sum of per-bucket vault fees across a window; zero when empty.
pub fn total_fees(history: &[VolumeSnapshot]) -> f64 {
    history.iter().map(|s| s.vault_fees.to_f64()).sum()
}

/// Assemble the summary row for one market from its fetched histories.
pub fn derive_market_summary(
    market: &MarketSnapshot,
    spot_history: &[SpotPriceCandle],
    volume_history: &[VolumeSnapshot],
    liquidity: &LiquiditySnapshot,
) -> PortfolioMarketData {
    let spot_price = market.spot_price.to_f64();
    PortfolioMarketData {
        market: market.clone(),
        spot_price,
        spot_price_24h_change: spot_price_24h_change(spot_price, spot_history),
        total_notional_volume_30d: total_notional_volume(volume_history),
        total_fees_30d: total_fees(volume_history),
        open_interest: market.open_interest.to_f64() * spot_price,
        tvl: liquidity.tvl.to_f64(),
    }
}

/// Sort open positions ascending by expiry for display.
pub fn sort_positions_by_expiry(mut positions: Vec<OpenPosition>) -> Vec<OpenPosition> {
    positions.sort_by_key(|p| p.expiry_timestamp);
    positions
}
