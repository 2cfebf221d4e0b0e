//! Spot-price candles and the live-price patch.

use serde::{Deserialize, Serialize};

use crate::ports::options_sdk::{CandleSnapshot, MarketSnapshot};

/// OHLC candle with prices converted to floating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpotPriceCandle {
    /// Closing price, duplicated for consumers plotting a single series.
    pub price: f64,
    /// Bucket start (Unix seconds); charts use this as the x value.
    pub start_timestamp: u64,
    /// Bucket end (Unix seconds).
    pub end_timestamp: u64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl SpotPriceCandle {
    /// Convert a raw SDK candle, scaling every fixed-point field.
    pub fn from_snapshot(snapshot: &CandleSnapshot) -> Self {
        let close = snapshot.close.to_f64();
        Self {
            price: close,
            start_timestamp: snapshot.start_timestamp,
            end_timestamp: snapshot.end_timestamp,
            open: snapshot.open.to_f64(),
            high: snapshot.high.to_f64(),
            low: snapshot.low.to_f64(),
            close,
        }
    }
}

/// Patch the most recent candle with the market's live spot price.
///
/// Runs on every upstream market update between fetches, with no I/O.
/// When the last candle's bucket is still open relative to the
/// market's block timestamp, its close is replaced with the current
/// spot price and the low/high bounds are widened if the live price
/// escapes them. Returns a fresh vector so consumers comparing by
/// identity observe a change; all elements but the last are copied
/// unmodified.
///
/// Applying the patch twice with the same market state yields the same
/// candles: the close overwrite and the bound widening are idempotent.
pub fn patch_latest_candle(
    candles: &[SpotPriceCandle],
    market: &MarketSnapshot,
) -> Vec<SpotPriceCandle> {
    let mut patched = candles.to_vec();
    if patched.is_empty() {
        return patched;
    }
    let last_idx = patched.len() - 1;
    if patched[last_idx].end_timestamp <= market.block_timestamp {
        // Bucket already closed; nothing to patch.
        return patched;
    }
    let spot_price = market.spot_price.to_f64();
    let last = &mut patched[last_idx];
    last.close = spot_price;
    last.price = spot_price;
    if spot_price < last.low {
        last.low = spot_price;
    }
    if spot_price > last.high {
        last.high = spot_price;
    }
    patched
}
