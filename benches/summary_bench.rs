//! Reduction Benchmarks — Per-Render Hot Paths
//!
//! Benchmarks the pure functions that run on every polling cycle and
//! every upstream market update: the per-market summary derivation and
//! the live-candle patch.
//!
//! Run with: cargo bench --bench summary_bench

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use optifolio::domain::candle::{SpotPriceCandle, patch_latest_candle};
use optifolio::domain::fixed::FixedPoint;
use optifolio::domain::summary::derive_market_summary;
use optifolio::ports::options_sdk::{LiquiditySnapshot, MarketSnapshot, VolumeSnapshot};

fn sample_market() -> MarketSnapshot {
    MarketSnapshot {
        address: "0xeth".to_string(),
        name: "ETH-USDC".to_string(),
        block_number: 180_000_000,
        block_timestamp: 1_700_000_000,
        spot_price: FixedPoint::from_f64(2_000.0),
        open_interest: FixedPoint::from_f64(1_234.5),
    }
}

fn sample_candles(n: u64) -> Vec<SpotPriceCandle> {
    (0..n)
        .map(|i| {
            let close = 2_000.0 + i as f64;
            SpotPriceCandle {
                price: close,
                start_timestamp: i * 28_800,
                end_timestamp: (i + 1) * 28_800,
                open: close - 1.0,
                high: close + 5.0,
                low: close - 5.0,
                close,
            }
        })
        .collect()
}

fn sample_volumes(n: u64) -> Vec<VolumeSnapshot> {
    (0..n)
        .map(|i| VolumeSnapshot {
            timestamp: i * 86_400,
            total_notional_volume: FixedPoint::from_f64(1e6 + i as f64 * 5e4),
            vault_fees: FixedPoint::from_f64(120.0),
        })
        .collect()
}

/// Benchmark the full per-market summary derivation (30-day window).
fn bench_derive_summary(c: &mut Criterion) {
    let market = sample_market();
    let spot_history = sample_candles(3);
    let volume_history = sample_volumes(30);
    let liquidity = LiquiditySnapshot {
        tvl: FixedPoint::from_f64(5e7),
        free_liquidity: FixedPoint::from_f64(3e7),
        used_liquidity: FixedPoint::from_f64(2e7),
    };

    c.bench_function("derive_market_summary_30d", |b| {
        b.iter(|| {
            let _row = derive_market_summary(
                black_box(&market),
                black_box(&spot_history),
                black_box(&volume_history),
                black_box(&liquidity),
            );
        });
    });
}

/// Benchmark the live-candle patch over a month of hourly candles.
fn bench_patch_latest(c: &mut Criterion) {
    let market = sample_market();
    let mut candles = sample_candles(720);
    // Keep the last bucket open so the patch path actually runs.
    if let Some(last) = candles.last_mut() {
        last.end_timestamp = market.block_timestamp + 3_600;
    }

    c.bench_function("patch_latest_candle_720", |b| {
        b.iter(|| {
            let _patched = patch_latest_candle(black_box(&candles), black_box(&market));
        });
    });
}

criterion_group!(benches, bench_derive_summary, bench_patch_latest);
criterion_main!(benches);
