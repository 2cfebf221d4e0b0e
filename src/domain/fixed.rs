//! 18-decimal fixed-point boundary conversion.
//!
//! The SDK reports every on-chain numeric as an integer scaled by 1e18
//! to avoid floating-point rounding on-chain. Conversion to `f64`
//! happens exactly once, at the ports boundary; aggregation arithmetic
//! never sees raw fixed-point values.

use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of decimals in the SDK's fixed-point representation.
pub const FIXED_POINT_DECIMALS: u32 = 18;

const SCALE_F64: f64 = 1e18;

/// Raw 18-decimal fixed-point value as returned by the SDK.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct FixedPoint(pub i128);

impl FixedPoint {
    pub const ZERO: Self = Self(0);

    /// Scale down to a display float.
    ///
    /// Goes through `Decimal` so values within its 96-bit mantissa
    /// convert exactly; larger magnitudes fall back to plain division.
    pub fn to_f64(self) -> f64 {
        Decimal::try_from_i128_with_scale(self.0, FIXED_POINT_DECIMALS)
            .ok()
            .and_then(|d| d.to_f64())
            .unwrap_or(self.0 as f64 / SCALE_F64)
    }

    /// Scale a display float back up to fixed-point.
    ///
    /// Lossy for values that need more than f64 precision; used by
    /// adapters and tests building snapshots, never by the reductions.
    pub fn from_f64(value: f64) -> Self {
        Self((value * SCALE_F64) as i128)
    }
}

impl From<i128> for FixedPoint {
    fn from(raw: i128) -> Self {
        Self(raw)
    }
}
