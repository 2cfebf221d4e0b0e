//! Time windows and snapshot granularities.
//!
//! Two distinct notions of "period" cross the boundary: the bucket
//! granularity at which the SDK records historical samples
//! ([`SnapshotPeriod`]) and the display window a chart requests
//! ([`ChartPeriod`]). Window starts are always anchored to the latest
//! on-chain block timestamp, not wall-clock time.

use serde::{Deserialize, Serialize};

pub const SECONDS_IN_HOUR: u64 = 3_600;
pub const SECONDS_IN_DAY: u64 = 86_400;
pub const SECONDS_IN_WEEK: u64 = 604_800;
/// 30-day month, matching the protocol's snapshot windows.
pub const SECONDS_IN_MONTH: u64 = 2_592_000;
pub const SECONDS_IN_YEAR: u64 = 31_536_000;

/// Bucket granularity of recorded history samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SnapshotPeriod {
    OneHour,
    EightHours,
    OneDay,
    SevenDays,
}

impl SnapshotPeriod {
    /// Bucket length in seconds.
    pub fn seconds(self) -> u64 {
        match self {
            Self::OneHour => SECONDS_IN_HOUR,
            Self::EightHours => 8 * SECONDS_IN_HOUR,
            Self::OneDay => SECONDS_IN_DAY,
            Self::SevenDays => SECONDS_IN_WEEK,
        }
    }
}

/// Display window requested by a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartPeriod {
    OneDay,
    OneWeek,
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
    AllTime,
}

impl ChartPeriod {
    /// Start of the display window relative to `block_timestamp`.
    ///
    /// `AllTime` starts at the epoch; everything else subtracts the
    /// window length, saturating at zero for young chains.
    pub fn start_timestamp(self, block_timestamp: u64) -> u64 {
        let window = match self {
            Self::OneDay => SECONDS_IN_DAY,
            Self::OneWeek => SECONDS_IN_WEEK,
            Self::OneMonth => SECONDS_IN_MONTH,
            Self::ThreeMonths => 3 * SECONDS_IN_MONTH,
            Self::SixMonths => 6 * SECONDS_IN_MONTH,
            Self::OneYear => SECONDS_IN_YEAR,
            Self::AllTime => return 0,
        };
        block_timestamp.saturating_sub(window)
    }
}
