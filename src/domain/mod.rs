//! Domain layer - Pure types and reductions.
//!
//! Everything here is deterministic, free of I/O, and testable without
//! a runtime (hexagonal architecture inner ring). Fixed-point values
//! are converted once at this layer's edge; all reduction arithmetic
//! runs on plain `f64`.

pub mod candle;
pub mod fixed;
pub mod network;
pub mod period;
pub mod summary;

// Re-export core types for convenience
pub use candle::SpotPriceCandle;
pub use fixed::FixedPoint;
pub use network::Network;
pub use period::{ChartPeriod, SnapshotPeriod};
pub use summary::{PortfolioMarketData, PortfolioPageData};
