//! Use Cases Layer - Aggregation Entry Points
//!
//! Orchestrates the SDK port into the two page-level fetches. Each use
//! case is a one-shot computation with all-or-nothing failure
//! semantics; re-running on a heartbeat is the cache adapter's job.
//!
//! Use cases:
//! - `SpotPriceHistory`: chart candle history for one market
//! - `PortfolioAggregator`: per-market summary + open positions

pub mod portfolio;
pub mod spot_price_history;

pub use portfolio::PortfolioAggregator;
pub use spot_price_history::SpotPriceHistory;
