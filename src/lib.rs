//! optifolio — Portfolio and Chart Aggregation for On-chain Options Markets
//!
//! Async library that reshapes raw SDK data (markets, candles, volume
//! samples, liquidity, positions) into display-ready aggregates for a
//! trading front end: spot-price candle histories for charts and the
//! per-market portfolio summary with the owner's open positions.
//!
//! Hexagonal layout:
//! - `ports` defines the options SDK boundary the host implements
//! - `usecases` holds the two aggregators
//! - `adapters` ships the keyed fetch cache / heartbeat poller
//! - `domain` holds pure types and the arithmetic reductions

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod usecases;

pub use error::{Error, Result};
