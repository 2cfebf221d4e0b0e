//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Concrete infrastructure around the use cases. SDK implementations
//! live with the host; the one adapter this library ships is the keyed
//! fetch cache and heartbeat poller the host plugs the aggregators
//! into.

pub mod cache;
