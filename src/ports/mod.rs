//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the aggregation layer requires
//! from the outside world. The single port is the options SDK; hosts
//! implement it against their deployment (subgraph + RPC) and tests
//! mock it.

pub mod options_sdk;
