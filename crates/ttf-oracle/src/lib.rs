//! Chat-completion oracle with ordered backend failover.

pub mod client;

pub use client::{ChatBackend, FailoverOracle};
