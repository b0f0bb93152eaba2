//! Exporter self-metrics.
//!
//! These describe the exporter, not the resolver, and are appended after the
//! catalog series on every successful scrape.

pub mod metrics;
