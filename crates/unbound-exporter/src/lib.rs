//! Prometheus exporter for the Unbound DNS resolver.
//!
//! Each scrape of the telemetry path runs `unbound-control stats_noreset`,
//! parses the report and maps it through the static catalog in
//! `unbound-exporter-core`. This crate wires the stats source, collector,
//! config, and HTTP surface together for the binary (`main.rs`) and for
//! integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod app_state;
pub mod collector;
pub mod config;
pub mod obs;
pub mod ops;
pub mod router;
