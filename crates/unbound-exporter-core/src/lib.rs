//! unbound-exporter core: the metric catalog, the `unbound-control` stats parser,
//! the text exposition renderer, and the shared error type.
//!
//! Nothing here spawns processes or serves HTTP. The exporter crate owns the
//! runtime side and threads a fresh [`parser::StatSnapshot`] through each scrape.
//! Malformed resolver output degrades to zero-valued stats, never a panic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod catalog;
pub mod error;
pub mod exposition;
pub mod parser;

pub use catalog::{MetricDefinition, MetricKind, CATALOG};
pub use error::{ErrorCode, ExporterError, Result};
pub use exposition::EmittedMetric;
pub use parser::{parse_stats, StatSnapshot};
