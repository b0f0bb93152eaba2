//! On-demand collection: one `unbound-control` run per scrape, mapped through
//! the static catalog.
//!
//! Nothing survives between cycles. The snapshot is parsed, turned into
//! [`EmittedMetric`]s and dropped.

pub mod source;

use std::sync::Arc;

use tracing::debug;

use unbound_exporter_core::catalog::{self, MetricDefinition};
use unbound_exporter_core::error::Result;
use unbound_exporter_core::exposition::EmittedMetric;
use unbound_exporter_core::parser::{parse_stats, StatSnapshot};

pub use source::{StatsSource, UnboundControl, STATS_NORESET_ARG};

/// Result of one successful collection cycle.
#[derive(Debug, Clone)]
pub struct Collection {
    /// One entry per catalog definition, in catalog order.
    pub metrics: Vec<EmittedMetric>,
    pub malformed_lines: usize,
}

#[derive(Clone)]
pub struct Collector {
    source: Arc<dyn StatsSource>,
}

impl Collector {
    pub fn new(source: Arc<dyn StatsSource>) -> Self {
        Self { source }
    }

    /// Schema query. Does not touch the stats source.
    pub fn describe(&self) -> impl Iterator<Item = &'static MetricDefinition> {
        catalog::catalog().iter()
    }

    /// Run the source once and map its report onto the catalog.
    ///
    /// A source failure aborts the cycle: no partial metric set is returned.
    pub async fn collect(&self) -> Result<Collection> {
        let raw = self.source.fetch().await?;
        let snapshot = parse_stats(&raw);
        let metrics = emit(&snapshot);

        debug!(
            stats = snapshot.len(),
            malformed = snapshot.malformed_lines(),
            emitted = metrics.len(),
            "collection cycle complete"
        );

        Ok(Collection {
            metrics,
            malformed_lines: snapshot.malformed_lines(),
        })
    }
}

/// Map a snapshot onto the catalog. Keys outside the catalog are ignored;
/// catalog keys missing from the snapshot are emitted as zero.
pub fn emit(snapshot: &StatSnapshot) -> Vec<EmittedMetric> {
    catalog::catalog()
        .iter()
        .map(|definition| EmittedMetric {
            definition,
            value: snapshot.get(definition.internal_key),
        })
        .collect()
}
