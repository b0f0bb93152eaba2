//! Shared application state for the exporter.
//!
//! Read-only after construction apart from the self-metric atomics, so scrapes
//! never contend with each other.

use std::sync::Arc;

use unbound_exporter_core::error::Result;

use crate::collector::{Collector, StatsSource, UnboundControl};
use crate::config::ExporterConfig;
use crate::obs::metrics::ExporterMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: ExporterConfig,
    collector: Collector,
    metrics: ExporterMetrics,
}

impl AppState {
    /// Build state backed by the configured `unbound-control`.
    /// Fails with `SourceUnavailable` when the utility is missing.
    pub fn new(cfg: ExporterConfig) -> Result<Self> {
        let source = UnboundControl::new(&cfg.unbound.control_path)?;
        Ok(Self::with_source(cfg, Arc::new(source)))
    }

    /// Build state over an arbitrary stats source.
    pub fn with_source(cfg: ExporterConfig, source: Arc<dyn StatsSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                collector: Collector::new(source),
                metrics: ExporterMetrics::default(),
            }),
        }
    }

    pub fn cfg(&self) -> &ExporterConfig {
        &self.inner.cfg
    }

    pub fn collector(&self) -> &Collector {
        &self.inner.collector
    }

    pub fn metrics(&self) -> &ExporterMetrics {
        &self.inner.metrics
    }
}
