//! Labelled counters for the exporter's own health, backed by `DashMap`.
//!
//! Labels are flattened into sorted key vectors to keep deterministic ordering.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn label_str(key: &[(String, String)]) -> String {
    if key.is_empty() {
        return String::new();
    }
    let inner = key
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{inner}}}")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| (label_str(r.key()), r.value().load(Ordering::Relaxed)))
            .collect();
        rows.sort();
        for (labels, val) in rows {
            let _ = writeln!(out, "{}{} {}", name, labels, val);
        }
    }
}

/// Scrape outcome label values.
pub const RESULT_SUCCESS: &str = "success";
pub const RESULT_FAILURE: &str = "failure";

#[derive(Default)]
pub struct ExporterMetrics {
    pub scrapes: CounterVec,
    pub stat_parse_failures: CounterVec,
}

impl ExporterMetrics {
    pub fn record_scrape(&self, result: &str) {
        self.scrapes.inc(&[("result", result)]);
    }

    pub fn record_parse_failures(&self, n: usize) {
        // keep the series present even at zero
        self.stat_parse_failures.add(&[], n as u64);
    }

    /// Render exporter series.
    pub fn render(&self, out: &mut String) {
        let _ = writeln!(
            out,
            "# HELP unbound_exporter_build_info Build information of the exporter.\n\
             # TYPE unbound_exporter_build_info gauge\n\
             unbound_exporter_build_info{{version=\"{}\"}} 1",
            escape_label(env!("CARGO_PKG_VERSION"))
        );
        self.scrapes.render(
            "unbound_exporter_scrapes_total",
            "Scrapes of unbound-control by result.",
            out,
        );
        self.stat_parse_failures.render(
            "unbound_exporter_stat_parse_failures_total",
            "Malformed lines seen in unbound-control output.",
            out,
        );
    }
}
