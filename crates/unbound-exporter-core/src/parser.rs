//! Parser for `unbound-control stats_noreset` output.
//!
//! The report is one `dotted.key=value` pair per line. Bad lines are logged
//! and counted, never fatal: a single garbled value must not cost the whole
//! scrape.

use std::collections::HashMap;

use tracing::warn;

/// Stats parsed from one report. Lives for a single collection cycle.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct StatSnapshot {
    values: HashMap<String, f64>,
    malformed_lines: usize,
}

impl StatSnapshot {
    /// Value for `key`, or `0.0` when the report did not contain it.
    pub fn get(&self, key: &str) -> f64 {
        self.values.get(key).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Lines that had no `=` or a non-numeric value.
    pub fn malformed_lines(&self) -> usize {
        self.malformed_lines
    }

    fn insert(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }
}

/// Parse a stats report into a snapshot.
///
/// - Blank lines are skipped.
/// - Lines are split on the first `=`; key and value are trimmed.
/// - A line without `=` is dropped; a value that is not a float is stored as `0.0`.
///   Both count as malformed and are logged at `warn`.
/// - A repeated key keeps its last value.
pub fn parse_stats(text: &str) -> StatSnapshot {
    let mut snapshot = StatSnapshot::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            warn!(line_no = idx + 1, line = %line, "stat line has no '=', skipping");
            snapshot.malformed_lines += 1;
            continue;
        };

        let key = key.trim();
        let value = value.trim();
        let parsed = match value.parse::<f64>() {
            Ok(v) => v,
            Err(e) => {
                warn!(line_no = idx + 1, key = %key, value = %value, error = %e, "failed to parse stat value");
                snapshot.malformed_lines += 1;
                0.0
            }
        };
        snapshot.insert(key, parsed);
    }

    snapshot
}
