//! Prometheus text exposition (format 0.0.4) for catalog metrics.

use std::fmt::Write;

use crate::catalog::MetricDefinition;

/// One catalog entry paired with the value read in the current cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmittedMetric {
    pub definition: &'static MetricDefinition,
    pub value: f64,
}

/// Escape help text: backslash and newline.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Format a sample value the way Prometheus parsers expect.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}

/// Append HELP, TYPE and sample lines for every metric, in order.
pub fn render_into(metrics: &[EmittedMetric], out: &mut String) {
    for m in metrics {
        let d = m.definition;
        let _ = writeln!(out, "# HELP {} {}", d.exported_name, escape_help(d.help_text));
        let _ = writeln!(out, "# TYPE {} {}", d.exported_name, d.kind.as_str());
        let _ = writeln!(out, "{} {}", d.exported_name, format_value(m.value));
    }
}
