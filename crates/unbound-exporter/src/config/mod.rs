//! Exporter config loader (strict parsing).
//!
//! Precedence, lowest first: defaults, YAML file, command-line overrides.

pub mod schema;

use std::fs;

use unbound_exporter_core::error::{ExporterError, Result};

pub use schema::{ExporterConfig, LogSection, UnboundSection, WebSection};

pub fn load_from_file(path: &str) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ExporterError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<ExporterConfig> {
    let cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ExporterError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Values given on the command line. `None` leaves the loaded value alone.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub listen_address: Option<String>,
    pub telemetry_path: Option<String>,
    pub control_path: Option<String>,
    pub log_level: Option<String>,
}

impl Overrides {
    pub fn apply(self, cfg: &mut ExporterConfig) {
        if let Some(v) = self.listen_address {
            cfg.web.listen_address = v;
        }
        if let Some(v) = self.telemetry_path {
            cfg.web.telemetry_path = v;
        }
        if let Some(v) = self.control_path {
            cfg.unbound.control_path = v;
        }
        if let Some(v) = self.log_level {
            cfg.log.level = v;
        }
    }
}

/// Resolve the effective config: optional file, then overrides, then validation.
pub fn resolve(path: Option<&str>, overrides: Overrides) -> Result<ExporterConfig> {
    let mut cfg = match path {
        Some(p) => load_from_file(p)?,
        None => ExporterConfig::default(),
    };
    overrides.apply(&mut cfg);
    cfg.validate()?;
    Ok(cfg)
}
