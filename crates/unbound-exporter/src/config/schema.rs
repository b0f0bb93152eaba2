use std::net::SocketAddr;

use serde::Deserialize;
use unbound_exporter_core::error::{ExporterError, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExporterConfig {
    pub version: u32,

    #[serde(default)]
    pub web: WebSection,

    #[serde(default)]
    pub unbound: UnboundSection,

    #[serde(default)]
    pub log: LogSection,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            version: 1,
            web: WebSection::default(),
            unbound: UnboundSection::default(),
            log: LogSection::default(),
        }
    }
}

impl ExporterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ExporterError::Config(format!(
                "unsupported config version {}",
                self.version
            )));
        }

        self.web.validate()?;
        self.unbound.validate()?;

        if self.log.level.trim().is_empty() {
            return Err(ExporterError::Config("log.level must not be empty".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WebSection {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,

    #[serde(default = "default_telemetry_path")]
    pub telemetry_path: String,
}

impl Default for WebSection {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            telemetry_path: default_telemetry_path(),
        }
    }
}

impl WebSection {
    pub fn validate(&self) -> Result<()> {
        self.listen_addr()?;

        if !self.telemetry_path.starts_with('/') {
            return Err(ExporterError::Config(
                "web.telemetry_path must start with '/'".into(),
            ));
        }
        // both are served by fixed routes
        if self.telemetry_path == "/" || self.telemetry_path == "/healthz" {
            return Err(ExporterError::Config(format!(
                "web.telemetry_path must not be {}",
                self.telemetry_path
            )));
        }
        // axum treats these as capture or wildcard segments
        if self.telemetry_path.contains(['*', ':', '{', '}']) {
            return Err(ExporterError::Config(format!(
                "web.telemetry_path {:?} must not contain '*', ':', '{{' or '}}'",
                self.telemetry_path
            )));
        }
        Ok(())
    }

    /// Parse the listen address. A bare `:port` binds all IPv4 interfaces.
    pub fn listen_addr(&self) -> Result<SocketAddr> {
        let addr = match self.listen_address.strip_prefix(':') {
            Some(port) => format!("0.0.0.0:{port}"),
            None => self.listen_address.clone(),
        };
        addr.parse().map_err(|e| {
            ExporterError::Config(format!(
                "web.listen_address {:?} is not a valid socket address: {e}",
                self.listen_address
            ))
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UnboundSection {
    #[serde(default = "default_control_path")]
    pub control_path: String,
}

impl Default for UnboundSection {
    fn default() -> Self {
        Self {
            control_path: default_control_path(),
        }
    }
}

impl UnboundSection {
    pub fn validate(&self) -> Result<()> {
        if self.control_path.trim().is_empty() {
            return Err(ExporterError::Config(
                "unbound.control_path must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_listen_address() -> String {
    "0.0.0.0:9107".into()
}
fn default_telemetry_path() -> String {
    "/metrics".into()
}
fn default_control_path() -> String {
    "/usr/sbin/unbound-control".into()
}
fn default_log_level() -> String {
    "info".into()
}
