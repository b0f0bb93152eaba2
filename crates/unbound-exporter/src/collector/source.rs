use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use unbound_exporter_core::error::{ExporterError, Result};

/// Subcommand that prints statistics without clearing the resolver's counters.
pub const STATS_NORESET_ARG: &str = "stats_noreset";

/// Something that produces a raw `key=value` stats report.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch(&self) -> Result<String>;
}

/// Runs `unbound-control stats_noreset` once per fetch.
#[derive(Debug, Clone)]
pub struct UnboundControl {
    path: PathBuf,
}

impl UnboundControl {
    /// Check that `path` names an executable file. Fails with `SourceUnavailable`.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        check_executable(&path)?;
        Ok(Self { path })
    }
}

fn unavailable(path: &Path, reason: impl Into<String>) -> ExporterError {
    ExporterError::SourceUnavailable {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

fn check_executable(path: &Path) -> Result<()> {
    let meta = std::fs::metadata(path).map_err(|e| unavailable(path, e.to_string()))?;
    if !meta.is_file() {
        return Err(unavailable(path, "not a regular file"));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        if meta.permissions().mode() & 0o111 == 0 {
            return Err(unavailable(path, "not executable"));
        }
    }

    Ok(())
}

#[async_trait]
impl StatsSource for UnboundControl {
    async fn fetch(&self) -> Result<String> {
        let output = Command::new(&self.path)
            .arg(STATS_NORESET_ARG)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                ExporterError::CollectionExec(format!(
                    "failed to run {}: {e}",
                    self.path.display()
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ExporterError::CollectionExec(format!(
                "{} {} exited with {}: {}",
                self.path.display(),
                STATS_NORESET_ARG,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
