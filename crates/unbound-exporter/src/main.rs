//! unbound_exporter binary entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use unbound_exporter::{app_state, config, router};
use unbound_exporter_core::error::ExporterError;

/// Prometheus exporter for Unbound statistics.
#[derive(Parser, Debug)]
#[command(name = "unbound_exporter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to an optional YAML config file.
    #[arg(short, long)]
    config: Option<String>,

    /// Address to listen on for web interface and telemetry.
    #[arg(long = "web.listen-address")]
    listen_address: Option<String>,

    /// Path under which to expose metrics.
    #[arg(long = "web.telemetry-path")]
    telemetry_path: Option<String>,

    /// Path to unbound-control.
    #[arg(long = "unbound.control")]
    control_path: Option<String>,

    /// Log filter directive; RUST_LOG takes precedence.
    #[arg(long = "log.level")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    let overrides = config::Overrides {
        listen_address: args.listen_address,
        telemetry_path: args.telemetry_path,
        control_path: args.control_path,
        log_level: args.log_level,
    };

    let cfg = match config::resolve(args.config.as_deref(), overrides) {
        Ok(cfg) => cfg,
        Err(e) => {
            // logging is not up yet
            eprintln!("unbound_exporter: {e}");
            return ExitCode::FAILURE;
        }
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.level));
    fmt().with_env_filter(env_filter).init();

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code().as_str(), error = %e, "unbound_exporter stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run(cfg: config::ExporterConfig) -> Result<(), ExporterError> {
    let listen = cfg.web.listen_addr()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        control_path = %cfg.unbound.control_path,
        "starting unbound_exporter"
    );

    let state = app_state::AppState::new(cfg)?;
    let telemetry_path = state.cfg().web.telemetry_path.clone();
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ExporterError::Internal(format!("bind {listen} failed: {e}")))?;

    tracing::info!(%listen, %telemetry_path, "listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))
}
