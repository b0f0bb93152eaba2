//! End-to-end: a scripted `unbound-control` behind the real router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use unbound_exporter::app_state::AppState;
use unbound_exporter::collector::{StatsSource, UnboundControl};
use unbound_exporter::config::ExporterConfig;
use unbound_exporter::router;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

async fn http_get(addr: std::net::SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let req = format!("GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n");
    stream.write_all(req.as_bytes()).await.unwrap();
    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

// Scripts are written and executed from a single test to keep exec of
// freshly written files off parallel test threads.
#[tokio::test]
async fn scripted_unbound_control() {
    let dir = tempfile::tempdir().unwrap();

    let ok = write_script(
        dir.path(),
        "unbound-control",
        r#"[ "$1" = "stats_noreset" ] || exit 3
printf 'total.num.queries=42\ntotal.requestlist.avg=1.5\nthread0.num.queries=42\n'"#,
    );
    let binary_noise = write_script(
        dir.path(),
        "unbound-control-noisy",
        r"printf '\377\376garbage\ntotal.num.queries=1\n'",
    );
    let failing = write_script(
        dir.path(),
        "unbound-control-down",
        "echo 'error: connect to 127.0.0.1 port 8953 failed' >&2\nexit 1",
    );

    // direct fetch passes the non-resetting subcommand
    let raw = UnboundControl::new(&ok).unwrap().fetch().await.unwrap();
    assert!(raw.starts_with("total.num.queries=42\n"));

    // non-UTF-8 output is decoded lossily, the valid lines still parse
    let raw = UnboundControl::new(&binary_noise)
        .unwrap()
        .fetch()
        .await
        .unwrap();
    let snapshot = unbound_exporter_core::parse_stats(&raw);
    assert_eq!(snapshot.get("total.num.queries"), 1.0);
    assert_eq!(snapshot.malformed_lines(), 1);

    let err = UnboundControl::new(&failing)
        .unwrap()
        .fetch()
        .await
        .unwrap_err();
    assert_eq!(err.code().as_str(), "COLLECTION_EXEC_FAILURE");
    assert!(err.to_string().contains("port 8953 failed"));

    // serve through the router
    let mut cfg = ExporterConfig::default();
    cfg.unbound.control_path = ok.display().to_string();
    let state = AppState::new(cfg).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router::build_router(state)).await.unwrap();
    });

    let resp = http_get(addr, "/metrics").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
    assert!(resp.contains("text/plain; version=0.0.4"));
    assert!(resp.contains("\nunbound_total_num_queries 42\n"));
    assert!(resp.contains("\nunbound_total_requestlist_avg 1.5\n"));
    assert!(resp.contains("\nunbound_total_num_cache_hits 0\n"));
    assert!(!resp.contains("thread0"));

    let resp = http_get(addr, "/").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
    assert!(resp.contains("href='/metrics'"));

    let resp = http_get(addr, "/healthz").await;
    assert!(resp.starts_with("HTTP/1.1 200"));

    // a broken utility fails only the scrape, not the server
    let mut cfg = ExporterConfig::default();
    cfg.unbound.control_path = failing.display().to_string();
    let state = AppState::new(cfg).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router::build_router(state)).await.unwrap();
    });

    let resp = http_get(addr, "/metrics").await;
    assert!(resp.starts_with("HTTP/1.1 500"));
    assert!(!resp.contains("unbound_total_num_queries"));
    let resp = http_get(addr, "/healthz").await;
    assert!(resp.starts_with("HTTP/1.1 200"));
}
