#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use unbound_exporter::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
web:
  listen_addres: "0.0.0.0:9107" # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn ok_minimal_config() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.web.listen_address, "0.0.0.0:9107");
    assert_eq!(cfg.web.telemetry_path, "/metrics");
    assert_eq!(cfg.unbound.control_path, "/usr/sbin/unbound-control");
    assert_eq!(cfg.log.level, "info");
}

#[test]
fn full_config() {
    let ok = r#"
version: 1
web:
  listen_address: "127.0.0.1:9999"
  telemetry_path: "/stats"
unbound:
  control_path: "/usr/local/sbin/unbound-control"
log:
  level: "unbound_exporter=debug,warn"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.web.listen_addr().unwrap().port(), 9999);
    assert_eq!(cfg.web.telemetry_path, "/stats");
    assert_eq!(cfg.unbound.control_path, "/usr/local/sbin/unbound-control");
}

#[test]
fn rejects_wrong_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert!(err.to_string().contains("unsupported config version"));
}

#[test]
fn accepts_bare_port_listen_address() {
    let cfg = config::load_from_str("version: 1\nweb:\n  listen_address: \":9107\"\n")
        .expect("must parse");
    assert_eq!(
        cfg.web.listen_addr().unwrap(),
        "0.0.0.0:9107".parse::<std::net::SocketAddr>().unwrap()
    );

    let overrides = config::Overrides {
        listen_address: Some(":9200".into()),
        ..Default::default()
    };
    let cfg = config::resolve(None, overrides).unwrap();
    assert_eq!(cfg.web.listen_addr().unwrap().port(), 9200);
}

#[test]
fn rejects_bad_listen_address() {
    for addr in ["localhost", ":notaport", "0.0.0.0"] {
        let s = format!("version: 1\nweb:\n  listen_address: \"{addr}\"\n");
        let err = config::load_from_str(&s).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "{addr}");
    }
}

#[test]
fn rejects_route_pattern_in_telemetry_path() {
    for path in ["/metrics*", "/m/:x", "/m/{x}", "/*rest"] {
        let overrides = config::Overrides {
            telemetry_path: Some(path.into()),
            ..Default::default()
        };
        let err = config::resolve(None, overrides).expect_err("must fail");
        assert_eq!(err.code().as_str(), "BAD_CONFIG", "{path}");
    }
}

#[test]
fn validated_telemetry_path_builds_router() {
    let mut cfg = unbound_exporter::config::ExporterConfig::default();
    cfg.web.telemetry_path = "/stats/unbound".into();
    cfg.validate().unwrap();
    let state = unbound_exporter::app_state::AppState::with_source(
        cfg,
        std::sync::Arc::new(Empty),
    );
    let _router = unbound_exporter::router::build_router(state);
}

struct Empty;

#[async_trait::async_trait]
impl unbound_exporter::collector::StatsSource for Empty {
    async fn fetch(&self) -> unbound_exporter_core::error::Result<String> {
        Ok(String::new())
    }
}

#[test]
fn rejects_double_colon_listen_address() {
    let err = config::load_from_str("version: 1\nweb:\n  listen_address: \"::9107\"\n")
        .expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn rejects_telemetry_path_collisions() {
    for path in ["metrics", "/", "/healthz", "/metrics*", "/m/:x"] {
        let s = format!("version: 1\nweb:\n  telemetry_path: \"{path}\"\n");
        assert!(config::load_from_str(&s).is_err(), "{path} accepted");
    }
}

#[test]
fn overrides_win_over_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("unbound-exporter.yaml");
    std::fs::write(
        &path,
        "version: 1\nweb:\n  listen_address: \"127.0.0.1:1000\"\n  telemetry_path: \"/file\"\n",
    )
    .unwrap();

    let overrides = config::Overrides {
        listen_address: Some("127.0.0.1:2000".into()),
        control_path: Some("/opt/unbound/sbin/unbound-control".into()),
        ..Default::default()
    };
    let cfg = config::resolve(path.to_str(), overrides).unwrap();
    assert_eq!(cfg.web.listen_address, "127.0.0.1:2000");
    assert_eq!(cfg.web.telemetry_path, "/file");
    assert_eq!(cfg.unbound.control_path, "/opt/unbound/sbin/unbound-control");
}

#[test]
fn overrides_are_validated() {
    let overrides = config::Overrides {
        telemetry_path: Some("no-slash".into()),
        ..Default::default()
    };
    let err = config::resolve(None, overrides).expect_err("must fail");
    assert_eq!(err.code().as_str(), "BAD_CONFIG");
}

#[test]
fn missing_file_is_config_error() {
    let err = config::resolve(Some("/nonexistent/unbound-exporter.yaml"), Default::default())
        .expect_err("must fail");
    assert!(err.is_startup_fatal());
}
