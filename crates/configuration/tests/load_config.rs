use configuration::error::ConfigError;
use configuration::{load_catalog, load_config, Config};
use std::fs;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config: Config = load_config(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.engine.top_companies, 3);
    assert_eq!(config.engine.detail_companies, 20);
    assert_eq!(config.engine.default_company_limit, 10);
    assert_eq!(config.engine.seed, None);
    assert_eq!(config.logging.level, "info");
    assert!(config.catalog.path.is_none());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[server]
host = "127.0.0.1"
port = 9100

[engine]
seed = 42
max_company_limit = 50
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:9100");
    assert_eq!(config.engine.seed, Some(42));
    assert_eq!(config.engine.max_company_limit, 50);
    // Untouched keys keep their defaults.
    assert_eq!(config.engine.top_companies, 3);
}

#[test]
fn inconsistent_limits_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[engine]\ndefault_company_limit = 200\nmax_company_limit = 100\n",
    )
    .unwrap();

    match load_config(&path) {
        Err(ConfigError::ValidationError { key, .. }) => assert_eq!(key, "engine.default_company_limit"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn catalog_file_parses_optional_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(
        &path,
        r#"
[[sectors]]
id = "cement"
name = "Cement"
market_cap_billion = 380.0
company_count = 22
base_performance = 1.5
description = "Cement makers"

[sectors.ratios]
pe_ratio = 11.8
pb_ratio = 1.4
dividend_yield = 5.2
roe = 16.3
debt_to_equity = 1.2

[[sectors]]
id = "startups"
name = "Startups"
market_cap_billion = 12.5
company_count = 4
base_performance = 6.0
"#,
    )
    .unwrap();

    let sectors = load_catalog(&path).unwrap();
    assert_eq!(sectors.len(), 2);
    assert_eq!(sectors[0].ratios.map(|r| r.pe_ratio), Some(11.8));
    assert_eq!(sectors[1].ratios, None);
    assert!(sectors[1].templates.is_empty());
    assert_eq!(sectors[1].description, "");
}

#[test]
fn zero_port_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 0\n").unwrap();

    assert!(matches!(
        load_config(&path),
        Err(ConfigError::ValidationError { key: "server.port", .. })
    ));
}

#[test]
fn missing_catalog_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");

    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, ConfigError::CatalogFile { .. }));
    assert!(err.to_string().contains("nope.toml"));
}
