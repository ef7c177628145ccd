#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::collections::HashMap;

use tally_server::config;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn load(pairs: &[(&str, &str)]) -> tally_core::error::Result<config::ServerConfig> {
    let vars = env(pairs);
    config::load_from_lookup(|name| vars.get(name).cloned())
}

#[test]
fn defaults_match_the_documented_table() {
    let cfg = load(&[]).expect("empty env must yield defaults");

    assert_eq!(cfg.listen, "0.0.0.0:8000");
    assert_eq!(cfg.spa.static_dir, "static");
    assert_eq!(cfg.store.host, "redis");
    assert_eq!(cfg.store.port, 6379);
    assert_eq!(cfg.store.db, 0);
    assert_eq!(cfg.store.password, None);
    assert_eq!(cfg.store.connect_retries, 5);
    assert_eq!(cfg.store.connect_backoff_ms, 1000);
}

#[test]
fn env_overrides_are_applied() {
    let cfg = load(&[
        ("PORT", "9001"),
        ("REDIS_HOST", "store.internal"),
        ("REDIS_PORT", "6380"),
        ("REDIS_DB", "3"),
        ("REDIS_PASSWORD", "hunter2"),
        ("STATIC_DIR", "/srv/spa"),
    ])
    .expect("must parse");

    assert_eq!(cfg.listen, "0.0.0.0:9001");
    assert_eq!(cfg.store.host, "store.internal");
    assert_eq!(cfg.store.port, 6380);
    assert_eq!(cfg.store.db, 3);
    assert_eq!(cfg.store.password.as_deref(), Some("hunter2"));
    assert_eq!(cfg.spa.static_dir, "/srv/spa");
}

#[test]
fn empty_password_means_unset() {
    let cfg = load(&[("REDIS_PASSWORD", "")]).expect("must parse");
    assert_eq!(cfg.store.password, None);
}

#[test]
fn malformed_port_is_rejected_not_defaulted() {
    let err = load(&[("PORT", "eight-thousand")]).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
    assert!(err.to_string().contains("PORT"));
}

#[test]
fn malformed_store_port_is_rejected() {
    let err = load(&[("REDIS_PORT", "65536")]).expect_err("must fail");
    assert_eq!(err.client_code().as_str(), "BAD_REQUEST");
}

#[test]
fn negative_db_index_is_rejected() {
    let err = load(&[("REDIS_DB", "-1")]).expect_err("must fail");
    assert!(err.to_string().contains("REDIS_DB"));
}

#[test]
fn empty_static_dir_is_rejected() {
    let err = load(&[("STATIC_DIR", "")]).expect_err("must fail");
    assert!(err.to_string().contains("STATIC_DIR"));
}
