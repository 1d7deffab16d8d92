//! tests/config_tests.rs
//! Pruebas de lectura de configuración (sin tocar el entorno real).

use std::collections::HashMap;
use std::time::Duration;

use crate::config::app_config::{AppConfig, DEFAULT_GITHUB_BASE_URL, DEFAULT_USER_AGENT};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_defaults_when_env_is_empty() {
    let config = AppConfig::from_lookup(lookup_from(&[])).expect("config por defecto");

    assert_eq!(config.github.base_url, DEFAULT_GITHUB_BASE_URL);
    assert_eq!(config.github.api_version, "2022-11-28");
    assert_eq!(config.github.user_agent, DEFAULT_USER_AGENT);
    assert!(config.github.token.is_none());
    assert_eq!(config.github.timeout, Duration::from_secs(30));
    assert_eq!(config.github.branch_concurrency, 8);
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 8080);
    assert!(config.server.workers.is_none());
}

#[test]
fn test_overrides_from_env() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("GITHUB_BASE_URL", "http://localhost:9999/"),
        ("GITHUB_TOKEN", "ghp_secret"),
        ("GITHUB_TIMEOUT_SECS", "5"),
        ("BRANCH_FETCH_CONCURRENCY", "2"),
        ("SERVER_PORT", "5022"),
        ("SERVER_WORKERS", "4"),
    ]))
    .expect("config con overrides");

    // la barra final se recorta para poder concatenar paths
    assert_eq!(config.github.base_url, "http://localhost:9999");
    assert_eq!(config.github.token.as_deref(), Some("ghp_secret"));
    assert_eq!(config.github.timeout, Duration::from_secs(5));
    assert_eq!(config.github.branch_concurrency, 2);
    assert_eq!(config.server.port, 5022);
    assert_eq!(config.server.workers, Some(4));
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[("GITHUB_TOKEN", "  "), ("SERVER_PORT", "")]))
        .expect("config");

    assert!(config.github.token.is_none());
    assert_eq!(config.server.port, 8080);
}

#[test]
fn test_zero_values_are_rejected() {
    for key in ["SERVER_WORKERS", "GITHUB_TIMEOUT_SECS", "BRANCH_FETCH_CONCURRENCY"] {
        let err = AppConfig::from_lookup(lookup_from(&[(key, "0")]))
            .expect_err("un 0 debería fallar al arrancar");
        assert_eq!(err.to_string(), format!("{} debe ser mayor que 0", key));
    }
}

#[test]
fn test_invalid_number_is_an_error() {
    let err = AppConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")]))
        .expect_err("puerto inválido debería fallar");
    assert!(err.to_string().contains("SERVER_PORT"), "mensaje: {}", err);
}
