//! Tests for environment-driven server configuration.

mod support;

use fontpeek_ucd::http::{FailurePolicy, ServerConfig};

const CLEAR: [(&str, Option<&str>); 4] = [
    ("HOST", None),
    ("PORT", None),
    ("SERVICE_NAME", None),
    ("UCD_FAILURE_POLICY", None),
];

#[test]
fn test_defaults() {
    support::with_scoped_env(&CLEAR, || {
        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.port, 8080);
        assert_eq!(config.failure_policy, FailurePolicy::Strict);
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:8080");
    });
}

#[test]
fn test_overrides() {
    support::with_scoped_env(
        &[
            ("HOST", Some("127.0.0.1")),
            ("PORT", Some("9090")),
            ("SERVICE_NAME", Some("ucd-staging")),
            ("UCD_FAILURE_POLICY", Some("legacy")),
        ],
        || {
            let config = ServerConfig::from_env().unwrap();
            assert_eq!(config.service_name, "ucd-staging");
            assert_eq!(config.failure_policy, FailurePolicy::Legacy);
            assert_eq!(config.bind_addr().unwrap().to_string(), "127.0.0.1:9090");
        },
    );
}

#[test]
fn test_empty_service_name_uses_default() {
    let mut changes = CLEAR.to_vec();
    changes.push(("SERVICE_NAME", Some("")));
    support::with_scoped_env(&changes, || {
        assert_eq!(ServerConfig::from_env().unwrap().service_name, "unicode");
    });
}

#[test]
fn test_invalid_port_is_error() {
    let mut changes = CLEAR.to_vec();
    changes.push(("PORT", Some("eighty")));
    support::with_scoped_env(&changes, || {
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.contains("PORT"));
    });
}

#[test]
fn test_invalid_failure_policy_is_error() {
    let mut changes = CLEAR.to_vec();
    changes.push(("UCD_FAILURE_POLICY", Some("silent")));
    support::with_scoped_env(&changes, || {
        let err = ServerConfig::from_env().unwrap_err();
        assert!(err.contains("Unknown failure policy"));
    });
}

#[test]
fn test_invalid_host_fails_bind_addr() {
    let config = ServerConfig {
        host: "not a host".to_string(),
        ..ServerConfig::default()
    };
    assert!(config.bind_addr().is_err());
}
