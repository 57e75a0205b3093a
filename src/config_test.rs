use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  true  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.session_days, 7);
    assert_eq!(config.login_latency, Duration::from_millis(500));
    assert!(!config.cookie_secure);
    assert!(config.storage_path.is_none());
    assert!(config.static_dir.ends_with("static"));
}

#[test]
fn overrides_are_applied() {
    let config = AppConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("GRC_STORAGE_PATH", "/var/lib/grc/store.json"),
        ("GRC_SESSION_DAYS", "30"),
        ("GRC_LOGIN_LATENCY_MS", "0"),
        ("COOKIE_SECURE", "yes"),
        ("GRC_STATIC_DIR", "/srv/static"),
    ]))
    .unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.storage_path, Some(PathBuf::from("/var/lib/grc/store.json")));
    assert_eq!(config.session_days, 30);
    assert_eq!(config.login_latency, Duration::ZERO);
    assert!(config.cookie_secure);
    assert_eq!(config.static_dir, PathBuf::from("/srv/static"));
}

#[test]
fn blank_storage_path_means_memory() {
    let config = AppConfig::from_lookup(lookup_from(&[("GRC_STORAGE_PATH", "   ")])).unwrap();
    assert!(config.storage_path.is_none());
}

#[test]
fn invalid_port_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn non_positive_session_days_are_rejected() {
    for days in ["0", "-3"] {
        let err = AppConfig::from_lookup(lookup_from(&[("GRC_SESSION_DAYS", days)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "GRC_SESSION_DAYS", .. }));
    }
}

#[test]
fn oversized_session_days_are_rejected() {
    for days in ["3651", "1000000000", "9223372036854775807"] {
        let err = AppConfig::from_lookup(lookup_from(&[("GRC_SESSION_DAYS", days)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "GRC_SESSION_DAYS", .. }));
    }
}

#[test]
fn session_days_upper_bound_is_accepted() {
    let config = AppConfig::from_lookup(lookup_from(&[("GRC_SESSION_DAYS", "3650")])).unwrap();
    assert_eq!(config.session_days, 3650);
}

#[test]
fn invalid_cookie_secure_is_rejected() {
    let err = AppConfig::from_lookup(lookup_from(&[("COOKIE_SECURE", "maybe")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { key: "COOKIE_SECURE", value: "maybe".to_owned() });
}

#[test]
fn invalid_latency_is_rejected() {
    assert!(AppConfig::from_lookup(lookup_from(&[("GRC_LOGIN_LATENCY_MS", "-1")])).is_err());
}
