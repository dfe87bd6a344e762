use mpox_dashboard::config::Settings;
use serial_test::serial;
use std::env;

const VARS: [&str; 4] = [
    "MPOX__API__BASE_URL",
    "MPOX__API__QUERY",
    "MPOX__API__TIMEOUT_SECS",
    "MPOX__LOG_LEVEL",
];

fn cleanup() {
    for var in VARS {
        env::remove_var(var);
    }
    env::remove_var("RUN_MODE");
}

#[test]
#[serial]
fn test_defaults_point_at_opendatasus() {
    cleanup();

    let settings = Settings::new().expect("Failed to load settings");
    assert_eq!(settings, Settings::default());
    assert_eq!(
        settings.search_url(),
        "https://opendatasus.saude.gov.br/api/3/action/package_search"
    );
    assert_eq!(settings.api.query, "mpox");
    assert!(settings.request_timeout().is_none());
}

#[test]
#[serial]
fn test_environment_overrides() {
    cleanup();
    env::set_var("MPOX__API__BASE_URL", "http://127.0.0.1:9999/api/3/action");
    env::set_var("MPOX__API__QUERY", "variola");
    env::set_var("MPOX__API__TIMEOUT_SECS", "5");
    env::set_var("MPOX__LOG_LEVEL", "debug");

    let settings = Settings::new().expect("Failed to load settings");
    cleanup();

    assert_eq!(
        settings.search_url(),
        "http://127.0.0.1:9999/api/3/action/package_search"
    );
    assert_eq!(settings.api.query, "variola");
    assert_eq!(settings.request_timeout(), Some(std::time::Duration::from_secs(5)));
    assert_eq!(settings.log_level, "debug");
}

#[test]
#[serial]
fn test_empty_query_is_rejected() {
    cleanup();
    env::set_var("MPOX__API__QUERY", "");

    let result = Settings::new();
    cleanup();

    assert!(result.is_err());
}
