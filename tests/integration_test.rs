//! Integration tests

use chrono::{NaiveDate, TimeZone, Utc};
use envfetch::{fetch, EnvError, Kind, Value};
use serial_test::serial;
use std::env;

#[test]
#[serial]
fn test_string_value_from_env() {
    env::set_var("APP_NAME", "envfetch-demo");

    let value = fetch("APP_NAME").resolve().unwrap();
    assert_eq!(value.unwrap().as_text(), Some("envfetch-demo"));

    env::remove_var("APP_NAME");
}

#[test]
#[serial]
fn test_empty_string_counts_as_present() {
    env::set_var("EMPTY_VAR", "");

    let value = fetch("EMPTY_VAR").required().resolve().unwrap();
    assert_eq!(value, Some(Value::Text(String::new())));

    env::remove_var("EMPTY_VAR");
}

#[test]
#[serial]
fn test_env_value_shadows_default() {
    env::set_var("MAX_CONNECTIONS", "20");

    let value = fetch("MAX_CONNECTIONS")
        .kind(Kind::Integer)
        .default(10)
        .resolve()
        .unwrap();
    assert_eq!(value.unwrap().as_integer(), Some(20));

    env::remove_var("MAX_CONNECTIONS");
}

#[test]
#[serial]
fn test_parses_timestamp_from_env() {
    env::set_var("DEPLOYED_AT", "2020-01-01T00:00:00Z");

    let value = fetch("DEPLOYED_AT").kind(Kind::Timestamp).resolve().unwrap();
    let expected = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(value.unwrap().as_timestamp(), Some(expected));

    env::remove_var("DEPLOYED_AT");
}

#[test]
#[serial]
fn test_missing_not_required_returns_none() {
    env::remove_var("DEPLOYED_AT");

    let value = fetch("DEPLOYED_AT").kind(Kind::Timestamp).resolve().unwrap();
    assert_eq!(value, None);
}

#[test]
#[serial]
fn test_missing_required_errors() {
    env::remove_var("DEPLOYED_AT");

    let err = fetch("DEPLOYED_AT")
        .kind(Kind::Timestamp)
        .required()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, EnvError::Missing { .. }));
    assert!(err.to_string().contains("DEPLOYED_AT"));
}

#[test]
#[serial]
fn test_missing_required_with_typed_default_returns_it_unchanged() {
    env::remove_var("DEPLOYED_AT");

    let now = Utc::now();
    let value = fetch("DEPLOYED_AT")
        .kind(Kind::Timestamp)
        .default(now)
        .required()
        .resolve()
        .unwrap();
    assert_eq!(value.unwrap().as_timestamp(), Some(now));
}

#[test]
#[serial]
fn test_ill_typed_default_is_a_coercion_error_not_missing() {
    env::remove_var("DEPLOYED_AT");

    let err = fetch("DEPLOYED_AT")
        .kind(Kind::Timestamp)
        .default("foobar")
        .required()
        .resolve()
        .unwrap_err();
    assert!(matches!(err, EnvError::Coerce { .. }));
    assert!(err.to_string().contains("DEPLOYED_AT"));
    assert!(err.to_string().contains("timestamp"));
}

#[test]
#[serial]
fn test_text_default_is_coerced_like_env_text() {
    env::remove_var("RETRY_LIMIT");

    let value = fetch("RETRY_LIMIT")
        .kind(Kind::Integer)
        .default("3")
        .resolve()
        .unwrap();
    assert_eq!(value.unwrap().as_integer(), Some(3));
}

#[test]
#[serial]
fn test_boolean_tokens_from_env() {
    for (token, expected) in [("true", true), ("false", false), ("1", true), ("0", false)] {
        env::set_var("FEATURE_FLAG", token);
        let value = fetch("FEATURE_FLAG").kind(Kind::Boolean).resolve().unwrap();
        assert_eq!(value.unwrap().as_boolean(), Some(expected), "token {token:?}");
    }
    env::remove_var("FEATURE_FLAG");
}

#[test]
#[serial]
fn test_unrecognized_boolean_token_errors() {
    env::set_var("FEATURE_FLAG", "definitely");

    let err = fetch("FEATURE_FLAG")
        .kind(Kind::Boolean)
        .resolve()
        .unwrap_err();
    assert!(matches!(err, EnvError::Coerce { .. }));

    env::remove_var("FEATURE_FLAG");
}

#[test]
#[serial]
fn test_unparseable_integer_errors_with_diagnostic() {
    env::set_var("MAX_CONNECTIONS", "lots");

    let err = fetch("MAX_CONNECTIONS")
        .kind(Kind::Integer)
        .resolve()
        .unwrap_err();
    match err {
        EnvError::Coerce { name, kind, message } => {
            assert_eq!(name, "MAX_CONNECTIONS");
            assert_eq!(kind, Kind::Integer);
            assert!(message.contains("lots"));
        }
        other => panic!("expected Coerce error, got {other:?}"),
    }

    env::remove_var("MAX_CONNECTIONS");
}

#[test]
#[serial]
fn test_symbol_from_env() {
    env::set_var("RUN_MODE", "production");

    let value = fetch("RUN_MODE").kind(Kind::Symbol).resolve().unwrap();
    assert_eq!(value.unwrap().as_symbol().unwrap().as_str(), "production");

    env::remove_var("RUN_MODE");
}

#[test]
#[serial]
fn test_date_from_env() {
    env::set_var("BILLING_CUTOFF", "2020-12-31");

    let value = fetch("BILLING_CUTOFF").kind(Kind::Date).resolve().unwrap();
    let expected = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
    assert_eq!(value.unwrap().as_date(), Some(expected));

    env::remove_var("BILLING_CUTOFF");
}

#[test]
#[serial]
fn test_resolve_is_idempotent() {
    env::set_var("PORT", "8080");

    let first = fetch("PORT").kind(Kind::Integer).resolve().unwrap();
    let second = fetch("PORT").kind(Kind::Integer).resolve().unwrap();
    assert_eq!(first, second);

    env::remove_var("PORT");

    let first = fetch("PORT").kind(Kind::Integer).default(1).resolve().unwrap();
    let second = fetch("PORT").kind(Kind::Integer).default(1).resolve().unwrap();
    assert_eq!(first, second);
}

#[test]
#[serial]
fn test_nil_default_still_trips_required() {
    env::remove_var("API_KEY");

    // No default supplied at all behaves the same as an absent default.
    let err = fetch("API_KEY").required().resolve().unwrap_err();
    assert!(matches!(err, EnvError::Missing { .. }));
}
