use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

/// Returns a map with a configured Airtable credential.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("AIRTABLE_TOKEN", "pat-test-token");
    m.insert("AIRTABLE_BASE_ID", "appTestBase");
    m
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_fails() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "APTSITE_ENV"));
}

#[test]
fn build_app_config_applies_defaults() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.airtable.pricing_table, "Pricing");
    assert_eq!(cfg.airtable.faq_table, "FAQ");
    assert_eq!(cfg.airtable.api_url, "https://api.airtable.com/v0/");
    assert_eq!(cfg.airtable.timeout_secs, 15);
    assert_eq!(
        cfg.airtable.credentials(),
        Some(("pat-test-token", "appTestBase"))
    );
}

#[test]
fn build_app_config_allows_missing_token_in_development() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.airtable.token.is_none());
    assert!(cfg.airtable.credentials().is_none());
}

#[test]
fn build_app_config_treats_blank_token_as_missing() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("AIRTABLE_TOKEN", "   ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.airtable.token.is_none());
}

#[test]
fn build_app_config_requires_token_in_production() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("APTSITE_ENV", "production");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "AIRTABLE_TOKEN"),
        "expected MissingEnvVar(AIRTABLE_TOKEN), got: {result:?}"
    );
}

#[test]
fn build_app_config_requires_base_id_with_token() {
    let mut map = full_env();
    map.remove("AIRTABLE_BASE_ID");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "AIRTABLE_BASE_ID"),
        "expected MissingEnvVar(AIRTABLE_BASE_ID), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = full_env();
    map.insert("APTSITE_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APTSITE_BIND_ADDR"),
        "expected InvalidEnvVar(APTSITE_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = full_env();
    map.insert("APTSITE_UPSTREAM_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APTSITE_UPSTREAM_TIMEOUT_SECS"),
        "expected InvalidEnvVar(APTSITE_UPSTREAM_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_overrides_tables() {
    let mut map = full_env();
    map.insert("AIRTABLE_PRICING_TABLE", "tblPricing");
    map.insert("AIRTABLE_FAQ_TABLE", "tblFaq");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.airtable.pricing_table, "tblPricing");
    assert_eq!(cfg.airtable.faq_table, "tblFaq");
}

#[test]
fn debug_output_redacts_token() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("pat-test-token"), "{rendered}");
    assert!(rendered.contains("[redacted]"));
}
