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

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();

    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert!(cfg.places_api_key.is_none());
    assert_eq!(cfg.places_base_url, "https://places.googleapis.com/v1/");
    assert_eq!(cfg.place_query, "pharmacy");
    assert!((cfg.default_radius_km - 5.0).abs() < f64::EPSILON);
    assert!((cfg.max_radius_km - 50.0).abs() < f64::EPSILON);
    assert_eq!(cfg.max_results, 20);
    assert!((cfg.default_center.lat - 12.9716).abs() < 1e-9);
    assert!((cfg.default_center.lng - 77.5946).abs() < 1e-9);
    assert_eq!(cfg.weights, ScoreWeights::default());
    assert_eq!(cfg.min_reviews_for_analysis, 3);
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.inter_request_delay_ms, 100);
}

#[test]
fn weights_override() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_WEIGHT_RATING", "0.5");
    map.insert("PHARMAFIND_WEIGHT_SENTIMENT", "0.25");
    map.insert("PHARMAFIND_WEIGHT_DISTANCE", "0.25");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.weights.rating - 0.5).abs() < f64::EPSILON);
    assert!((cfg.weights.sentiment - 0.25).abs() < f64::EPSILON);
    assert!((cfg.weights.distance - 0.25).abs() < f64::EPSILON);
}

#[test]
fn weights_not_summing_to_one_are_accepted() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_WEIGHT_RATING", "0.9");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.weights.rating - 0.9).abs() < f64::EPSILON);
}

#[test]
fn invalid_weight_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_WEIGHT_SENTIMENT", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMAFIND_WEIGHT_SENTIMENT"),
        "expected InvalidEnvVar(PHARMAFIND_WEIGHT_SENTIMENT), got: {result:?}"
    );
}

#[test]
fn min_reviews_override() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_MIN_REVIEWS_FOR_ANALYSIS", "5");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.min_reviews_for_analysis, 5);
}

#[test]
fn min_reviews_negative_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_MIN_REVIEWS_FOR_ANALYSIS", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMAFIND_MIN_REVIEWS_FOR_ANALYSIS"),
        "expected InvalidEnvVar(PHARMAFIND_MIN_REVIEWS_FOR_ANALYSIS), got: {result:?}"
    );
}

#[test]
fn default_radius_above_max_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_DEFAULT_RADIUS_KM", "60");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMAFIND_DEFAULT_RADIUS_KM"),
        "expected InvalidEnvVar(PHARMAFIND_DEFAULT_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn nan_default_radius_is_rejected() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_DEFAULT_RADIUS_KM", "NaN");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMAFIND_DEFAULT_RADIUS_KM"),
        "expected InvalidEnvVar(PHARMAFIND_DEFAULT_RADIUS_KM), got: {result:?}"
    );
}

#[test]
fn non_finite_max_radius_is_rejected() {
    for raw in ["NaN", "inf"] {
        let mut map = HashMap::new();
        map.insert("PHARMAFIND_MAX_RADIUS_KM", raw);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMAFIND_MAX_RADIUS_KM"),
            "expected InvalidEnvVar(PHARMAFIND_MAX_RADIUS_KM) for {raw}, got: {result:?}"
        );
    }
}

#[test]
fn nan_weights_are_rejected() {
    for var in [
        "PHARMAFIND_WEIGHT_RATING",
        "PHARMAFIND_WEIGHT_SENTIMENT",
        "PHARMAFIND_WEIGHT_DISTANCE",
    ] {
        let mut map = HashMap::new();
        map.insert(var, "NaN");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { var: ref got, .. }) if got == var),
            "expected InvalidEnvVar({var}), got: {result:?}"
        );
    }
}

#[test]
fn inter_request_delay_invalid() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_INTER_REQUEST_DELAY_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PHARMAFIND_INTER_REQUEST_DELAY_MS"),
        "expected InvalidEnvVar(PHARMAFIND_INTER_REQUEST_DELAY_MS), got: {result:?}"
    );
}

#[test]
fn blank_api_key_is_treated_as_missing() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_PLACES_API_KEY", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(matches!(
        cfg.require_places_api_key(),
        Err(ConfigError::MissingEnvVar(ref v)) if v == "PHARMAFIND_PLACES_API_KEY"
    ));
}

#[test]
fn debug_output_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("PHARMAFIND_PLACES_API_KEY", "super-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.require_places_api_key().unwrap(), "super-secret");
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("[redacted]"));
}
