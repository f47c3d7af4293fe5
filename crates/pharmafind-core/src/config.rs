use std::str::FromStr;

use crate::app_config::{AppConfig, Environment, ScoreWeights};
use crate::geo::Coordinates;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it from a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let value = parse_value::<f64>(var, &or_default(var, default))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("{value} is not a finite number"),
            })
        }
    };

    let env = parse_environment(&or_default("PHARMAFIND_ENV", "development"));
    let log_level = or_default("PHARMAFIND_LOG_LEVEL", "info");
    let places_api_key = lookup("PHARMAFIND_PLACES_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let places_base_url = or_default(
        "PHARMAFIND_PLACES_BASE_URL",
        "https://places.googleapis.com/v1/",
    );
    let place_query = or_default("PHARMAFIND_PLACE_QUERY", "pharmacy");

    let default_radius_km = parse("PHARMAFIND_DEFAULT_RADIUS_KM", "5")?;
    let max_radius_km = parse("PHARMAFIND_MAX_RADIUS_KM", "50")?;
    if default_radius_km <= 0.0 || default_radius_km > max_radius_km {
        return Err(ConfigError::InvalidEnvVar {
            var: "PHARMAFIND_DEFAULT_RADIUS_KM".to_string(),
            reason: format!(
                "default radius {default_radius_km} must be positive and at most the maximum radius {max_radius_km}"
            ),
        });
    }

    let max_results = parse_value::<usize>(
        "PHARMAFIND_MAX_RESULTS",
        &or_default("PHARMAFIND_MAX_RESULTS", "20"),
    )?;

    let default_center = Coordinates {
        lat: parse("PHARMAFIND_DEFAULT_LAT", "12.9716")?,
        lng: parse("PHARMAFIND_DEFAULT_LNG", "77.5946")?,
    };

    let weights = ScoreWeights {
        rating: parse("PHARMAFIND_WEIGHT_RATING", "0.4")?,
        sentiment: parse("PHARMAFIND_WEIGHT_SENTIMENT", "0.3")?,
        distance: parse("PHARMAFIND_WEIGHT_DISTANCE", "0.3")?,
    };

    let min_reviews_for_analysis = parse_value::<usize>(
        "PHARMAFIND_MIN_REVIEWS_FOR_ANALYSIS",
        &or_default("PHARMAFIND_MIN_REVIEWS_FOR_ANALYSIS", "3"),
    )?;
    let request_timeout_secs = parse_value::<u64>(
        "PHARMAFIND_REQUEST_TIMEOUT_SECS",
        &or_default("PHARMAFIND_REQUEST_TIMEOUT_SECS", "30"),
    )?;
    let inter_request_delay_ms = parse_value::<u64>(
        "PHARMAFIND_INTER_REQUEST_DELAY_MS",
        &or_default("PHARMAFIND_INTER_REQUEST_DELAY_MS", "100"),
    )?;

    Ok(AppConfig {
        env,
        log_level,
        places_api_key,
        places_base_url,
        place_query,
        default_radius_km,
        max_radius_km,
        max_results,
        default_center,
        weights,
        min_reviews_for_analysis,
        request_timeout_secs,
        inter_request_delay_ms,
    })
}

fn parse_value<T>(var: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
