use crate::geo::Coordinates;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Relative weights of the composite ranking score components.
///
/// The three weights are expected to sum to `1.0`, but nothing enforces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    pub rating: f64,
    pub sentiment: f64,
    pub distance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            rating: 0.4,
            sentiment: 0.3,
            distance: 0.3,
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    pub places_api_key: Option<String>,
    pub places_base_url: String,
    pub place_query: String,
    pub default_radius_km: f64,
    pub max_radius_km: f64,
    pub max_results: usize,
    pub default_center: Coordinates,
    pub weights: ScoreWeights,
    pub min_reviews_for_analysis: usize,
    pub request_timeout_secs: u64,
    pub inter_request_delay_ms: u64,
}

impl AppConfig {
    /// Returns the Places API key, or an error naming the missing variable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] when `PHARMAFIND_PLACES_API_KEY` was not set.
    pub fn require_places_api_key(&self) -> Result<&str, ConfigError> {
        self.places_api_key
            .as_deref()
            .ok_or_else(|| ConfigError::MissingEnvVar("PHARMAFIND_PLACES_API_KEY".to_string()))
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "places_api_key",
                &self.places_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("places_base_url", &self.places_base_url)
            .field("place_query", &self.place_query)
            .field("default_radius_km", &self.default_radius_km)
            .field("max_radius_km", &self.max_radius_km)
            .field("max_results", &self.max_results)
            .field("default_center", &self.default_center)
            .field("weights", &self.weights)
            .field("min_reviews_for_analysis", &self.min_reviews_for_analysis)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .finish()
    }
}
