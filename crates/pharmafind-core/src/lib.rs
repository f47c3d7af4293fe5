//! Shared domain types and configuration for pharmafind.

pub mod analysis;
pub mod app_config;
pub mod config;
pub mod geo;
pub mod places;

pub use analysis::{RatingDistribution, ReviewAnalysis, ReviewSentiment};
pub use app_config::{AppConfig, Environment, ScoreWeights};
pub use config::{load_app_config, load_app_config_from_env};
pub use geo::{distance_km, format_distance, Coordinates};
pub use places::{
    EnrichmentState, OpeningHours, Place, PlaceCandidate, PlaceDetails, Review, SortMode,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
