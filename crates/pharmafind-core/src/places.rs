//! Place and review records for a single search session.

use serde::{Deserialize, Serialize};

use crate::analysis::ReviewAnalysis;
use crate::geo::{format_distance, Coordinates};

/// A single customer review as returned by the place-detail provider.
///
/// `rating` is nominally 1–5 but is kept signed and unvalidated; the
/// distribution analyzer decides what to do with out-of-range values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub text: String,
    pub rating: i32,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub relative_time: String,
}

/// A raw search hit before distance or enrichment is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub location: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OpeningHours {
    pub open_now: Option<bool>,
    pub weekday_descriptions: Vec<String>,
}

/// Detail record for one place, as returned by the place-detail provider.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceDetails {
    pub rating: Option<f64>,
    pub user_ratings_total: u32,
    pub reviews: Vec<Review>,
    pub phone: Option<String>,
    pub opening_hours: Option<OpeningHours>,
}

/// Where a place is in the enrichment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentState {
    Pending,
    Fetching,
    Enriched,
    /// The provider answered but had no details for this place.
    Unavailable,
    /// The detail fetch errored; base fields are kept.
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Nearest,
    TopRated,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Nearest => write!(f, "nearest"),
            SortMode::TopRated => write!(f, "top-rated"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest" => Ok(SortMode::Nearest),
            "top-rated" | "topRated" | "top_rated" => Ok(SortMode::TopRated),
            other => Err(format!(
                "unknown sort mode '{other}' (expected 'nearest' or 'top-rated')"
            )),
        }
    }
}

/// A search result augmented with distance and, once fetched, detail data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub location: Coordinates,
    pub distance_km: f64,
    pub rating: Option<f64>,
    pub user_ratings_total: u32,
    pub reviews: Vec<Review>,
    pub phone: Option<String>,
    pub opening_hours: Option<OpeningHours>,
    pub review_analysis: Option<ReviewAnalysis>,
    pub overall_score: f64,
    pub enrichment: EnrichmentState,
    /// Position in the provider's response; breaks distance ties.
    #[serde(skip)]
    pub provider_index: usize,
}

impl Place {
    /// Builds an un-enriched place from a search hit and its distance from the searcher.
    #[must_use]
    pub fn from_candidate(candidate: PlaceCandidate, distance_km: f64) -> Self {
        Self {
            id: candidate.id,
            name: candidate.name,
            address: candidate.address,
            location: candidate.location,
            distance_km,
            rating: None,
            user_ratings_total: 0,
            reviews: Vec::new(),
            phone: None,
            opening_hours: None,
            review_analysis: None,
            overall_score: 0.0,
            enrichment: EnrichmentState::Pending,
            provider_index: 0,
        }
    }

    #[must_use]
    pub fn distance_text(&self) -> String {
        format_distance(self.distance_km)
    }

    /// Copies a detail record onto this place. A zero rating is stored as absent.
    pub fn apply_details(&mut self, details: PlaceDetails) {
        self.rating = details.rating.filter(|r| *r > 0.0);
        self.user_ratings_total = details.user_ratings_total;
        self.reviews = details.reviews;
        self.phone = details.phone.filter(|p| !p.is_empty());
        self.opening_hours = details.opening_hours;
    }
}
