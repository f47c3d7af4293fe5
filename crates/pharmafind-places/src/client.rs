//! HTTP client for a Places-style REST API.
//!
//! Text search runs against `POST {base}/places:searchText` and details
//! against `GET {base}/places/{id}`. The API key and a field mask travel as
//! headers. There is no retry: a failed call is reported once and the caller
//! decides what to skip.

use std::time::Duration;

use async_trait::async_trait;
use pharmafind_core::{Coordinates, PlaceCandidate, PlaceDetails};
use reqwest::{Client, Response, StatusCode, Url};

use crate::error::PlacesError;
use crate::normalize::{normalize_details, normalize_place};
use crate::provider::{PlaceDetailsSource, PlaceSearch};
use crate::types::{
    Circle, LatLng, LocationBias, PlaceDetailsResponse, SearchTextRequest, SearchTextResponse,
};

const DEFAULT_BASE_URL: &str = "https://places.googleapis.com/v1/";
const DEFAULT_QUERY: &str = "pharmacy";

const API_KEY_HEADER: &str = "X-Goog-Api-Key";
const FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";
const SEARCH_FIELD_MASK: &str =
    "places.id,places.displayName,places.formattedAddress,places.location";
const DETAILS_FIELD_MASK: &str =
    "id,rating,userRatingCount,reviews,nationalPhoneNumber,regularOpeningHours";

/// Client for the Places REST API.
///
/// Use [`PlacesClient::new`] for production or [`PlacesClient::with_base_url`]
/// to point at a mock server in tests.
#[derive(Debug, Clone)]
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    query: String,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` does not parse or cannot carry a path.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("pharmafind/0.1 (pharmacy-finder)")
            .build()?;

        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(PlacesError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot be a base".to_owned(),
            });
        }

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: parsed,
            query: DEFAULT_QUERY.to_owned(),
        })
    }

    /// Replaces the text query sent with every search (default `"pharmacy"`).
    #[must_use]
    pub fn with_query(mut self, query: &str) -> Self {
        self.query = query.to_owned();
        self
    }

    /// Searches for places matching the configured query, biased to a circle.
    ///
    /// Hits without a location are dropped.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::RateLimited`] on HTTP 429.
    /// - [`PlacesError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn search_text(
        &self,
        center: Coordinates,
        radius_km: f64,
        max_results: usize,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        let url = self.endpoint(&["places:searchText"]);
        let request = SearchTextRequest {
            text_query: &self.query,
            location_bias: LocationBias {
                circle: Circle {
                    center: LatLng {
                        latitude: center.lat,
                        longitude: center.lng,
                    },
                    radius: radius_km * 1000.0,
                },
            },
            max_result_count: max_results,
        };

        let response = self
            .client
            .post(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, SEARCH_FIELD_MASK)
            .json(&request)
            .send()
            .await?;
        let response = Self::check_status(response, &url)?;

        let body = response.text().await?;
        let parsed = serde_json::from_str::<SearchTextResponse>(&body).map_err(|e| {
            PlacesError::Deserialize {
                context: format!("searchText(query={})", self.query),
                source: e,
            }
        })?;

        let candidates: Vec<PlaceCandidate> = parsed
            .places
            .into_iter()
            .filter_map(normalize_place)
            .collect();
        tracing::debug!(
            query = %self.query,
            radius_km,
            count = candidates.len(),
            "places search returned candidates"
        );
        Ok(candidates)
    }

    /// Fetches rating, reviews, phone and opening hours for one place.
    ///
    /// Returns `Ok(None)` when the API answers 404 for the identifier.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::RateLimited`] on HTTP 429.
    /// - [`PlacesError::UnexpectedStatus`] on any other non-2xx status.
    /// - [`PlacesError::Http`] on network failure.
    /// - [`PlacesError::Deserialize`] if the body does not match the expected shape.
    pub async fn get_place_details(
        &self,
        place_id: &str,
    ) -> Result<Option<PlaceDetails>, PlacesError> {
        let url = self.endpoint(&["places", place_id]);

        let response = self
            .client
            .get(url.clone())
            .header(API_KEY_HEADER, &self.api_key)
            .header(FIELD_MASK_HEADER, DETAILS_FIELD_MASK)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(place_id, "no details available for place");
            return Ok(None);
        }
        let response = Self::check_status(response, &url)?;

        let body = response.text().await?;
        let parsed = serde_json::from_str::<PlaceDetailsResponse>(&body).map_err(|e| {
            PlacesError::Deserialize {
                context: format!("placeDetails(id={place_id})"),
                source: e,
            }
        })?;

        Ok(Some(normalize_details(parsed)))
    }

    /// Appends percent-encoded path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn check_status(response: Response, url: &Url) -> Result<Response, PlacesError> {
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after_secs = response
                .headers()
                .get(reqwest::header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(PlacesError::RateLimited { retry_after_secs });
        }

        if !status.is_success() {
            return Err(PlacesError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl PlaceSearch for PlacesClient {
    async fn search_nearby(
        &self,
        center: Coordinates,
        radius_km: f64,
        max_results: usize,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        self.search_text(center, radius_km, max_results).await
    }
}

#[async_trait]
impl PlaceDetailsSource for PlacesClient {
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
        self.get_place_details(place_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_keeps_base_path() {
        let client =
            PlacesClient::with_base_url("k", 5, "https://places.example.com/v1").unwrap();
        assert_eq!(
            client.endpoint(&["places:searchText"]).as_str(),
            "https://places.example.com/v1/places:searchText"
        );
    }

    #[test]
    fn endpoint_encodes_place_id() {
        let client = PlacesClient::with_base_url("k", 5, "http://127.0.0.1:9000/").unwrap();
        assert_eq!(
            client.endpoint(&["places", "a b/c"]).as_str(),
            "http://127.0.0.1:9000/places/a%20b%2Fc"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = PlacesClient::with_base_url("k", 5, "not a url");
        assert!(matches!(result, Err(PlacesError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn default_query_is_pharmacy() {
        let client = PlacesClient::new("k", 5).unwrap();
        assert_eq!(client.query, "pharmacy");
        assert_eq!(client.with_query("chemist").query, "chemist");
    }
}
