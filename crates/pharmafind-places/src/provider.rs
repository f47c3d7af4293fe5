//! Seams for the external collaborators a search depends on.

use async_trait::async_trait;
use pharmafind_core::{Coordinates, PlaceCandidate, PlaceDetails};

use crate::error::{GeolocationError, PlacesError};

/// Finds candidate places around a point.
#[async_trait]
pub trait PlaceSearch: Send + Sync {
    async fn search_nearby(
        &self,
        center: Coordinates,
        radius_km: f64,
        max_results: usize,
    ) -> Result<Vec<PlaceCandidate>, PlacesError>;
}

/// Fetches the detail record (rating, reviews, phone, hours) for one place.
///
/// `Ok(None)` means the provider answered but has no details for the place.
#[async_trait]
pub trait PlaceDetailsSource: Send + Sync {
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError>;
}

/// Resolves the searcher's current position.
#[async_trait]
pub trait Geolocator: Send + Sync {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// A geolocator that always reports the same point, e.g. from CLI flags.
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl Geolocator for FixedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}
