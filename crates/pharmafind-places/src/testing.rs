//! In-memory providers for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use pharmafind_core::{Coordinates, PlaceCandidate, PlaceDetails, Review};

use crate::error::{GeolocationError, PlacesError};
use crate::generation::SearchGeneration;
use crate::provider::{Geolocator, PlaceDetailsSource, PlaceSearch};

pub(crate) enum FakeDetail {
    Found(PlaceDetails),
    Missing,
    Error,
}

#[derive(Default)]
pub(crate) struct FakeDetails {
    responses: HashMap<String, FakeDetail>,
    calls: Mutex<Vec<String>>,
    /// Starts a new search generation while this place is being fetched.
    advance_on: Option<(String, SearchGeneration)>,
}

impl FakeDetails {
    pub(crate) fn with(mut self, place_id: &str, detail: FakeDetail) -> Self {
        self.responses.insert(place_id.to_owned(), detail);
        self
    }

    pub(crate) fn advance_generation_on(
        mut self,
        place_id: &str,
        generation: SearchGeneration,
    ) -> Self {
        self.advance_on = Some((place_id.to_owned(), generation));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlaceDetailsSource for FakeDetails {
    async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>, PlacesError> {
        self.calls.lock().unwrap().push(place_id.to_owned());
        if let Some((trigger, generation)) = &self.advance_on {
            if trigger == place_id {
                let _ = generation.advance();
            }
        }
        match self.responses.get(place_id) {
            Some(FakeDetail::Found(details)) => Ok(Some(details.clone())),
            Some(FakeDetail::Missing) | None => Ok(None),
            Some(FakeDetail::Error) => Err(PlacesError::UnexpectedStatus {
                status: 500,
                url: format!("fake://places/{place_id}"),
            }),
        }
    }
}

pub(crate) struct FakeSearch {
    pub(crate) candidates: Vec<PlaceCandidate>,
    pub(crate) fail: bool,
    pub(crate) requests: Mutex<Vec<(f64, usize)>>,
}

impl FakeSearch {
    pub(crate) fn returning(candidates: Vec<PlaceCandidate>) -> Self {
        Self {
            candidates,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            candidates: Vec::new(),
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl PlaceSearch for FakeSearch {
    async fn search_nearby(
        &self,
        _center: Coordinates,
        radius_km: f64,
        max_results: usize,
    ) -> Result<Vec<PlaceCandidate>, PlacesError> {
        self.requests.lock().unwrap().push((radius_km, max_results));
        if self.fail {
            return Err(PlacesError::UnexpectedStatus {
                status: 503,
                url: "fake://places:searchText".to_owned(),
            });
        }
        Ok(self.candidates.clone())
    }
}

pub(crate) struct DeniedLocation;

#[async_trait]
impl Geolocator for DeniedLocation {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::PermissionDenied)
    }
}

pub(crate) const ORIGIN: Coordinates = Coordinates { lat: 0.0, lng: 0.0 };

/// A candidate roughly `km` kilometres north of [`ORIGIN`].
pub(crate) fn candidate_north(id: &str, km: f64) -> PlaceCandidate {
    PlaceCandidate {
        id: Some(id.to_owned()),
        name: format!("Pharmacy {id}"),
        address: format!("{id} Main Road"),
        location: Coordinates {
            lat: km / 111.195,
            lng: 0.0,
        },
    }
}

pub(crate) fn review(rating: i32, text: &str) -> Review {
    Review {
        text: text.to_owned(),
        rating,
        author: "tester".to_owned(),
        relative_time: "a week ago".to_owned(),
    }
}

pub(crate) fn details(rating: f64, total: u32, reviews: Vec<Review>) -> PlaceDetails {
    PlaceDetails {
        rating: Some(rating),
        user_ratings_total: total,
        reviews,
        phone: Some("080 1234 5678".to_owned()),
        opening_hours: None,
    }
}
