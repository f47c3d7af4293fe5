//! Place search, detail enrichment and search-session state for pharmafind.
//!
//! The external providers (place search, place details, geolocation) sit
//! behind the traits in [`provider`]; [`PlacesClient`] implements the first
//! two against a Places-style REST API. [`Enricher`] walks a search's places
//! one at a time, and [`SearchSession`] owns the ranked list and its
//! generation counter so stale enrichment runs never overwrite a newer search.

pub mod client;
pub mod enrich;
pub mod error;
pub mod generation;
pub mod normalize;
pub mod provider;
pub mod session;
pub mod types;

pub use client::PlacesClient;
pub use enrich::{
    EnrichmentOutcome, EnrichmentProgress, EnrichmentResult, EnrichmentRun, EnrichmentSummary,
    Enricher,
};
pub use error::{GeolocationError, PlacesError, SearchError};
pub use generation::{GenerationGuard, SearchGeneration};
pub use provider::{FixedLocation, Geolocator, PlaceDetailsSource, PlaceSearch};
pub use session::{SearchSession, SearchSettings};

#[cfg(test)]
mod testing;
