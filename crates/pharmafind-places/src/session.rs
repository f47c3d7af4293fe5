//! Search session: the current place list, its sort mode and generation.

use pharmafind_core::{distance_km, AppConfig, Coordinates, Place, SortMode};
use pharmafind_reviews::sort_places;

use crate::enrich::{
    EnrichmentOutcome, EnrichmentProgress, EnrichmentResult, EnrichmentRun, Enricher,
};
use crate::error::SearchError;
use crate::generation::SearchGeneration;
use crate::provider::{Geolocator, PlaceDetailsSource, PlaceSearch};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSettings {
    pub default_radius_km: f64,
    pub max_radius_km: f64,
    pub max_results: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_radius_km: 5.0,
            max_radius_km: 50.0,
            max_results: 20,
        }
    }
}

impl SearchSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            default_radius_km: config.default_radius_km,
            max_radius_km: config.max_radius_km,
            max_results: config.max_results,
        }
    }

    /// Non-positive (or NaN) radii fall back to the default; larger ones are capped.
    #[must_use]
    pub fn resolve_radius(&self, requested_km: f64) -> f64 {
        if requested_km > 0.0 {
            requested_km.min(self.max_radius_km)
        } else {
            self.default_radius_km
        }
    }
}

/// Holds one search's places between user actions.
///
/// A new search replaces the list and advances the generation, which
/// invalidates any enrichment run still working on the previous list.
pub struct SearchSession<S> {
    search: S,
    settings: SearchSettings,
    generation: SearchGeneration,
    places: Vec<Place>,
    sort_mode: SortMode,
}

impl<S: PlaceSearch> SearchSession<S> {
    #[must_use]
    pub fn new(search: S, settings: SearchSettings) -> Self {
        Self {
            search,
            settings,
            generation: SearchGeneration::new(),
            places: Vec::new(),
            sort_mode: SortMode::Nearest,
        }
    }

    /// Resolve the caller's position, then [`search`](Self::search) around it.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Geolocation`] if the position cannot be
    /// resolved, or [`SearchError::Search`] if the place search fails.
    pub async fn search_from<G: Geolocator>(
        &mut self,
        geolocator: &G,
        radius_km: f64,
    ) -> Result<usize, SearchError> {
        let center = geolocator.current_position().await?;
        self.search(center, radius_km).await
    }

    /// Run a place search and replace the list with its results.
    ///
    /// Computes each hit's distance from `center`, drops hits outside the
    /// radius, and orders the rest nearest first. Returns the number of
    /// places kept.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Search`] if the place search fails; the previous
    /// list is cleared either way.
    pub async fn search(&mut self, center: Coordinates, radius_km: f64) -> Result<usize, SearchError> {
        let radius_km = self.settings.resolve_radius(radius_km);
        let guard = self.generation.advance();
        self.places.clear();

        tracing::info!(
            generation = guard.id(),
            lat = center.lat,
            lng = center.lng,
            radius_km,
            "starting place search"
        );

        let candidates = self
            .search
            .search_nearby(center, radius_km, self.settings.max_results)
            .await?;
        let found = candidates.len();

        self.places = candidates
            .into_iter()
            .enumerate()
            .map(|(provider_index, candidate)| {
                let distance = distance_km(center, candidate.location);
                Place {
                    provider_index,
                    ..Place::from_candidate(candidate, distance)
                }
            })
            .filter(|place| place.distance_km <= radius_km)
            .collect();
        self.sort_by(SortMode::Nearest);

        tracing::info!(
            generation = guard.id(),
            found,
            within_radius = self.places.len(),
            "place search complete"
        );
        Ok(self.places.len())
    }

    /// Snapshot the current list for enrichment, tied to the current generation.
    #[must_use]
    pub fn begin_enrichment(&self) -> EnrichmentRun {
        EnrichmentRun::new(self.generation.guard(), self.sort_mode, self.places.clone())
    }

    /// Apply a finished run if it still belongs to the current search.
    ///
    /// In top-rated mode the list is re-sorted by score. In nearest mode the
    /// order is left as it was, unless the user switched modes while the run
    /// was in flight. Returns `false` when the result was discarded.
    pub fn apply_enrichment(&mut self, result: EnrichmentResult) -> bool {
        let EnrichmentOutcome::Completed(_) = result.outcome else {
            return false;
        };
        if !result.guard.is_current() {
            tracing::info!(
                stale = result.guard.id(),
                current = self.generation.current(),
                "discarding enrichment results from a superseded search"
            );
            return false;
        }

        self.places = result.places;
        if self.sort_mode == SortMode::TopRated || self.sort_mode != result.sort_mode {
            sort_places(&mut self.places, self.sort_mode);
        }
        true
    }

    /// Enrich the current list in place: snapshot, run, apply.
    pub async fn enrich<D, F>(&mut self, enricher: &Enricher<D>, on_progress: F) -> EnrichmentOutcome
    where
        D: PlaceDetailsSource,
        F: FnMut(EnrichmentProgress),
    {
        let run = self.begin_enrichment();
        let result = enricher.run(run, on_progress).await;
        let outcome = result.outcome;
        self.apply_enrichment(result);
        outcome
    }

    /// Switch sort mode and reorder the in-memory list.
    pub fn sort_by(&mut self, mode: SortMode) {
        self.sort_mode = mode;
        sort_places(&mut self.places, mode);
    }

    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    #[must_use]
    pub fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }

    #[must_use]
    pub fn generation(&self) -> &SearchGeneration {
        &self.generation
    }

    #[must_use]
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
