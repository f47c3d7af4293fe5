//! Incremental enrichment of search results.
//!
//! Places are enriched strictly one at a time: fetch details, attach the
//! review analysis, compute the ranking score, report progress, wait a fixed
//! delay, move on. A failed fetch is logged and skipped; it never aborts the
//! batch and is never retried.

use std::time::Duration;

use pharmafind_core::{EnrichmentState, Place, ScoreWeights, SortMode};
use pharmafind_reviews::{analyze_reviews, overall_score, MIN_REVIEWS_FOR_ANALYSIS};

use crate::generation::GenerationGuard;
use crate::provider::PlaceDetailsSource;

/// Pause after every place, whatever its outcome, to stay under provider rate limits.
pub const DEFAULT_INTER_REQUEST_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrichmentProgress {
    pub processed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnrichmentSummary {
    pub enriched: usize,
    /// Places without an identifier, or whose details the provider did not have.
    pub unavailable: usize,
    pub failed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    Completed(EnrichmentSummary),
    /// A newer search started before the run finished.
    Superseded { processed: usize },
}

/// A snapshot of one search's places, tied to that search's generation.
#[derive(Debug, Clone)]
pub struct EnrichmentRun {
    pub(crate) guard: GenerationGuard,
    pub(crate) sort_mode: SortMode,
    pub(crate) places: Vec<Place>,
}

impl EnrichmentRun {
    #[must_use]
    pub fn new(guard: GenerationGuard, sort_mode: SortMode, places: Vec<Place>) -> Self {
        Self {
            guard,
            sort_mode,
            places,
        }
    }

    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }
}

/// A finished (or abandoned) run, ready to hand back to its session.
#[derive(Debug, Clone)]
pub struct EnrichmentResult {
    pub(crate) guard: GenerationGuard,
    pub(crate) sort_mode: SortMode,
    pub places: Vec<Place>,
    pub outcome: EnrichmentOutcome,
}

impl EnrichmentResult {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.guard.id()
    }
}

pub struct Enricher<D> {
    details: D,
    weights: ScoreWeights,
    min_reviews: usize,
    inter_request_delay: Duration,
}

impl<D: PlaceDetailsSource> Enricher<D> {
    #[must_use]
    pub fn new(details: D) -> Self {
        Self {
            details,
            weights: ScoreWeights::default(),
            min_reviews: MIN_REVIEWS_FOR_ANALYSIS,
            inter_request_delay: DEFAULT_INTER_REQUEST_DELAY,
        }
    }

    #[must_use]
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    #[must_use]
    pub fn with_min_reviews(mut self, min_reviews: usize) -> Self {
        self.min_reviews = min_reviews;
        self
    }

    #[must_use]
    pub fn with_inter_request_delay(mut self, delay: Duration) -> Self {
        self.inter_request_delay = delay;
        self
    }

    /// Enrich a run's snapshot and hand it back with the outcome.
    pub async fn run<F>(&self, run: EnrichmentRun, on_progress: F) -> EnrichmentResult
    where
        F: FnMut(EnrichmentProgress),
    {
        let EnrichmentRun {
            guard,
            sort_mode,
            mut places,
        } = run;
        let outcome = self.enrich(&mut places, &guard, on_progress).await;
        EnrichmentResult {
            guard,
            sort_mode,
            places,
            outcome,
        }
    }

    /// Enrich `places` in order.
    ///
    /// The guard is checked before each fetch and again before a fetched
    /// record is applied; once it is stale the run stops and reports
    /// [`EnrichmentOutcome::Superseded`].
    pub async fn enrich<F>(
        &self,
        places: &mut [Place],
        guard: &GenerationGuard,
        mut on_progress: F,
    ) -> EnrichmentOutcome
    where
        F: FnMut(EnrichmentProgress),
    {
        let total = places.len();
        let mut summary = EnrichmentSummary::default();

        for (index, place) in places.iter_mut().enumerate() {
            if !guard.is_current() {
                return superseded(guard, index);
            }

            match place.id.clone() {
                None => {
                    place.enrichment = EnrichmentState::Unavailable;
                    summary.unavailable += 1;
                }
                Some(place_id) => {
                    place.enrichment = EnrichmentState::Fetching;
                    let fetched = self.details.place_details(&place_id).await;

                    if !guard.is_current() {
                        return superseded(guard, index);
                    }

                    match fetched {
                        Ok(Some(details)) => {
                            place.apply_details(details);
                            place.review_analysis =
                                Some(analyze_reviews(&place.reviews, self.min_reviews));
                            place.overall_score = overall_score(place, &self.weights);
                            place.enrichment = EnrichmentState::Enriched;
                            summary.enriched += 1;
                        }
                        Ok(None) => {
                            tracing::debug!(
                                place_id = %place_id,
                                name = %place.name,
                                "place details unavailable"
                            );
                            place.enrichment = EnrichmentState::Unavailable;
                            summary.unavailable += 1;
                        }
                        Err(e) => {
                            tracing::warn!(
                                place_id = %place_id,
                                name = %place.name,
                                error = %e,
                                "failed to fetch place details; skipping"
                            );
                            place.enrichment = EnrichmentState::Failed;
                            summary.failed += 1;
                        }
                    }
                }
            }

            let processed = index + 1;
            tracing::debug!(processed, total, "enrichment progress");
            on_progress(EnrichmentProgress { processed, total });

            tokio::time::sleep(self.inter_request_delay).await;
        }

        tracing::info!(
            generation = guard.id(),
            total,
            enriched = summary.enriched,
            unavailable = summary.unavailable,
            failed = summary.failed,
            "enrichment complete"
        );
        EnrichmentOutcome::Completed(summary)
    }
}

fn superseded(guard: &GenerationGuard, processed: usize) -> EnrichmentOutcome {
    tracing::info!(
        generation = guard.id(),
        processed,
        "enrichment superseded by a newer search; discarding results"
    );
    EnrichmentOutcome::Superseded { processed }
}

#[cfg(test)]
#[path = "enrich_test.rs"]
mod tests;
