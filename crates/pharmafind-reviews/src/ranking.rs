//! Composite ranking score and place ordering.

use pharmafind_core::{Place, ScoreWeights, SortMode};

/// Distance at which the proximity component reaches zero.
pub const DISTANCE_HORIZON_KM: f64 = 50.0;

/// Sentiment component used when a place has no review analysis yet.
const NEUTRAL_SENTIMENT: f64 = 0.5;

const MAX_REVIEW_BONUS: f64 = 0.1;

/// Blend rating, sentiment and proximity into a ranking score in `[0, 1]`.
///
/// Each component is normalised to `[0, 1]` and weighted, then a small
/// reliability bonus (up to `0.1`, reached at 100 ratings) is added and the
/// total capped at `1.0`.
#[must_use]
pub fn overall_score(place: &Place, weights: &ScoreWeights) -> f64 {
    let rating_score = place.rating.map_or(0.0, |r| r / 5.0);
    let sentiment_score = place
        .review_analysis
        .as_ref()
        .map_or(NEUTRAL_SENTIMENT, |a| a.sentiment_score);
    let distance_score = (1.0 - place.distance_km / DISTANCE_HORIZON_KM).max(0.0);

    let weighted = rating_score * weights.rating
        + sentiment_score * weights.sentiment
        + distance_score * weights.distance;

    let review_bonus = if place.user_ratings_total > 0 {
        (f64::from(place.user_ratings_total) / 100.0 * MAX_REVIEW_BONUS).min(MAX_REVIEW_BONUS)
    } else {
        0.0
    };

    (weighted + review_bonus).min(1.0)
}

/// Reorder places in memory.
///
/// Nearest breaks distance ties by provider order, so toggling modes never
/// leaves equidistant places in score order. Top-rated is stable.
pub fn sort_places(places: &mut [Place], mode: SortMode) {
    match mode {
        SortMode::Nearest => places.sort_by(|a, b| {
            a.distance_km
                .total_cmp(&b.distance_km)
                .then(a.provider_index.cmp(&b.provider_index))
        }),
        SortMode::TopRated => places.sort_by(|a, b| b.overall_score.total_cmp(&a.overall_score)),
    }
}
