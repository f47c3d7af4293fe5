//! Star-rating histogram and consistency metric.

use pharmafind_core::{RatingDistribution, Review};

/// Largest population variance expected for ratings spread across 1–5.
const VARIANCE_NORMALIZER: f64 = 4.0;

/// Build the rating histogram for a set of raw star ratings.
///
/// Ratings outside 1–5 are left out of the buckets but still count towards
/// `total_reviews`, and still feed the mean and variance behind
/// `consistency`. Percentages are rounded to one decimal place.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn rating_distribution(ratings: &[i32]) -> RatingDistribution {
    let mut counts = [0usize; 5];
    for &rating in ratings {
        if let Ok(star @ 1..=5) = usize::try_from(rating) {
            counts[star - 1] += 1;
        }
    }

    let total = ratings.len();
    let mut percentages = [0.0f64; 5];
    if total > 0 {
        for (pct, &count) in percentages.iter_mut().zip(counts.iter()) {
            *pct = round_one_decimal(count as f64 / total as f64 * 100.0);
        }
    }

    RatingDistribution {
        counts,
        percentages,
        consistency: consistency(ratings),
        total_reviews: total,
    }
}

/// [`rating_distribution`] over the ratings of a review list.
#[must_use]
pub fn from_reviews(reviews: &[Review]) -> RatingDistribution {
    let ratings: Vec<i32> = reviews.iter().map(|r| r.rating).collect();
    rating_distribution(&ratings)
}

#[allow(clippy::cast_precision_loss)]
fn consistency(ratings: &[i32]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let n = ratings.len() as f64;
    let mean = ratings.iter().map(|&r| f64::from(r)).sum::<f64>() / n;
    let variance = ratings
        .iter()
        .map(|&r| (f64::from(r) - mean).powi(2))
        .sum::<f64>()
        / n;
    (1.0 - variance / VARIANCE_NORMALIZER).max(0.0)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
