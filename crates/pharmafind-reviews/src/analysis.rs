//! Per-place review aggregation.

use pharmafind_core::{Review, ReviewAnalysis, ReviewSentiment};

use crate::distribution::from_reviews;
use crate::scorer::score_text;

/// Default minimum review count for an analysis to be considered reliable.
pub const MIN_REVIEWS_FOR_ANALYSIS: usize = 3;

const TOP_REVIEWS: usize = 3;

/// Aggregate a place's reviews into a [`ReviewAnalysis`].
///
/// Positive/negative/neutral counts and the top lists are driven by the star
/// rating, not by the computed sentiment. An empty slice yields
/// [`ReviewAnalysis::empty`].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_reviews(reviews: &[Review], min_reviews: usize) -> ReviewAnalysis {
    if reviews.is_empty() {
        return ReviewAnalysis::empty();
    }

    let sentiments: Vec<ReviewSentiment> = reviews
        .iter()
        .map(|review| ReviewSentiment {
            text: review.text.clone(),
            rating: review.rating,
            sentiment: score_text(&review.text),
            author: review.author.clone(),
            relative_time: review.relative_time.clone(),
        })
        .collect();

    let average_sentiment =
        sentiments.iter().map(|s| s.sentiment).sum::<f64>() / sentiments.len() as f64;

    let with_rating = |star: i32| sentiments.iter().filter(|s| s.rating == star).count();
    let five_star_count = with_rating(5);
    let four_star_count = with_rating(4);
    let three_star_count = with_rating(3);
    let two_star_count = with_rating(2);
    let one_star_count = with_rating(1);

    // `sort_by` is stable, so equal ratings keep provider order.
    let mut top_positive: Vec<ReviewSentiment> =
        sentiments.iter().filter(|s| s.rating >= 4).cloned().collect();
    top_positive.sort_by(|a, b| b.rating.cmp(&a.rating));
    top_positive.truncate(TOP_REVIEWS);

    let mut top_negative: Vec<ReviewSentiment> =
        sentiments.iter().filter(|s| s.rating <= 2).cloned().collect();
    top_negative.sort_by(|a, b| a.rating.cmp(&b.rating));
    top_negative.truncate(TOP_REVIEWS);

    ReviewAnalysis {
        average_sentiment,
        sentiment_score: (average_sentiment + 1.0) / 2.0,
        positive_count: five_star_count + four_star_count,
        negative_count: two_star_count + one_star_count,
        neutral_count: three_star_count,
        total_reviews: reviews.len(),
        has_enough_reviews: reviews.len() >= min_reviews,
        top_positive,
        top_negative,
        all_sentiments: sentiments,
        rating_distribution: Some(from_reviews(reviews)),
        five_star_count,
        four_star_count,
        three_star_count,
        two_star_count,
        one_star_count,
    }
}
