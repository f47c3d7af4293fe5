//! Review analysis records produced by `pharmafind-reviews`.

use serde::Serialize;

/// Star histogram and spread statistics for a place's ratings.
///
/// `counts` and `percentages` are indexed by `star - 1`. Out-of-range
/// ratings are not bucketed but still count towards `total_reviews`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingDistribution {
    pub counts: [usize; 5],
    pub percentages: [f64; 5],
    /// `1 - variance / 4`, floored at 0.
    pub consistency: f64,
    pub total_reviews: usize,
}

impl RatingDistribution {
    /// Number of reviews with exactly `star` stars; 0 for stars outside 1–5.
    #[must_use]
    pub fn count(&self, star: u8) -> usize {
        match star {
            1..=5 => self.counts[usize::from(star - 1)],
            _ => 0,
        }
    }

    /// Share of all reviews with exactly `star` stars, in percent.
    #[must_use]
    pub fn percentage(&self, star: u8) -> f64 {
        match star {
            1..=5 => self.percentages[usize::from(star - 1)],
            _ => 0.0,
        }
    }
}

/// One review with its computed lexicon sentiment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewSentiment {
    pub text: String,
    pub rating: i32,
    pub sentiment: f64,
    pub author: String,
    pub relative_time: String,
}

/// Aggregate view over all reviews of one place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewAnalysis {
    /// Mean lexicon sentiment in `[-1, 1]`.
    pub average_sentiment: f64,
    /// `average_sentiment` mapped onto `[0, 1]`.
    pub sentiment_score: f64,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
    pub total_reviews: usize,
    pub has_enough_reviews: bool,
    pub top_positive: Vec<ReviewSentiment>,
    pub top_negative: Vec<ReviewSentiment>,
    pub all_sentiments: Vec<ReviewSentiment>,
    pub rating_distribution: Option<RatingDistribution>,
    pub five_star_count: usize,
    pub four_star_count: usize,
    pub three_star_count: usize,
    pub two_star_count: usize,
    pub one_star_count: usize,
}

impl ReviewAnalysis {
    /// The zero-state analysis for a place with no reviews.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            average_sentiment: 0.0,
            sentiment_score: 0.0,
            positive_count: 0,
            negative_count: 0,
            neutral_count: 0,
            total_reviews: 0,
            has_enough_reviews: false,
            top_positive: Vec::new(),
            top_negative: Vec::new(),
            all_sentiments: Vec::new(),
            rating_distribution: None,
            five_star_count: 0,
            four_star_count: 0,
            three_star_count: 0,
            two_star_count: 0,
            one_star_count: 0,
        }
    }
}
