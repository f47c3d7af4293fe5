//! Review scoring and ranking for pharmafind.
//!
//! Scores review text against a fixed keyword lexicon, summarises star
//! ratings into a histogram with a consistency metric, aggregates both into
//! a per-place [`ReviewAnalysis`](pharmafind_core::ReviewAnalysis), and blends
//! rating, sentiment and proximity into a single ranking score.

pub mod analysis;
pub mod distribution;
pub mod labels;
pub mod ranking;
pub mod scorer;

pub use analysis::{analyze_reviews, MIN_REVIEWS_FOR_ANALYSIS};
pub use distribution::rating_distribution;
pub use labels::{ConsistencyTier, SentimentLabel};
pub use ranking::{overall_score, sort_places, DISTANCE_HORIZON_KM};
pub use scorer::{score_text, sentiment_score};
