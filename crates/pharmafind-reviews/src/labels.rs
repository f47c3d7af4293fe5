//! Coarse labels for sentiment and consistency scores.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl SentimentLabel {
    /// Classify a `[0, 1]` sentiment score (see `ReviewAnalysis::sentiment_score`).
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            Self::VeryPositive
        } else if score > 0.4 {
            Self::Positive
        } else if score > 0.3 {
            Self::Neutral
        } else if score > 0.2 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VeryPositive => write!(f, "Very Positive"),
            Self::Positive => write!(f, "Positive"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Negative => write!(f, "Negative"),
            Self::VeryNegative => write!(f, "Very Negative"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyTier {
    High,
    Good,
    Fair,
    Low,
}

impl ConsistencyTier {
    #[must_use]
    pub fn from_consistency(consistency: f64) -> Self {
        if consistency > 0.8 {
            Self::High
        } else if consistency > 0.6 {
            Self::Good
        } else if consistency > 0.4 {
            Self::Fair
        } else {
            Self::Low
        }
    }
}

impl std::fmt::Display for ConsistencyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Good => write!(f, "good"),
            Self::Fair => write!(f, "fair"),
            Self::Low => write!(f, "low"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_label_thresholds_are_exclusive() {
        assert_eq!(SentimentLabel::from_score(1.0), SentimentLabel::VeryPositive);
        assert_eq!(SentimentLabel::from_score(0.6), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.5), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from_score(0.4), SentimentLabel::Neutral);
        assert_eq!(SentimentLabel::from_score(0.3), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from_score(0.2), SentimentLabel::VeryNegative);
        assert_eq!(SentimentLabel::from_score(0.0), SentimentLabel::VeryNegative);
    }

    #[test]
    fn sentiment_label_display() {
        assert_eq!(SentimentLabel::VeryPositive.to_string(), "Very Positive");
    }

    #[test]
    fn consistency_tiers() {
        assert_eq!(ConsistencyTier::from_consistency(1.0), ConsistencyTier::High);
        assert_eq!(ConsistencyTier::from_consistency(0.8), ConsistencyTier::Good);
        assert_eq!(ConsistencyTier::from_consistency(0.5), ConsistencyTier::Fair);
        assert_eq!(ConsistencyTier::from_consistency(0.0), ConsistencyTier::Low);
        assert_eq!(ConsistencyTier::Good.to_string(), "good");
    }
}
