//! Keyword lexicon scorer for pharmacy review text.

use std::sync::LazyLock;

use regex::Regex;

/// Words and phrases that push a review towards positive.
pub(crate) const POSITIVE_WORDS: &[&str] = &[
    "excellent",
    "great",
    "good",
    "best",
    "amazing",
    "wonderful",
    "fantastic",
    "helpful",
    "friendly",
    "professional",
    "quick",
    "fast",
    "clean",
    "reliable",
    "recommend",
    "love",
    "perfect",
    "quality",
    "awesome",
    "nice",
    "pleasant",
    "efficient",
    "caring",
    "polite",
    "knowledgeable",
    "trustworthy",
];

/// Words and phrases that push a review towards negative.
pub(crate) const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "worst",
    "poor",
    "awful",
    "horrible",
    "disappointing",
    "rude",
    "unprofessional",
    "slow",
    "dirty",
    "expensive",
    "overpriced",
    "unhelpful",
    "disorganized",
    "waited",
    "long wait",
    "never",
    "avoid",
    "waste",
    "incompetent",
    "careless",
    "negligent",
    "arrogant",
];

static POSITIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(POSITIVE_WORDS));
static NEGATIVE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(NEGATIVE_WORDS));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

fn compile(words: &[&str]) -> Vec<Regex> {
    words
        .iter()
        .map(|w| Regex::new(&format!(r"\b{}\b", regex::escape(w))).expect("valid regex"))
        .collect()
}

fn count_matches(patterns: &[Regex], text: &str) -> usize {
    patterns.iter().map(|re| re.find_iter(text).count()).sum()
}

/// Score optional review text. Absent text scores `0.0`.
#[must_use]
pub fn sentiment_score(text: Option<&str>) -> f64 {
    text.map_or(0.0, score_text)
}

/// Score a review in `[-1.0, 1.0]`.
///
/// Every whole-word lexicon hit counts once (repeats count again). The net
/// hit count is divided by `max(word_count * 0.1, 1)` so a single keyword
/// dominates a short review while long reviews need proportionally more hits,
/// then clamped. Returns `0.0` for empty text.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn score_text(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let lower = text.to_lowercase();
    let positive = count_matches(&POSITIVE_PATTERNS, &lower) as f64;
    let negative = count_matches(&NEGATIVE_PATTERNS, &lower) as f64;
    let raw = positive - negative;

    let word_count = WHITESPACE_RE.split(&lower).count() as f64;
    (raw / (word_count * 0.1).max(1.0)).clamp(-1.0, 1.0)
}
