//! Offline review commands: analyze a reviews file, score a single text.

use std::path::Path;

use pharmafind_core::Review;
use pharmafind_reviews::{analyze_reviews, score_text, SentimentLabel};

/// Analyze the reviews in a JSON file and print the analysis as JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array of reviews.
pub(crate) fn run_analyze(path: &Path, min_reviews: usize) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let reviews = parse_reviews(&raw)
        .map_err(|e| anyhow::anyhow!("failed to parse {}: {e}", path.display()))?;

    let analysis = analyze_reviews(&reviews, min_reviews);
    tracing::debug!(
        total = analysis.total_reviews,
        has_enough = analysis.has_enough_reviews,
        "analyzed reviews file"
    );
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

pub(crate) fn parse_reviews(raw: &str) -> serde_json::Result<Vec<Review>> {
    serde_json::from_str(raw)
}

/// Print the lexicon score of `text` with its label.
pub(crate) fn run_score(text: &str) {
    let score = score_text(text);
    let label = SentimentLabel::from_score((score + 1.0) / 2.0);
    println!("{score:.3} ({label})");
}
