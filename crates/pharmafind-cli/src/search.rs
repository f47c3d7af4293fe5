//! `search` command: find, enrich and rank pharmacies around a point.

use std::io::Write;
use std::time::Duration;

use pharmafind_core::{AppConfig, Coordinates, Place, SortMode};
use pharmafind_places::{
    EnrichmentOutcome, Enricher, FixedLocation, PlacesClient, SearchSession, SearchSettings,
};
use pharmafind_reviews::{ConsistencyTier, SentimentLabel};

pub(crate) struct SearchOptions {
    pub(crate) center: Option<(f64, f64)>,
    pub(crate) radius_km: Option<f64>,
    pub(crate) sort: SortMode,
    pub(crate) limit: Option<usize>,
    pub(crate) enrich: bool,
    pub(crate) json: bool,
}

/// Run one search, enrich every hit, and print the ranked list.
///
/// # Errors
///
/// Returns an error if the API key is missing, the client cannot be built,
/// or the place search itself fails. Individual detail fetch failures are
/// logged and skipped by the enricher, not propagated.
pub(crate) async fn run_search(config: &AppConfig, options: &SearchOptions) -> anyhow::Result<()> {
    let api_key = config.require_places_api_key()?;
    let client = PlacesClient::with_base_url(
        api_key,
        config.request_timeout_secs,
        &config.places_base_url,
    )
    .map_err(|e| anyhow::anyhow!("failed to build places client: {e}"))?
    .with_query(&config.place_query);

    let mut settings = SearchSettings::from_config(config);
    if let Some(limit) = options.limit {
        settings.max_results = limit;
    }
    let requested_radius = options.radius_km.unwrap_or(settings.default_radius_km);
    let radius_km = settings.resolve_radius(requested_radius);

    let center = options
        .center
        .map_or(config.default_center, |(lat, lng)| Coordinates { lat, lng });

    let mut session = SearchSession::new(client.clone(), settings);
    let found = session
        .search_from(&FixedLocation(center), requested_radius)
        .await?;
    session.sort_by(options.sort);

    if found == 0 {
        println!(
            "no pharmacies found within {radius_km}km of {:.4},{:.4}",
            center.lat, center.lng
        );
        return Ok(());
    }

    if options.enrich {
        let enricher = Enricher::new(client)
            .with_weights(config.weights)
            .with_min_reviews(config.min_reviews_for_analysis)
            .with_inter_request_delay(Duration::from_millis(config.inter_request_delay_ms));

        let outcome = session
            .enrich(&enricher, |progress| {
                eprint!("\rfetching details {}/{}", progress.processed, progress.total);
                let _ = std::io::stderr().flush();
            })
            .await;
        eprintln!();

        if let EnrichmentOutcome::Completed(summary) = outcome {
            if summary.failed > 0 || summary.unavailable > 0 {
                eprintln!(
                    "details missing for {} place(s), failed for {}",
                    summary.unavailable, summary.failed
                );
            }
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(session.places())?);
        return Ok(());
    }

    println!(
        "{} pharmacies within {radius_km}km, sorted by {}",
        session.places().len(),
        session.sort_mode()
    );
    println!(
        "{:<4}{:<32}{:<9}{:<14}{:<7}{:<15}CONSISTENCY",
        "#", "NAME", "DIST", "RATING", "SCORE", "SENTIMENT"
    );
    for (index, place) in session.places().iter().enumerate() {
        println!("{}", format_place_row(index + 1, place));
    }

    Ok(())
}

/// One table row for a ranked place. Missing values print as `-`.
pub(crate) fn format_place_row(rank: usize, place: &Place) -> String {
    let rating = place.rating.map_or_else(
        || "-".to_string(),
        |r| format!("{r:.1} ({})", place.user_ratings_total),
    );
    let analysis = place.review_analysis.as_ref();
    let sentiment = analysis
        .filter(|a| a.total_reviews > 0)
        .map_or_else(
            || "-".to_string(),
            |a| SentimentLabel::from_score(a.sentiment_score).to_string(),
        );
    let consistency = analysis
        .and_then(|a| a.rating_distribution.as_ref())
        .filter(|d| d.consistency > 0.0)
        .map_or_else(
            || "-".to_string(),
            |d| {
                format!(
                    "{:.0}% ({})",
                    d.consistency * 100.0,
                    ConsistencyTier::from_consistency(d.consistency)
                )
            },
        );

    let score = if place.overall_score > 0.0 {
        format!("{:.0}", place.overall_score * 100.0)
    } else {
        "-".to_string()
    };

    format!(
        "{:<4}{:<32}{:<9}{:<14}{:<7}{:<15}{}",
        rank,
        truncate(&place.name, 30),
        place.distance_text(),
        rating,
        score,
        sentiment,
        consistency
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
